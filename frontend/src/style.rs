use const_format::concatcp;
use yew::prelude::*;

const HEADER: &str = r#"
#site-header {
	position: sticky;
	top: 0;
	z-index: 20;
	display: flex;
	align-items: center;
	gap: 16px;
	padding: 12px 20px;
	background-color: var(--page-background);
	border-bottom: 1px solid var(--border-color);
}
#site-header .brand {
	font-size: 24px;
	color: var(--main-text);
	text-decoration: none;
	margin-right: auto;
}
#site-menu ul {
	display: flex;
	gap: 18px;
	list-style: none;
	margin: 0;
	padding: 0;
}
#site-menu a {
	color: var(--main-text);
	text-decoration: none;
}
.menu-toggle, .theme-toggle {
	background: none;
	border: 1px solid var(--border-color);
	border-radius: 8px;
	padding: 4px 10px;
}
.menu-toggle {
	display: none;
}
@media (max-width: 800px) {
	.menu-toggle {
		display: inline-block;
	}
	#site-menu {
		display: none;
	}
	#site-menu.open {
		display: block;
		position: fixed;
		inset: 57px 0 0 0;
		background-color: var(--page-background);
		padding: 24px;
		overflow-y: auto;
	}
	#site-menu.open ul {
		flex-direction: column;
		font-size: 24px;
	}
}
"#;

const HERO: &str = r#"
.hero {
	position: relative;
	max-width: none;
	padding: 0;
}
.hero-image {
	display: block;
	width: 100%;
	height: min(80vh, 720px);
	object-fit: cover;
}
.hero-text {
	position: absolute;
	bottom: 40px;
	left: 50%;
	transform: translateX(-50%);
	width: min(90%, 860px);
	text-align: center;
	color: #fff;
	text-shadow: 0 0 14px rgba(0, 0, 0, 0.8);
}
.hero-text h1 {
	font-size: clamp(32px, 5vw, 56px);
}
.call-to-action, .submit-button {
	display: inline-block;
	padding: 10px 20px;
	border: none;
	border-radius: 24px;
	background-color: var(--accent);
	color: var(--accent-text);
	text-decoration: none;
	text-shadow: none;
	transition: 0.2s linear;
}
.call-to-action:hover, .submit-button:hover {
	filter: brightness(1.1);
}
"#;

const CARDS: &str = r#"
.service-cards, .steps {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
	gap: 18px;
	padding: 0;
}
.service-cards {
	list-style: none;
}
.service-card a {
	display: block;
	height: 100%;
	padding: 18px;
	border-radius: 12px;
	background-color: var(--panel-background);
	box-shadow: 0 2px 10px var(--shadow);
	color: var(--main-text);
	text-decoration: none;
}
.service-icon {
	font-size: 32px;
}
.section-links a {
	margin-right: 18px;
}
"#;

const DISCLOSURES: &str = r#"
.disclosure {
	border-bottom: 1px solid var(--border-color);
}
.disclosure h3 {
	margin: 0;
}
.disclosure button {
	display: flex;
	justify-content: space-between;
	width: 100%;
	padding: 14px 4px;
	background: none;
	border: none;
	text-align: left;
	font-size: 21px;
}
.disclosure-body {
	padding: 0 4px 16px 4px;
	white-space: pre-wrap;
	color: var(--secondary-text);
}
"#;

const GALLERY: &str = r#"
.gallery-grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
	gap: 10px;
	list-style: none;
	padding: 0;
}
.gallery-grid li {
	overflow: hidden;
	border-radius: 8px;
	background-color: var(--panel-background);
}
.gallery-grid img {
	display: block;
	width: 100%;
	height: 100%;
	object-fit: cover;
}
"#;

const FORM: &str = r#"
.contact-form {
	display: grid;
	gap: 6px;
	max-width: 560px;
}
.contact-form input, .contact-form select, .contact-form textarea {
	font: inherit;
	padding: 8px 10px;
	border: 1px solid var(--border-color);
	border-radius: 8px;
	background-color: var(--panel-background);
	color: var(--main-text);
}
.contact-form .submit-button {
	justify-self: start;
	margin-top: 12px;
}
.field-problem, .form-error {
	color: #b3412e;
	margin: 0 0 6px 0;
}
.form-ok {
	color: var(--accent);
}
#site-footer {
	text-align: center;
	padding: 24px;
	border-top: 1px solid var(--border-color);
	color: var(--secondary-text);
}
"#;

const PAGE_STYLE: &str = concatcp!(HEADER, HERO, CARDS, DISCLOSURES, GALLERY, FORM);

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<>
			<style>{ site_data::BASE_STYLE }</style>
			<style>{ PAGE_STYLE }</style>
		</>
	}
}
