use const_format::concatcp;

// Both palettes hang off a class on the root element, which is what the theme toggle flips
const PALETTES: &str = r#"
.theme-light {
	--page-background: #fbf8f3;
	--panel-background: #ffffff;
	--main-text: #2f2a26;
	--secondary-text: #6b6259;
	--accent: #3f7f7a;
	--accent-text: #ffffff;
	--border-color: #e3dbd0;
	--shadow: rgba(47, 42, 38, 0.08);
	color-scheme: light;
}
.theme-dark {
	--page-background: #1c2124;
	--panel-background: #252c30;
	--main-text: #f1ece6;
	--secondary-text: #b9b0a6;
	--accent: #7cc2bb;
	--accent-text: #11201f;
	--border-color: #3a4449;
	--shadow: rgba(0, 0, 0, 0.4);
	color-scheme: dark;
}
"#;

const BASE: &str = r#"
* {
	box-sizing: border-box;
}
html {
	scroll-behavior: smooth;
}
html.reduce-motion {
	scroll-behavior: auto;
}
html.reduce-motion *, html.reduce-motion *::before, html.reduce-motion *::after {
	animation: none !important;
	transition: none !important;
}
body {
	margin: 0;
	background-color: var(--page-background);
	color: var(--main-text);
	font-family: "Cormorant Garamond", Georgia, serif;
	font-size: 19px;
	line-height: 1.55;
	transition: background-color 0.2s linear, color 0.2s linear;
}
a {
	color: var(--accent);
}
h1, h2, h3 {
	font-weight: 500;
	line-height: 1.2;
}
section {
	max-width: 960px;
	margin: 0 auto;
	padding: 64px 20px;
	scroll-margin-top: 72px;
}
section:focus {
	outline: none;
}
button {
	font: inherit;
	color: inherit;
	cursor: pointer;
}
.visually-hidden {
	position: absolute !important;
	width: 1px;
	height: 1px;
	overflow: hidden;
	clip: rect(0 0 0 0);
	white-space: nowrap;
}
"#;

pub static BASE_STYLE: &str = concatcp!(PALETTES, BASE);

#[cfg(test)]
#[test]
fn both_palettes_define_the_same_variables() {
	let vars = |class: &str| {
		let start = PALETTES.find(class).unwrap();
		let end = PALETTES[start..].find('}').unwrap() + start;
		PALETTES[start..end]
			.lines()
			.filter_map(|l| l.trim().strip_prefix("--"))
			.filter_map(|l| l.split(':').next())
			.map(str::to_string)
			.collect::<Vec<_>>()
	};

	assert_eq!(vars(".theme-light"), vars(".theme-dark"));
	assert!(BASE_STYLE.contains(crate::Theme::Dark.class_name()));
}
