use site_data::{content::Link, SectionId};
use yew::prelude::*;

use crate::theme::ThemeToggle;

// the controller itself stays with the page, components only get callbacks
#[derive(Clone, PartialEq)]
pub struct Navigator {
	pub go_to: Callback<SectionId>,
	pub toggle_menu: Callback<()>,
	pub key: Callback<String>,
	pub menu_open: bool
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
	pub link: Link,
	pub nav: Navigator,
	#[prop_or_default]
	pub class: Classes
}

// the href still works if wasm never loads
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
	let target = props.link.target;
	let go_to = props.nav.go_to.clone();
	let onclick = Callback::from(move |e: MouseEvent| {
		e.prevent_default();
		go_to.emit(target);
	});

	html! {
		<a href={ target.href() } class={ props.class.clone() } onclick={ onclick }>{ &props.link.label }</a>
	}
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
	pub brand: AttrValue,
	pub links: Vec<Link>,
	pub nav: Navigator
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
	let open = props.nav.menu_open;

	let toggle = props.nav.toggle_menu.reform(|_: MouseEvent| ());
	let onkeydown = props.nav.key.reform(|e: KeyboardEvent| e.key());

	let home = Link { label: props.brand.to_string(), target: SectionId::Home };

	html! {
		<header id="site-header" onkeydown={ onkeydown }>
			<SectionLink link={ home } nav={ props.nav.clone() } class="brand" />
			<button
				class="menu-toggle"
				type="button"
				aria-controls="site-menu"
				aria-expanded={ open.to_string() }
				aria-label={ if open { "Close menu" } else { "Open menu" } }
				onclick={ toggle }
			>
				<span aria-hidden="true">{ if open { "✕" } else { "☰" } }</span>
			</button>
			<nav id="site-menu" class={ classes!(open.then_some("open")) } aria-label="Sections">
				<ul>
				{
					props.links.iter().map(|link| html! {
						<li><SectionLink link={ link.clone() } nav={ props.nav.clone() } /></li>
					}).collect::<Html>()
				}
				</ul>
			</nav>
			<ThemeToggle />
		</header>
	}
}
