use gloo_console::log;
use site_data::{theme::ThemeManager, Theme};
use yew::prelude::*;

use crate::browser::{self, LocalStorage};

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
	pub theme: Theme,
	pub toggle: Callback<()>
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
	pub children: Children
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
	// the manager owns the storage slot; the state is only there to trigger a redraw
	let manager = use_mut_ref(|| ThemeManager::new(LocalStorage));
	let theme = use_state(|| manager.borrow().theme());

	use_effect_with(*theme, |theme| browser::apply_theme(*theme));

	let toggle = {
		let theme = theme.clone();
		Callback::from(move |()| {
			// this has already been written to storage by the time we ask for a redraw
			let next = match manager.borrow_mut().toggle() {
				Ok(next) => next,
				Err((next, e)) => {
					log!(format!("Theme won't be remembered: {e}"));
					next
				}
			};
			theme.set(next);
		})
	};

	let context = ThemeContext { theme: *theme, toggle };

	html! {
		<ContextProvider<ThemeContext> context={ context }>
			{ props.children.clone() }
		</ContextProvider<ThemeContext>>
	}
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
	let Some(ctx) = use_context::<ThemeContext>() else {
		log!("ThemeToggle rendered outside of a ThemeProvider");
		return html! {};
	};

	let (icon, label) = match ctx.theme {
		Theme::Light => ("☾", "Switch to dark theme"),
		Theme::Dark => ("☀", "Switch to light theme")
	};

	let onclick = ctx.toggle.reform(|_: MouseEvent| ());

	html! {
		<button
			class="theme-toggle"
			type="button"
			aria-label={ label }
			title={ label }
			aria-pressed={ (ctx.theme == Theme::Dark).to_string() }
			onclick={ onclick }
		>
			<span aria-hidden="true">{ icon }</span>
		</button>
	}
}

#[cfg(test)]
mod tests {
	use site_data::THEME_STORAGE_KEY;

	use super::*;

	const INDEX: &str = include_str!("../index.html");

	#[test]
	fn stored_dark_theme_applies_before_wasm() {
		assert!(INDEX.contains(&format!("class=\"{}\"", Theme::default().class_name())));
		assert!(INDEX.contains(&format!("localStorage.getItem(\"{THEME_STORAGE_KEY}\")")));
		assert!(INDEX.contains(&format!("=== \"{}\"", Theme::Dark.as_str())));
		assert!(INDEX.contains(&format!(
			"replace(\"{}\", \"{}\")",
			Theme::Light.class_name(),
			Theme::Dark.class_name()
		)));
	}
}
