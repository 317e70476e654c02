// Everything in here talks to the browser directly. The state that decides *what* to do lives in
// `site_data`; these are just the hands.
use gloo_console::{error, log};
use site_data::{
	contact::{HandoffError, MailHandoff},
	content::Business,
	nav::{ScrollBehavior, Viewport},
	theme::{StorageError, ThemeStore},
	Theme,
	REDUCED_MOTION_QUERY
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
	AddEventListenerOptions,
	Document,
	Element,
	FocusOptions,
	HtmlElement,
	MediaQueryList,
	MediaQueryListEvent,
	ScrollIntoViewOptions,
	Storage,
	Window
};

const JSON_LD_ID: &str = "structured-metadata";

fn window() -> Option<Window> {
	web_sys::window()
}

fn document() -> Option<Document> {
	window().and_then(|w| w.document())
}

fn element(id: &str) -> Option<Element> {
	document().and_then(|doc| doc.get_element_by_id(id))
}

fn body() -> Option<HtmlElement> {
	document().and_then(|doc| doc.body())
}

// some private modes won't hand out localStorage, the theme just won't survive a reload then
pub struct LocalStorage;

impl LocalStorage {
	fn storage() -> Result<Storage, StorageError> {
		window()
			.and_then(|w| w.local_storage().ok())
			.flatten()
			.ok_or(StorageError::Unavailable)
	}
}

impl ThemeStore for LocalStorage {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
		Self::storage()?
			.get_item(key)
			.map_err(|e| StorageError::Rejected(format!("{e:?}")))
	}

	fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		Self::storage()?
			.set_item(key, value)
			.map_err(|e| StorageError::Rejected(format!("{e:?}")))
	}
}

pub fn apply_theme(theme: Theme) {
	let Some(root) = document().and_then(|doc| doc.document_element()) else {
		log!("No document element to put the theme on");
		return;
	};

	let classes = root.class_list();
	for candidate in [Theme::Light, Theme::Dark] {
		if let Err(e) = classes.toggle_with_force(candidate.class_name(), candidate == theme) {
			log!("Couldn't update theme class: ", e);
		}
	}

	_ = root.set_attribute("data-theme", theme.as_str());
}

fn set_reduce_motion_class(reduced: bool) {
	if let Some(root) = document().and_then(|doc| doc.document_element()) {
		_ = root.class_list().toggle_with_force("reduce-motion", reduced);
	}
}

pub struct DomViewport;

impl Viewport for DomViewport {
	fn has_element(&self, id: &str) -> bool {
		element(id).is_some()
	}

	fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) {
		let Some(el) = element(id) else { return };

		let opts = ScrollIntoViewOptions::new();
		opts.set_behavior(match behavior {
			ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
			ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant
		});
		el.scroll_into_view_with_scroll_into_view_options(&opts);
	}

	fn focus(&mut self, id: &str) {
		let Some(el) = element(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
			log!(format!("#{id} can't take focus"));
			return;
		};

		// sections aren't focusable on their own, so give it a tabindex until focus moves away
		// again. It stays out of the tab order either way.
		if !el.has_attribute("tabindex") {
			_ = el.set_attribute("tabindex", "-1");

			let target = el.clone();
			let cleanup = Closure::once_into_js(move || {
				_ = target.remove_attribute("tabindex");
			});

			let once = AddEventListenerOptions::new();
			once.set_once(true);
			if let Err(e) = el.add_event_listener_with_callback_and_add_event_listener_options(
				"blur",
				cleanup.unchecked_ref(),
				&once
			) {
				log!("Couldn't listen for blur: ", e);
			}
		}

		// we've already scrolled, and scrolling again here would skip the smooth animation
		let opts = FocusOptions::new();
		opts.set_prevent_scroll(true);
		if let Err(e) = el.focus_with_options(&opts) {
			log!(format!("Couldn't focus #{id}: "), e);
		}
	}

	fn set_fragment(&mut self, id: &str) {
		if let Some(Err(e)) = window().map(|w| w.location().set_hash(id)) {
			log!(format!("Couldn't set fragment to #{id}: "), e);
		}
	}

	fn body_overflow(&self) -> String {
		body()
			.and_then(|b| b.style().get_property_value("overflow").ok())
			.unwrap_or_default()
	}

	fn set_body_overflow(&mut self, value: &str) {
		let Some(style) = body().map(|b| b.style()) else {
			log!("No body to lock scrolling on");
			return;
		};

		let res = if value.is_empty() {
			style.remove_property("overflow").map(|_| ())
		} else {
			style.set_property("overflow", value)
		};

		if let Err(e) = res {
			log!("Couldn't change body overflow: ", e);
		}
	}
}

pub struct MailClient;

impl MailHandoff for MailClient {
	fn open(&mut self, link: &str) -> Result<(), HandoffError> {
		window()
			.ok_or_else(|| HandoffError("there's no window".into()))?
			.location()
			.set_href(link)
			.map_err(|e| HandoffError(format!("{e:?}")))
	}
}

fn reduced_motion_list() -> Option<MediaQueryList> {
	window()
		.and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok())
		.flatten()
}

pub fn prefers_reduced_motion() -> bool {
	let reduced = reduced_motion_list().is_some_and(|list| list.matches());
	set_reduce_motion_class(reduced);
	reduced
}

// unregisters the listener when dropped
pub struct MotionWatch {
	list: MediaQueryList,
	callback: Closure<dyn FnMut(MediaQueryListEvent)>,
	legacy: bool
}

impl Drop for MotionWatch {
	fn drop(&mut self) {
		let func = self.callback.as_ref().unchecked_ref::<js_sys::Function>();
		let res = if self.legacy {
			self.list.remove_listener_with_opt_callback(Some(func))
		} else {
			self.list.remove_event_listener_with_callback("change", func)
		};

		if let Err(e) = res {
			log!("Couldn't stop watching for reduced motion: ", e);
		}
	}
}

pub fn watch_reduced_motion(mut on_change: impl FnMut(bool) + 'static) -> Option<MotionWatch> {
	let Some(list) = reduced_motion_list() else {
		log!("matchMedia isn't available, so reduced motion won't be tracked");
		return None;
	};

	let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
		let reduced = ev.matches();
		set_reduce_motion_class(reduced);
		on_change(reduced);
	});

	let func = callback.as_ref().unchecked_ref::<js_sys::Function>();

	// older safari only has the deprecated addListener
	let legacy = match list.add_event_listener_with_callback("change", func) {
		Ok(()) => false,
		Err(e) => {
			log!("addEventListener on the media query failed, trying addListener: ", e);
			if let Err(e) = list.add_listener_with_opt_callback(Some(func)) {
				error!("Couldn't watch for reduced motion at all: ", e);
				return None;
			}
			true
		}
	};

	Some(MotionWatch { list, callback, legacy })
}

// replaces any copy already in <head>
pub fn inject_json_ld(business: &Business) {
	let script = match site_data::metadata::json_ld_script(business, site_data::CONTACT_EMAIL, site_data::SITE_URL) {
		Ok(script) => script,
		Err(e) => {
			error!(format!("Couldn't serialize structured metadata: {e}"));
			return;
		}
	};

	let Some(doc) = document() else { return };
	let Some(head) = doc.head() else {
		log!("No <head> to put structured metadata in");
		return;
	};

	if let Some(old) = doc.get_element_by_id(JSON_LD_ID) {
		old.remove();
	}

	let el = match doc.create_element("script") {
		Ok(el) => el,
		Err(e) => {
			error!("Couldn't create the metadata script: ", e);
			return;
		}
	};

	_ = el.set_attribute("type", "application/ld+json");
	el.set_id(JSON_LD_ID);
	el.set_text_content(Some(&script));

	if let Err(e) = head.append_child(&el) {
		error!("Couldn't append the metadata script: ", e);
	}
}
