use std::fmt;

use serde::{Deserialize, Serialize};

// a typo in the content table fails to deserialize instead of linking nowhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
	Home,
	About,
	Services,
	Gallery,
	HowItWorks,
	Weddings,
	VowRenewals,
	Naming,
	CelebrationOfLife,
	YourFuneral,
	Faq,
	Privacy,
	Contact
}

impl SectionId {
	pub const ALL: [Self; 13] = [
		Self::Home,
		Self::About,
		Self::Services,
		Self::Gallery,
		Self::HowItWorks,
		Self::Weddings,
		Self::VowRenewals,
		Self::Naming,
		Self::CelebrationOfLife,
		Self::YourFuneral,
		Self::Faq,
		Self::Privacy,
		Self::Contact
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::About => "about",
			Self::Services => "services",
			Self::Gallery => "gallery",
			Self::HowItWorks => "how-it-works",
			Self::Weddings => "weddings",
			Self::VowRenewals => "vow-renewals",
			Self::Naming => "naming",
			Self::CelebrationOfLife => "celebration-of-life",
			Self::YourFuneral => "your-funeral",
			Self::Faq => "faq",
			Self::Privacy => "privacy",
			Self::Contact => "contact"
		}
	}

	pub fn href(self) -> String {
		format!("#{}", self.as_str())
	}
}

impl fmt::Display for SectionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

pub fn normalize_anchor(anchor: &str) -> &str {
	let trimmed = anchor.trim();
	trimmed.strip_prefix('#').unwrap_or(trimmed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
	Smooth,
	Instant
}

impl ScrollBehavior {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Smooth => "smooth",
			Self::Instant => "instant"
		}
	}
}

pub trait Viewport {
	fn has_element(&self, id: &str) -> bool;

	fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior);

	// without putting it in the tab order, and without scrolling again
	fn focus(&mut self, id: &str);

	fn set_fragment(&mut self, id: &str);

	fn body_overflow(&self) -> String;

	fn set_body_overflow(&mut self, value: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
	Revealed(String),
	// nothing had this id
	FragmentOnly(String)
}

pub struct NavController<V> {
	viewport: V,
	menu_open: bool,
	reduced_motion: bool,
	// what `overflow` was on the body before we opened the menu, so we can put it back
	saved_overflow: Option<String>
}

impl<V: Viewport> NavController<V> {
	pub fn new(viewport: V, reduced_motion: bool) -> Self {
		Self {
			viewport,
			menu_open: false,
			reduced_motion,
			saved_overflow: None
		}
	}

	pub fn is_menu_open(&self) -> bool {
		self.menu_open
	}

	pub fn set_reduced_motion(&mut self, reduced: bool) {
		self.reduced_motion = reduced;
	}

	pub fn scroll_behavior(&self) -> ScrollBehavior {
		if self.reduced_motion {
			ScrollBehavior::Instant
		} else {
			ScrollBehavior::Smooth
		}
	}

	pub fn go_to(&mut self, anchor: &str) -> NavOutcome {
		// navigating from inside the menu always closes it
		self.close_menu();

		let id = normalize_anchor(anchor);

		if !id.is_empty() && self.viewport.has_element(id) {
			let behavior = self.scroll_behavior();
			self.viewport.scroll_into_view(id, behavior);
			self.viewport.focus(id);
			NavOutcome::Revealed(id.to_string())
		} else {
			self.viewport.set_fragment(id);
			NavOutcome::FragmentOnly(id.to_string())
		}
	}

	pub fn toggle_menu(&mut self) -> bool {
		if self.menu_open {
			self.close_menu();
		} else {
			self.open_menu();
		}
		self.menu_open
	}

	fn open_menu(&mut self) {
		if self.menu_open {
			return;
		}

		self.saved_overflow = Some(self.viewport.body_overflow());
		self.viewport.set_body_overflow("hidden");
		self.menu_open = true;
	}

	pub fn close_menu(&mut self) {
		if !self.menu_open {
			return;
		}

		let prior = self.saved_overflow.take().unwrap_or_default();
		self.viewport.set_body_overflow(&prior);
		self.menu_open = false;
	}

	// true if the key was used for something
	pub fn handle_key(&mut self, key: &str) -> bool {
		if key == "Escape" && self.menu_open {
			self.close_menu();
			true
		} else {
			false
		}
	}

	#[cfg(test)]
	fn viewport(&self) -> &V {
		&self.viewport
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[derive(Debug, Clone, PartialEq)]
	pub enum Call {
		Scroll(String, ScrollBehavior),
		Focus(String),
		Fragment(String),
		Overflow(String)
	}

	#[derive(Default)]
	pub struct FakeViewport {
		pub ids: HashSet<String>,
		pub overflow: String,
		pub calls: Vec<Call>
	}

	impl FakeViewport {
		pub fn with_ids(ids: &[&str]) -> Self {
			Self {
				ids: ids.iter().map(|s| s.to_string()).collect(),
				overflow: "auto".into(),
				calls: Vec::new()
			}
		}
	}

	impl Viewport for FakeViewport {
		fn has_element(&self, id: &str) -> bool {
			self.ids.contains(id)
		}
		fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) {
			self.calls.push(Call::Scroll(id.into(), behavior));
		}
		fn focus(&mut self, id: &str) {
			self.calls.push(Call::Focus(id.into()));
		}
		fn set_fragment(&mut self, id: &str) {
			self.calls.push(Call::Fragment(id.into()));
		}
		fn body_overflow(&self) -> String {
			self.overflow.clone()
		}
		fn set_body_overflow(&mut self, value: &str) {
			self.overflow = value.into();
			self.calls.push(Call::Overflow(value.into()));
		}
	}

	fn controller() -> NavController<FakeViewport> {
		NavController::new(FakeViewport::with_ids(&["contact", "about"]), false)
	}

	#[test]
	fn hash_prefix_is_optional() {
		let mut plain = controller();
		let mut hashed = controller();

		assert_eq!(plain.go_to("contact"), NavOutcome::Revealed("contact".into()));
		assert_eq!(hashed.go_to("#contact"), NavOutcome::Revealed("contact".into()));
		assert_eq!(plain.viewport().calls, hashed.viewport().calls);
		assert_eq!(plain.viewport().calls, vec![
			Call::Scroll("contact".into(), ScrollBehavior::Smooth),
			Call::Focus("contact".into())
		]);
	}

	#[test]
	fn unknown_anchor_only_touches_fragment() {
		let mut nav = controller();
		assert_eq!(nav.go_to("nonexistent"), NavOutcome::FragmentOnly("nonexistent".into()));
		assert_eq!(nav.viewport().calls, vec![Call::Fragment("nonexistent".into())]);
	}

	#[test]
	fn menu_locks_and_restores_scroll() {
		let mut nav = controller();
		nav.viewport.overflow = "scroll".into();

		assert!(nav.toggle_menu());
		assert_eq!(nav.viewport().overflow, "hidden");

		assert!(!nav.toggle_menu());
		assert_eq!(nav.viewport().overflow, "scroll");
	}

	#[test]
	fn navigating_closes_menu() {
		let mut nav = controller();
		nav.toggle_menu();
		nav.go_to("#about");

		assert!(!nav.is_menu_open());
		assert_eq!(nav.viewport().overflow, "auto");
		// the scroll lock is released before we scroll anywhere
		assert_eq!(nav.viewport().calls[1], Call::Overflow("auto".into()));
	}

	#[test]
	fn escape_closes_menu() {
		let mut nav = controller();
		assert!(!nav.handle_key("Escape"));
		nav.toggle_menu();
		assert!(!nav.handle_key("Enter"));
		assert!(nav.handle_key("Escape"));
		assert!(!nav.is_menu_open());
	}

	#[test]
	fn reduced_motion_is_read_at_call_time() {
		let mut nav = controller();
		nav.set_reduced_motion(true);
		nav.go_to("about");
		nav.set_reduced_motion(false);
		nav.go_to("about");

		let scrolls = nav.viewport().calls.iter()
			.filter_map(|c| match c {
				Call::Scroll(_, behavior) => Some(*behavior),
				_ => None
			})
			.collect::<Vec<_>>();

		assert_eq!(scrolls, vec![ScrollBehavior::Instant, ScrollBehavior::Smooth]);
	}

	#[test]
	fn serde_names_match_anchors() {
		for section in SectionId::ALL {
			let json = serde_json::to_string(&section).unwrap();
			assert_eq!(json, format!("\"{}\"", section.as_str()));
		}
	}
}
