use std::{fmt, str::FromStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark
}

impl Theme {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark"
		}
	}

	pub const fn class_name(self) -> &'static str {
		match self {
			Self::Light => "theme-light",
			Self::Dark => "theme-dark"
		}
	}

	pub const fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light
		}
	}

	pub fn from_stored(stored: Option<&str>) -> Self {
		stored.and_then(|s| s.parse().ok())
			.unwrap_or_default()
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Theme {
	type Err = ();
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			_ => Err(())
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
	Unavailable,
	Rejected(String)
}

impl fmt::Display for StorageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unavailable => f.write_str("storage isn't available in this browser"),
			Self::Rejected(why) => write!(f, "storage refused the write: {why}")
		}
	}
}

impl std::error::Error for StorageError {}

pub trait ThemeStore {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

	fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct ThemeManager<S> {
	store: S,
	key: &'static str,
	theme: Theme
}

impl<S: ThemeStore> ThemeManager<S> {
	// anything unreadable in storage means light
	pub fn new(store: S) -> Self {
		Self::with_key(store, crate::THEME_STORAGE_KEY)
	}

	fn with_key(store: S, key: &'static str) -> Self {
		let stored = store.load(key).ok().flatten();
		let theme = Theme::from_stored(stored.as_deref());
		Self { store, key, theme }
	}

	pub fn theme(&self) -> Theme {
		self.theme
	}

	// the in-memory theme changes even if the write fails
	pub fn set_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
		let saved = self.store.save(self.key, theme.as_str());
		self.theme = theme;
		saved
	}

	pub fn toggle(&mut self) -> Result<Theme, (Theme, StorageError)> {
		let next = self.theme.toggled();
		self.set_theme(next)
			.map(|()| next)
			.map_err(|e| (next, e))
	}

	#[cfg(test)]
	fn into_store(self) -> S {
		self.store
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[derive(Default)]
	struct MemoryStore {
		slots: HashMap<String, String>,
		broken: bool
	}

	impl ThemeStore for MemoryStore {
		fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
			if self.broken {
				return Err(StorageError::Unavailable);
			}
			Ok(self.slots.get(key).cloned())
		}

		fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
			if self.broken {
				return Err(StorageError::Rejected("quota".into()));
			}
			self.slots.insert(key.to_string(), value.to_string());
			Ok(())
		}
	}

	#[test]
	fn defaults_to_light() {
		assert_eq!(ThemeManager::new(MemoryStore::default()).theme(), Theme::Light);
	}

	#[test]
	fn garbage_reads_as_light() {
		let mut store = MemoryStore::default();
		store.slots.insert(crate::THEME_STORAGE_KEY.into(), "purple".into());
		assert_eq!(ThemeManager::new(store).theme(), Theme::Light);
	}

	#[test]
	fn survives_reload() {
		let mut manager = ThemeManager::new(MemoryStore::default());
		manager.set_theme(Theme::Dark).unwrap();

		// "reload" by building a new manager over the same storage
		let reloaded = ThemeManager::new(manager.into_store());
		assert_eq!(reloaded.theme(), Theme::Dark);
	}

	#[test]
	fn toggle_persists_each_time() {
		let mut manager = ThemeManager::new(MemoryStore::default());
		assert_eq!(manager.toggle(), Ok(Theme::Dark));
		assert_eq!(manager.toggle(), Ok(Theme::Light));

		let store = manager.into_store();
		assert_eq!(store.slots.get(crate::THEME_STORAGE_KEY).map(String::as_str), Some("light"));
	}

	#[test]
	fn broken_storage_still_switches() {
		let mut manager = ThemeManager::new(MemoryStore { broken: true, ..MemoryStore::default() });
		assert_eq!(manager.theme(), Theme::Light);
		assert!(matches!(manager.toggle(), Err((Theme::Dark, StorageError::Rejected(_)))));
		assert_eq!(manager.theme(), Theme::Dark);
	}
}
