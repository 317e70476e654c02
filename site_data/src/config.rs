// Everything configurable is decided at build time, since the site is shipped as a static bundle
// and there's nobody around at runtime to read an environment. Set these in the environment when
// running `trunk build` to override the defaults.
macro_rules! env_or{
	($key:literal, $default:expr) => {
		match option_env!($key) {
			Some(val) if !val.is_empty() => val,
			_ => $default
		}
	}
}

// only ever ends up in a mailto: link for the user's own mail client
pub const CONTACT_EMAIL: &str = env_or!("CELEBRANT_EMAIL", "westcoastcelebrants@gmail.com");

pub const SITE_URL: &str = env_or!("CELEBRANT_SITE_URL", "https://westcoastcelebrants.co.nz");

pub const THEME_STORAGE_KEY: &str = "theme-preference";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[cfg(test)]
#[test]
fn defaults_are_usable() {
	assert!(CONTACT_EMAIL.contains('@'));
	assert!(SITE_URL.starts_with("https://"));
}
