mod config;
pub use config::*;

mod style;
pub use style::*;

pub mod contact;
pub mod content;
pub mod disclosure;
pub mod gallery;
pub mod metadata;
pub mod nav;
pub mod theme;

pub use content::SiteContent;
pub use nav::SectionId;
pub use theme::Theme;
