use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{disclosure::ExpandableEntry, gallery::GalleryImage, SectionId};

// All the copy lives in here instead of in the components, so editing words never means touching
// code.
static BUNDLED: &str = include_str!("../content/site.json");

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
	pub label: String,
	pub target: SectionId
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
	Rings,
	Mountains,
	Infinity,
	Baby,
	Candle,
	Feather
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
	pub title: String,
	pub icon: IconId,
	pub summary: String,
	pub target: SectionId
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Hero {
	pub heading: String,
	pub tagline: String,
	pub call_to_action: Link,
	pub image: GalleryImage
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Step {
	pub title: String,
	pub body: String
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Section {
	pub id: SectionId,
	pub heading: String,
	#[serde(default)]
	pub intro: Vec<String>,
	#[serde(default)]
	pub entries: Vec<ExpandableEntry>,
	#[serde(default)]
	pub links: Vec<Link>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Business {
	pub name: String,
	pub person: String,
	pub role: String,
	pub employer: String,
	#[serde(default)]
	pub phone: Option<String>,
	pub areas_served: Vec<String>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Footer {
	pub note: String,
	pub links: Vec<Link>
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
	pub business: Business,
	pub nav: Vec<Link>,
	pub hero: Hero,
	pub about: Section,
	pub services: Vec<ServiceCard>,
	pub how_it_works: Vec<Step>,
	// drawn in order between the steps and the gallery
	pub sections: Vec<Section>,
	pub gallery: Vec<GalleryImage>,
	pub faq: Section,
	pub privacy: Section,
	pub footer: Footer
}

#[derive(Debug)]
pub enum ContentError {
	Parse(serde_json::Error),
	DuplicateSection(SectionId),
	// a block of copy claims an id the page already draws something else under
	ReservedSection(SectionId),
	DanglingLink {
		from: String,
		target: SectionId
	}
}

impl fmt::Display for ContentError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Parse(e) => write!(f, "couldn't parse the content table: {e}"),
			Self::DuplicateSection(id) => write!(f, "section '{id}' appears more than once"),
			Self::ReservedSection(id) => write!(f, "section '{id}' is drawn by the page itself and can't be a content section"),
			Self::DanglingLink { from, target } => write!(f, "'{from}' links to '{target}', which isn't on the page")
		}
	}
}

impl std::error::Error for ContentError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Parse(e) => Some(e),
			_ => None
		}
	}
}

impl From<serde_json::Error> for ContentError {
	fn from(value: serde_json::Error) -> Self {
		Self::Parse(value)
	}
}

impl SiteContent {
	pub fn bundled() -> Result<Self, ContentError> {
		Self::from_json(BUNDLED)
	}

	pub fn from_json(json: &str) -> Result<Self, ContentError> {
		let content: Self = serde_json::from_str(json)?;
		content.validate()?;
		Ok(content)
	}

	// the hero, services, steps, gallery and contact form are drawn by their own components
	pub fn rendered_ids(&self) -> BTreeSet<SectionId> {
		[
			SectionId::Home,
			SectionId::Services,
			SectionId::HowItWorks,
			SectionId::Gallery,
			SectionId::Contact
		].into_iter()
			.chain(self.all_sections().map(|s| s.id))
			.collect()
	}

	pub fn all_sections(&self) -> impl Iterator<Item = &Section> {
		std::iter::once(&self.about)
			.chain(&self.sections)
			.chain([&self.faq, &self.privacy])
	}

	pub fn validate(&self) -> Result<(), ContentError> {
		const RESERVED: [SectionId; 5] = [
			SectionId::Home,
			SectionId::Services,
			SectionId::HowItWorks,
			SectionId::Gallery,
			SectionId::Contact
		];

		let mut seen = BTreeSet::new();
		for section in self.all_sections() {
			if RESERVED.contains(&section.id) {
				return Err(ContentError::ReservedSection(section.id));
			}
			if !seen.insert(section.id) {
				return Err(ContentError::DuplicateSection(section.id));
			}
		}

		let rendered = self.rendered_ids();

		let links = self.nav.iter()
			.chain(std::iter::once(&self.hero.call_to_action))
			.chain(self.all_sections().flat_map(|s| &s.links))
			.chain(&self.footer.links)
			.map(|l| (l.label.as_str(), l.target));

		let cards = self.services.iter()
			.map(|c| (c.title.as_str(), c.target));

		for (from, target) in links.chain(cards) {
			if !rendered.contains(&target) {
				return Err(ContentError::DanglingLink { from: from.to_string(), target });
			}
		}

		Ok(())
	}
}
