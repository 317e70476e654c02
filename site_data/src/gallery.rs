use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

pub const OPEN_TARGET: &str = "_blank";
pub const OPEN_REL: &str = "noopener noreferrer";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
	pub src: String,
	pub alt: String,
	#[serde(default)]
	pub width: Option<u32>,
	#[serde(default)]
	pub height: Option<u32>
}

impl GalleryImage {
	pub fn dimensions(&self) -> (u32, u32) {
		let derived = match (self.width, self.height) {
			(Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
			// one known side keeps the default 4:3
			(Some(w), _) if w > 0 => scale(w, DEFAULT_HEIGHT, DEFAULT_WIDTH).map(|h| (w, h)),
			(_, Some(h)) if h > 0 => scale(h, DEFAULT_WIDTH, DEFAULT_HEIGHT).map(|w| (w, h)),
			_ => None
		};

		derived.unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
	}
}

fn scale(side: u32, num: u32, den: u32) -> Option<u32> {
	let scaled = (u64::from(side) * u64::from(num)).div_ceil(u64::from(den));
	u32::try_from(scaled).ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTile {
	pub href: String,
	pub src: String,
	pub alt: String,
	pub width: u32,
	pub height: u32
}

impl GalleryTile {
	pub fn aspect_ratio(&self) -> String {
		format!("{} / {}", self.width, self.height)
	}
}

pub fn tiles(images: &[GalleryImage]) -> Vec<GalleryTile> {
	images.iter()
		.map(|img| {
			let (width, height) = img.dimensions();
			GalleryTile {
				href: img.src.clone(),
				src: img.src.clone(),
				alt: img.alt.clone(),
				width,
				height
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn image(width: Option<u32>, height: Option<u32>) -> GalleryImage {
		GalleryImage {
			src: "/assets/gallery/beach.webp".into(),
			alt: "A beach ceremony".into(),
			width,
			height
		}
	}

	#[test]
	fn missing_size_falls_back() {
		assert_eq!(image(None, None).dimensions(), (640, 480));
		assert_eq!(image(Some(0), Some(0)).dimensions(), (640, 480));
	}

	#[test]
	fn one_side_keeps_default_aspect() {
		assert_eq!(image(Some(1280), None).dimensions(), (1280, 960));
		assert_eq!(image(None, Some(300)).dimensions(), (400, 300));
	}

	#[test]
	fn huge_sides_dont_overflow() {
		assert_eq!(image(Some(10_000_000), None).dimensions(), (10_000_000, 7_500_000));
		assert_eq!(image(None, Some(9_000_000)).dimensions(), (12_000_000, 9_000_000));
		// the width this would need doesn't fit, so reserve the default instead
		assert_eq!(image(None, Some(u32::MAX)).dimensions(), (640, 480));
	}

	#[test]
	fn known_size_is_kept() {
		assert_eq!(image(Some(1080), Some(1350)).dimensions(), (1080, 1350));
	}

	#[test]
	fn tiles_link_to_their_own_source() {
		let images = vec![image(None, None), GalleryImage {
			src: "/assets/gallery/forest.webp".into(),
			alt: "Vows under the rimu".into(),
			width: Some(800),
			height: Some(600)
		}];

		let tiles = tiles(&images);
		assert_eq!(tiles.len(), 2);
		for (tile, img) in tiles.iter().zip(&images) {
			assert_eq!(tile.href, img.src);
			assert_eq!(tile.alt, img.alt);
		}
		assert_eq!(tiles[1].aspect_ratio(), "800 / 600");
	}

	#[test]
	fn no_images_no_tiles() {
		assert!(tiles(&[]).is_empty());
	}
}
