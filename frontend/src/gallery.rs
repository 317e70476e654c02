use site_data::gallery::{tiles, GalleryImage, OPEN_REL, OPEN_TARGET};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
	pub images: Vec<GalleryImage>
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
	html! {
		<section id="gallery" aria-labelledby="gallery-heading">
			<h2 id="gallery-heading">{ "Gallery" }</h2>
			<ul class="gallery-grid">
			{
				tiles(&props.images).into_iter().map(|tile| html! {
					<li style={ format!("aspect-ratio: {}", tile.aspect_ratio()) }>
						<a href={ tile.href } target={ OPEN_TARGET } rel={ OPEN_REL }>
							<img
								src={ tile.src }
								alt={ tile.alt }
								width={ tile.width.to_string() }
								height={ tile.height.to_string() }
								loading="lazy"
								decoding="async"
							/>
						</a>
					</li>
				}).collect::<Html>()
			}
			</ul>
		</section>
	}
}
