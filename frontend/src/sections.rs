use site_data::content::{Footer as FooterContent, Hero as HeroContent, IconId, Section, ServiceCard, Step};
use yew::prelude::*;

use crate::{
	disclosure::DisclosureList,
	nav::{Navigator, SectionLink}
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
	pub hero: HeroContent,
	pub nav: Navigator
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
	let hero = &props.hero;
	let (width, height) = hero.image.dimensions();

	html! {
		<section id="home" class="hero" aria-labelledby="hero-heading">
			// the first thing anyone sees, so this one loads straight away
			<img
				class="hero-image"
				src={ hero.image.src.clone() }
				alt={ hero.image.alt.clone() }
				width={ width.to_string() }
				height={ height.to_string() }
				fetchpriority="high"
			/>
			<div class="hero-text">
				<h1 id="hero-heading">{ &hero.heading }</h1>
				<p>{ &hero.tagline }</p>
				<SectionLink link={ hero.call_to_action.clone() } nav={ props.nav.clone() } class="call-to-action" />
			</div>
		</section>
	}
}

fn icon(id: IconId) -> &'static str {
	match id {
		IconId::Rings => "💍",
		IconId::Mountains => "⛰",
		IconId::Infinity => "∞",
		IconId::Baby => "👶",
		IconId::Candle => "🕯",
		IconId::Feather => "🪶"
	}
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
	pub cards: Vec<ServiceCard>,
	pub nav: Navigator
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
	html! {
		<section id="services" aria-labelledby="services-heading">
			<h2 id="services-heading">{ "Services" }</h2>
			<ul class="service-cards">
			{
				props.cards.iter().map(|card| {
					let go_to = props.nav.go_to.clone();
					let target = card.target;
					let onclick = Callback::from(move |e: MouseEvent| {
						e.prevent_default();
						go_to.emit(target);
					});

					html! {
						<li class="service-card">
							<a href={ target.href() } onclick={ onclick }>
								<span class="service-icon" aria-hidden="true">{ icon(card.icon) }</span>
								<h3>{ &card.title }</h3>
								<p>{ &card.summary }</p>
							</a>
						</li>
					}
				}).collect::<Html>()
			}
			</ul>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
	pub steps: Vec<Step>
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
	html! {
		<section id="how-it-works" aria-labelledby="how-it-works-heading">
			<h2 id="how-it-works-heading">{ "How it works" }</h2>
			<ol class="steps">
			{
				props.steps.iter().map(|step| html! {
					<li>
						<h3>{ &step.title }</h3>
						<p>{ &step.body }</p>
					</li>
				}).collect::<Html>()
			}
			</ol>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct SectionBlockProps {
	pub section: Section,
	pub nav: Navigator
}

#[function_component(SectionBlock)]
pub fn section_block(props: &SectionBlockProps) -> Html {
	let section = &props.section;
	let heading_id = format!("{}-heading", section.id);

	html! {
		<section id={ section.id.as_str() } aria-labelledby={ heading_id.clone() }>
			<h2 id={ heading_id }>{ &section.heading }</h2>
			{ for section.intro.iter().map(|para| html! { <p>{ para }</p> }) }
			<DisclosureList section={ section.id } entries={ section.entries.clone() } />
			if !section.links.is_empty() {
				<p class="section-links">
				{
					section.links.iter().map(|link| html! {
						<SectionLink link={ link.clone() } nav={ props.nav.clone() } />
					}).collect::<Html>()
				}
				</p>
			}
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
	pub footer: FooterContent,
	pub nav: Navigator
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
	html! {
		<footer id="site-footer">
			<p>{ &props.footer.note }</p>
			<p class="section-links">
			{
				props.footer.links.iter().map(|link| html! {
					<SectionLink link={ link.clone() } nav={ props.nav.clone() } />
				}).collect::<Html>()
			}
			</p>
		</footer>
	}
}
