use std::rc::Rc;

use gloo_console::{error, log};
use site_data::{nav::NavController, SectionId, SiteContent, CONTACT_EMAIL};
use yew::prelude::*;

use browser::DomViewport;
use contact::Contact;
use gallery::Gallery;
use nav::{Header, Navigator};
use sections::{Footer, Hero, HowItWorks, SectionBlock, Services};
use style::SharedStyle;
use theme::ThemeProvider;

mod browser;
mod contact;
mod disclosure;
mod gallery;
mod nav;
mod sections;
mod style;
mod theme;

#[derive(Properties, PartialEq)]
pub struct PageProps {
	pub content: Rc<SiteContent>
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
	// lives as long as the page does. Reading the menu state out of it on every render means the
	// controller is the only thing that decides whether the menu is open.
	let controller = use_mut_ref(|| NavController::new(DomViewport, browser::prefers_reduced_motion()));
	let redraw = use_force_update();

	// keep listening for the reduced motion setting changing, not just what it was at startup
	{
		let controller = controller.clone();
		use_effect_with((), move |_| {
			let watch = browser::watch_reduced_motion(move |reduced| {
				log!(format!("Reduced motion is now {reduced}"));
				controller.borrow_mut().set_reduced_motion(reduced);
			});

			move || drop(watch)
		});
	}

	let go_to = {
		let controller = controller.clone();
		let redraw = redraw.clone();
		Callback::from(move |target: SectionId| {
			let was_open = controller.borrow().is_menu_open();
			controller.borrow_mut().go_to(target.as_str());
			if was_open {
				redraw.force_update();
			}
		})
	};

	let toggle_menu = {
		let controller = controller.clone();
		let redraw = redraw.clone();
		Callback::from(move |()| {
			controller.borrow_mut().toggle_menu();
			redraw.force_update();
		})
	};

	let key = {
		let controller = controller.clone();
		Callback::from(move |key: String| {
			if controller.borrow_mut().handle_key(&key) {
				redraw.force_update();
			}
		})
	};

	let nav = Navigator {
		go_to,
		toggle_menu,
		key,
		menu_open: controller.borrow().is_menu_open()
	};

	let content = &props.content;

	html! {
		<ThemeProvider>
			<SharedStyle />
			<Header
				brand={ content.business.name.clone() }
				links={ content.nav.clone() }
				nav={ nav.clone() }
			/>
			<main>
				<Hero hero={ content.hero.clone() } nav={ nav.clone() } />
				<SectionBlock section={ content.about.clone() } nav={ nav.clone() } />
				<Services cards={ content.services.clone() } nav={ nav.clone() } />
				<HowItWorks steps={ content.how_it_works.clone() } />
				{
					content.sections.iter().map(|section| html! {
						<SectionBlock section={ section.clone() } nav={ nav.clone() } />
					}).collect::<Html>()
				}
				<Gallery images={ content.gallery.clone() } />
				<SectionBlock section={ content.faq.clone() } nav={ nav.clone() } />
				<Contact address={ CONTACT_EMAIL } />
				<SectionBlock section={ content.privacy.clone() } nav={ nav.clone() } />
			</main>
			<Footer footer={ content.footer.clone() } nav={ nav } />
		</ThemeProvider>
	}
}

// Only shown if the content table compiled into the bundle is broken, which is a build problem,
// but there should still be a way to get in touch.
#[function_component(Unavailable)]
pub fn unavailable() -> Html {
	html! {
		<>
			<SharedStyle />
			<section>
				<h1>{ "Sorry, this page couldn't be loaded" }</h1>
				<p>
					{ "Please email us directly at " }
					<a href={ format!("mailto:{CONTACT_EMAIL}") }>{ CONTACT_EMAIL }</a>
				</p>
			</section>
		</>
	}
}

fn main() {
	match SiteContent::bundled() {
		Ok(content) => {
			browser::inject_json_ld(&content.business);
			yew::Renderer::<Page>::with_props(PageProps { content: Rc::new(content) }).render();
		},
		Err(e) => {
			error!(format!("The bundled content is broken: {e}"));
			yew::Renderer::<Unavailable>::new().render();
		}
	}
}
