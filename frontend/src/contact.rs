use std::rc::Rc;

use gloo_console::{error, log};
use site_data::contact::{
	CeremonyType,
	ContactForm,
	Field,
	FormStatus,
	SubmitOutcome,
	FAILURE_MESSAGE,
	HANDOFF_MESSAGE
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::MailClient;

#[derive(Debug)]
pub enum FormMsg {
	Edit(Field, String),
	Submit
}

#[derive(PartialEq)]
struct FormState(ContactForm);

impl Reducible for FormState {
	type Action = FormMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut form = self.0.clone();

		match action {
			FormMsg::Edit(field, value) => form.edit(field, value),
			FormMsg::Submit => match form.submit(&mut MailClient) {
				// nothing changed, so don't bother redrawing
				SubmitOutcome::Trapped => {
					log!("Ignoring a submission with the honeypot filled in");
					return self;
				},
				SubmitOutcome::Invalid(problems) => log!(format!("Enquiry wasn't valid: {problems:?}")),
				SubmitOutcome::HandedOff(_) => log!("Handed the enquiry to the mail client"),
				SubmitOutcome::Failed(e) => error!(format!("{e}"))
			}
		}

		Self(form).into()
	}
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
	pub address: AttrValue
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
	let form = use_reducer_eq(|| FormState(ContactForm::new(props.address.to_string())));

	macro_rules! input_callback{
		($field:ident, $elem:ty) => {{
			let form = form.clone();
			Callback::from(move |e: InputEvent| {
				let value = e.target_unchecked_into::<$elem>().value();
				form.dispatch(FormMsg::Edit(Field::$field, value));
			})
		}}
	}

	let onsubmit = {
		let form = form.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			form.dispatch(FormMsg::Submit);
		})
	};

	let on_ceremony = {
		let form = form.clone();
		Callback::from(move |e: Event| {
			let value = e.target_unchecked_into::<HtmlSelectElement>().value();
			form.dispatch(FormMsg::Edit(Field::CeremonyType, value));
		})
	};

	// `selected` only sets the initial choice, so once someone has picked an option the select's
	// value has to be written directly for a cleared form to actually show as cleared
	let ceremony_ref = use_node_ref();
	{
		let ceremony_ref = ceremony_ref.clone();
		use_effect_with(form.0.fields().ceremony_type.clone(), move |ceremony| {
			if let Some(select) = ceremony_ref.cast::<HtmlSelectElement>() {
				select.set_value(ceremony);
			}
		});
	}

	let state = &form.0;
	let fields = state.fields();

	let problem = |field: Field| match state.problem_for(field) {
		Some(p) => html! { <p class="field-problem" id={ format!("{}-problem", field.name()) }>{ p.to_string() }</p> },
		None => html! {}
	};
	let described_by = |field: Field| state.problem_for(field)
		.map(|_| format!("{}-problem", field.name()));

	let status = match state.status() {
		FormStatus::Idle => html! {},
		FormStatus::Sending => html! { <p>{ "Opening your email app..." }</p> },
		FormStatus::Ok => html! { <p class="form-ok">{ HANDOFF_MESSAGE }</p> },
		FormStatus::Error => html! {
			<p class="form-error">
				{ FAILURE_MESSAGE }
				{ " " }
				<a href={ format!("mailto:{}", state.address()) }>{ state.address() }</a>
			</p>
		}
	};

	html! {
		<section id="contact" aria-labelledby="contact-heading">
			<h2 id="contact-heading">{ "Get in touch" }</h2>
			<p>
				{ "Fill this in and your own email app will open with everything ready to send. \
				   Nothing is sent until you press send there." }
			</p>
			<form class="contact-form" onsubmit={ onsubmit }>
				<label for={ Field::Name.name() }>{ "Your name" }</label>
				<input
					type="text"
					id={ Field::Name.name() }
					name={ Field::Name.name() }
					autocomplete="name"
					required={ true }
					value={ fields.name.clone() }
					aria-describedby={ described_by(Field::Name) }
					oninput={ input_callback!(Name, HtmlInputElement) }
				/>
				{ problem(Field::Name) }

				<label for={ Field::Contact.name() }>{ "Email or phone" }</label>
				<input
					type="text"
					id={ Field::Contact.name() }
					name={ Field::Contact.name() }
					autocomplete="email"
					required={ true }
					value={ fields.contact.clone() }
					aria-describedby={ described_by(Field::Contact) }
					oninput={ input_callback!(Contact, HtmlInputElement) }
				/>
				{ problem(Field::Contact) }

				<label for={ Field::CeremonyType.name() }>{ "Type of ceremony" }</label>
				<select
					ref={ ceremony_ref }
					id={ Field::CeremonyType.name() }
					name={ Field::CeremonyType.name() }
					required={ true }
					aria-describedby={ described_by(Field::CeremonyType) }
					onchange={ on_ceremony }
				>
					<option value="" selected={ fields.ceremony_type.is_empty() } disabled={ true }>
						{ "Choose one" }
					</option>
					{
						CeremonyType::ALL.iter().map(|ty| html! {
							<option value={ ty.label() } selected={ fields.ceremony_type == ty.label() }>
								{ ty.label() }
							</option>
						}).collect::<Html>()
					}
				</select>
				{ problem(Field::CeremonyType) }

				<label for={ Field::Date.name() }>{ "Preferred date (optional)" }</label>
				<input
					type="date"
					id={ Field::Date.name() }
					name={ Field::Date.name() }
					value={ fields.date.clone() }
					aria-describedby={ described_by(Field::Date) }
					oninput={ input_callback!(Date, HtmlInputElement) }
				/>
				{ problem(Field::Date) }

				<label for={ Field::Message.name() }>{ "Tell us a bit about it" }</label>
				<textarea
					id={ Field::Message.name() }
					name={ Field::Message.name() }
					rows="6"
					required={ true }
					value={ fields.message.clone() }
					aria-describedby={ described_by(Field::Message) }
					oninput={ input_callback!(Message, HtmlTextAreaElement) }
				/>
				{ problem(Field::Message) }

				// people never see this one, so anything in it came from a bot
				<div class="visually-hidden" aria-hidden="true">
					<label for={ Field::Honeypot.name() }>{ "Leave this empty" }</label>
					<input
						type="text"
						id={ Field::Honeypot.name() }
						name={ Field::Honeypot.name() }
						tabindex="-1"
						autocomplete="off"
						value={ fields.honeypot.clone() }
						oninput={ input_callback!(Honeypot, HtmlInputElement) }
					/>
				</div>

				<button type="submit" class="submit-button">{ "Open my email app" }</button>
			</form>
			<div class="form-status" role="status" aria-live="polite">
				{ status }
			</div>
		</section>
	}
}
