use std::rc::Rc;

use site_data::{
	disclosure::{panel_ids, DisclosureGroup, ExpandableEntry},
	SectionId
};
use yew::prelude::*;

#[derive(PartialEq)]
struct Panels(DisclosureGroup);

impl Reducible for Panels {
	// which entry was clicked
	type Action = usize;

	fn reduce(self: Rc<Self>, idx: Self::Action) -> Rc<Self> {
		let mut group = self.0.clone();
		group.toggle(idx);
		Self(group).into()
	}
}

#[derive(Properties, PartialEq)]
pub struct DisclosureListProps {
	pub section: SectionId,
	pub entries: Vec<ExpandableEntry>
}

#[function_component(DisclosureList)]
pub fn disclosure_list(props: &DisclosureListProps) -> Html {
	let panels = use_reducer_eq(|| Panels(DisclosureGroup::new(props.entries.len())));

	if props.entries.is_empty() {
		return html! {};
	}

	html! {
		<div class="disclosures">
		{
			props.entries.iter().enumerate().map(|(idx, entry)| {
				let open = panels.0.is_open(idx);
				let (button_id, panel_id) = panel_ids(props.section, idx);
				let onclick = {
					let panels = panels.clone();
					Callback::from(move |_: MouseEvent| panels.dispatch(idx))
				};

				html! {
					<div class={ classes!("disclosure", open.then_some("open")) }>
						<h3>
							<button
								id={ button_id.clone() }
								type="button"
								aria-expanded={ open.to_string() }
								aria-controls={ panel_id.clone() }
								onclick={ onclick }
							>
								<span>{ &entry.title }</span>
								<span class="disclosure-icon" aria-hidden="true">{ if open { "−" } else { "+" } }</span>
							</button>
						</h3>
						<div
							id={ panel_id }
							class="disclosure-body"
							role="region"
							aria-labelledby={ button_id }
							hidden={ !open }
						>
							// the body is plain text; line breaks are kept by `white-space: pre-wrap`
							{ &entry.body }
						</div>
					</div>
				}
			}).collect::<Html>()
		}
		</div>
	}
}
