use std::{fmt, str::FromStr};

use chrono::NaiveDate;

pub const FAILURE_MESSAGE: &str = "Sorry, something went wrong. Please email us directly.";

// We only ever know that the mail app was asked to open, never that anything was sent, so this
// must not claim otherwise.
pub const HANDOFF_MESSAGE: &str = "Your email app should now be open with your enquiry filled in. \
	Press send there and we'll get back to you soon.";

// `<input type="date">` always hands us this, whatever the user's locale shows them
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyType {
	LegalWedding,
	CommitmentWedding,
	ElopementWedding,
	NamingCeremony,
	VowRenewal,
	CelebrationOfLife
}

impl CeremonyType {
	pub const ALL: [Self; 6] = [
		Self::LegalWedding,
		Self::CommitmentWedding,
		Self::ElopementWedding,
		Self::NamingCeremony,
		Self::VowRenewal,
		Self::CelebrationOfLife
	];

	pub const fn label(self) -> &'static str {
		match self {
			Self::LegalWedding => "Legal Wedding",
			Self::CommitmentWedding => "Commitment Wedding",
			Self::ElopementWedding => "Elopement Wedding",
			Self::NamingCeremony => "Naming Ceremony",
			Self::VowRenewal => "Vow Renewal",
			Self::CelebrationOfLife => "Celebration of Life"
		}
	}
}

impl fmt::Display for CeremonyType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for CeremonyType {
	type Err = EnquiryError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		Self::ALL.into_iter()
			.find(|ty| ty.label() == s)
			.ok_or_else(|| EnquiryError::UnknownCeremony(s.to_string()))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Name,
	Contact,
	CeremonyType,
	Date,
	Message,
	// hidden from people, so only bots fill it in
	Honeypot
}

impl Field {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Contact => "contact",
			Self::CeremonyType => "ceremony-type",
			Self::Date => "date",
			Self::Message => "message",
			Self::Honeypot => "website"
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnquiryError {
	Missing(Field),
	UnknownCeremony(String),
	BadDate(String)
}

impl EnquiryError {
	pub fn field(&self) -> Field {
		match self {
			Self::Missing(field) => *field,
			Self::UnknownCeremony(_) => Field::CeremonyType,
			Self::BadDate(_) => Field::Date
		}
	}
}

impl fmt::Display for EnquiryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Missing(Field::Name) => f.write_str("Please tell us your name"),
			Self::Missing(Field::Contact) => f.write_str("Please leave an email address or phone number"),
			Self::Missing(Field::CeremonyType) => f.write_str("Please pick a ceremony type"),
			Self::Missing(Field::Message) => f.write_str("Please write us a message"),
			Self::Missing(field) => write!(f, "{} is required", field.name()),
			Self::UnknownCeremony(ty) => write!(f, "'{ty}' isn't a ceremony we offer"),
			Self::BadDate(date) => write!(f, "'{date}' doesn't look like a date")
		}
	}
}

impl std::error::Error for EnquiryError {}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnquiryFields {
	pub name: String,
	pub contact: String,
	pub ceremony_type: String,
	pub date: String,
	pub message: String,
	pub honeypot: String
}

impl EnquiryFields {
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Contact => &self.contact,
			Field::CeremonyType => &self.ceremony_type,
			Field::Date => &self.date,
			Field::Message => &self.message,
			Field::Honeypot => &self.honeypot
		}
	}

	pub fn set(&mut self, field: Field, value: String) {
		let slot = match field {
			Field::Name => &mut self.name,
			Field::Contact => &mut self.contact,
			Field::CeremonyType => &mut self.ceremony_type,
			Field::Date => &mut self.date,
			Field::Message => &mut self.message,
			Field::Honeypot => &mut self.honeypot
		};
		*slot = value;
	}

	pub fn is_bot(&self) -> bool {
		!self.honeypot.is_empty()
	}

	pub fn validate(&self) -> Result<Enquiry, Vec<EnquiryError>> {
		let mut problems = Vec::new();

		let mut required = |field: Field| {
			let val = self.get(field).trim();
			if val.is_empty() {
				problems.push(EnquiryError::Missing(field));
			}
			val.to_string()
		};

		let name = required(Field::Name);
		let contact = required(Field::Contact);
		let ceremony = required(Field::CeremonyType);
		let message = required(Field::Message);

		let ceremony_type = if ceremony.is_empty() {
			None
		} else {
			ceremony.parse::<CeremonyType>()
				.map_err(|e| problems.push(e))
				.ok()
		};

		let date = match self.date.trim() {
			"" => None,
			date => NaiveDate::parse_from_str(date, DATE_FORMAT)
				.map_err(|_| problems.push(EnquiryError::BadDate(date.to_string())))
				.ok()
		};

		match ceremony_type {
			Some(ceremony_type) if problems.is_empty() => Ok(Enquiry {
				name,
				contact,
				ceremony_type,
				date,
				message
			}),
			_ => Err(problems)
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
	pub name: String,
	pub contact: String,
	pub ceremony_type: CeremonyType,
	pub date: Option<NaiveDate>,
	pub message: String
}

impl Enquiry {
	pub fn subject(&self) -> String {
		format!("Enquiry from {}", self.name)
	}

	pub fn body(&self) -> String {
		let date = self.date
			.map(|d| d.format(DATE_FORMAT).to_string())
			.unwrap_or_default();

		format!(
			"Contact: {}\nType: {}\nDate: {date}\n\n{}",
			self.contact,
			self.ceremony_type,
			self.message
		)
	}

	// newlines in the body get percent-encoded too
	pub fn mailto(&self, address: &str) -> String {
		format!(
			"mailto:{address}?subject={}&body={}",
			urlencoding::encode(&self.subject()),
			urlencoding::encode(&self.body())
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffError(pub String);

impl fmt::Display for HandoffError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "couldn't open the mail client: {}", self.0)
	}
}

impl std::error::Error for HandoffError {}

pub trait MailHandoff {
	fn open(&mut self, link: &str) -> Result<(), HandoffError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
	#[default]
	Idle,
	Sending,
	Ok,
	Error
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	// honeypot filled in, so nothing changed
	Trapped,
	Invalid(Vec<EnquiryError>),
	HandedOff(String),
	Failed(HandoffError)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
	address: String,
	fields: EnquiryFields,
	status: FormStatus,
	problems: Vec<EnquiryError>
}

impl ContactForm {
	pub fn new(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			fields: EnquiryFields::default(),
			status: FormStatus::Idle,
			problems: Vec::new()
		}
	}

	pub fn status(&self) -> FormStatus {
		self.status
	}

	pub fn fields(&self) -> &EnquiryFields {
		&self.fields
	}

	pub fn address(&self) -> &str {
		&self.address
	}

	pub fn problem_for(&self, field: Field) -> Option<&EnquiryError> {
		self.problems.iter().find(|p| p.field() == field)
	}

	pub fn edit(&mut self, field: Field, value: String) {
		self.fields.set(field, value);
		self.problems.retain(|p| p.field() != field);

		if matches!(self.status, FormStatus::Ok | FormStatus::Error) {
			self.status = FormStatus::Idle;
		}
	}

	pub fn submit(&mut self, handoff: &mut impl MailHandoff) -> SubmitOutcome {
		// leave everything exactly as it was so the bot gets nothing to go on
		if self.fields.is_bot() {
			return SubmitOutcome::Trapped;
		}

		self.status = FormStatus::Idle;

		let enquiry = match self.fields.validate() {
			Ok(enquiry) => enquiry,
			Err(problems) => {
				self.problems.clone_from(&problems);
				return SubmitOutcome::Invalid(problems);
			}
		};

		self.problems.clear();
		self.status = FormStatus::Sending;

		let link = enquiry.mailto(&self.address);

		match handoff.open(&link) {
			Ok(()) => {
				self.status = FormStatus::Ok;
				self.fields = EnquiryFields::default();
				SubmitOutcome::HandedOff(link)
			},
			Err(e) => {
				self.status = FormStatus::Error;
				SubmitOutcome::Failed(e)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct RecordingHandoff {
		opened: Vec<String>,
		fail: bool
	}

	impl MailHandoff for RecordingHandoff {
		fn open(&mut self, link: &str) -> Result<(), HandoffError> {
			if self.fail {
				return Err(HandoffError("blocked".into()));
			}
			self.opened.push(link.to_string());
			Ok(())
		}
	}

	fn filled() -> ContactForm {
		let mut form = ContactForm::new("westcoastcelebrants@gmail.com");
		form.edit(Field::Name, "Jane".into());
		form.edit(Field::Contact, "jane@example.com".into());
		form.edit(Field::CeremonyType, "Legal Wedding".into());
		form.edit(Field::Message, "Hello".into());
		form
	}

	#[test]
	fn honeypot_does_nothing() {
		let mut form = filled();
		form.edit(Field::Honeypot, "http://spam.example".into());
		let before = form.clone();

		let mut handoff = RecordingHandoff::default();
		assert_eq!(form.submit(&mut handoff), SubmitOutcome::Trapped);
		assert!(handoff.opened.is_empty());
		assert_eq!(form, before);
	}

	#[test]
	fn good_enquiry_is_handed_off() {
		let mut form = filled();
		let mut handoff = RecordingHandoff::default();

		let SubmitOutcome::HandedOff(link) = form.submit(&mut handoff) else {
			panic!("expected a hand-off");
		};

		assert_eq!(handoff.opened, vec![link.clone()]);
		assert!(link.starts_with("mailto:westcoastcelebrants@gmail.com?subject="));
		assert!(link.contains("subject=Enquiry%20from%20Jane&body="));
		assert!(link.contains("Legal%20Wedding"));
		assert!(link.contains("Hello"));
		assert!(link.contains("jane%40example.com"));
		assert!(!link.contains(' '));
		assert!(!link.contains('\n'));

		assert_eq!(form.status(), FormStatus::Ok);
		assert_eq!(form.fields(), &EnquiryFields::default());
	}

	#[test]
	fn body_has_one_line_per_detail() {
		let enquiry = Enquiry {
			name: "Jane & Sam".into(),
			contact: "021 555 0199".into(),
			ceremony_type: CeremonyType::ElopementWedding,
			date: NaiveDate::from_ymd_opt(2027, 2, 14),
			message: "Cliffs at sunset?\nJust us two.".into()
		};

		assert_eq!(
			enquiry.body(),
			"Contact: 021 555 0199\nType: Elopement Wedding\nDate: 2027-02-14\n\nCliffs at sunset?\nJust us two."
		);
		assert_eq!(
			enquiry.mailto("a@b.nz"),
			"mailto:a@b.nz?subject=Enquiry%20from%20Jane%20%26%20Sam&body=Contact%3A%20021%20555%200199%0AType%3A%20Elopement%20Wedding%0ADate%3A%202027-02-14%0A%0ACliffs%20at%20sunset%3F%0AJust%20us%20two."
		);
	}

	#[test]
	fn missing_date_leaves_line_empty() {
		let enquiry = filled().fields().validate().unwrap();
		assert!(enquiry.body().contains("\nDate: \n\n"));
	}

	#[test]
	fn failed_handoff_is_an_error() {
		let mut form = filled();
		let mut handoff = RecordingHandoff { fail: true, ..RecordingHandoff::default() };

		assert!(matches!(form.submit(&mut handoff), SubmitOutcome::Failed(_)));
		assert_eq!(form.status(), FormStatus::Error);
		// keep what they typed so they can copy it into an email themselves
		assert_eq!(form.fields().name, "Jane");
	}

	#[test]
	fn second_enquiry_starts_from_a_blank_ceremony_type() {
		let mut form = filled();
		let mut handoff = RecordingHandoff::default();
		assert!(matches!(form.submit(&mut handoff), SubmitOutcome::HandedOff(_)));
		assert_eq!(form.fields().ceremony_type, "");

		form.edit(Field::Name, "Sam".into());
		form.edit(Field::Contact, "sam@example.com".into());
		form.edit(Field::Message, "Again".into());

		let SubmitOutcome::Invalid(problems) = form.submit(&mut handoff) else {
			panic!("the ceremony type should have been cleared");
		};
		assert_eq!(problems, vec![EnquiryError::Missing(Field::CeremonyType)]);
		assert!(form.problem_for(Field::CeremonyType).is_some());
		assert_eq!(handoff.opened.len(), 1);
	}

	#[test]
	fn editing_after_finishing_resets_to_idle() {
		let mut form = filled();
		form.submit(&mut RecordingHandoff::default());
		assert_eq!(form.status(), FormStatus::Ok);

		form.edit(Field::Name, "J".into());
		assert_eq!(form.status(), FormStatus::Idle);
	}

	#[test]
	fn blank_required_fields_are_reported() {
		let mut form = ContactForm::new("a@b.nz");
		form.edit(Field::Name, "   ".into());
		let mut handoff = RecordingHandoff::default();

		let SubmitOutcome::Invalid(problems) = form.submit(&mut handoff) else {
			panic!("expected validation to fail");
		};

		assert_eq!(problems, vec![
			EnquiryError::Missing(Field::Name),
			EnquiryError::Missing(Field::Contact),
			EnquiryError::Missing(Field::CeremonyType),
			EnquiryError::Missing(Field::Message)
		]);
		assert!(handoff.opened.is_empty());
		assert_eq!(form.status(), FormStatus::Idle);
		assert!(form.problem_for(Field::Contact).is_some());

		form.edit(Field::Contact, "x".into());
		assert!(form.problem_for(Field::Contact).is_none());
	}

	#[test]
	fn bad_date_and_ceremony_are_rejected() {
		let mut fields = filled().fields().clone();
		fields.date = "14/02/2027".into();
		fields.ceremony_type = "Divorce Party".into();

		let problems = fields.validate().unwrap_err();
		assert_eq!(problems, vec![
			EnquiryError::UnknownCeremony("Divorce Party".into()),
			EnquiryError::BadDate("14/02/2027".into())
		]);
	}

	#[test]
	fn ceremony_labels_round_trip() {
		for ty in CeremonyType::ALL {
			assert_eq!(ty.label().parse::<CeremonyType>(), Ok(ty));
		}
	}
}
