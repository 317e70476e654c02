use serde_json::{json, Value};

use crate::content::Business;

pub fn json_ld(business: &Business, email: &str, url: &str) -> Value {
	let areas = business.areas_served
		.iter()
		.map(|area| json!({ "@type": "Place", "name": area }))
		.collect::<Vec<_>>();

	let mut doc = json!({
		"@context": "https://schema.org",
		"@type": "Person",
		"name": business.person,
		"jobTitle": business.role,
		"worksFor": {
			"@type": "Organization",
			"name": business.employer
		},
		"brand": business.name,
		"email": email,
		"url": url,
		"areaServed": areas
	});

	if let (Some(phone), Some(obj)) = (&business.phone, doc.as_object_mut()) {
		obj.insert("telephone".into(), Value::String(phone.clone()));
	}

	doc
}

// `</` is escaped so nothing in the content can close the script tag early
pub fn json_ld_script(business: &Business, email: &str, url: &str) -> Result<String, serde_json::Error> {
	serde_json::to_string(&json_ld(business, email, url))
		.map(|s| s.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn business() -> Business {
		Business {
			name: "West Coast Celebrants".into(),
			person: "Mel Harper".into(),
			role: "Marriage Celebrant".into(),
			employer: "West Coast Celebrants".into(),
			phone: None,
			areas_served: vec!["Greymouth".into(), "Hokitika".into()]
		}
	}

	#[test]
	fn describes_the_person() {
		let doc = json_ld(&business(), "a@b.nz", "https://b.nz");
		assert_eq!(doc["@type"], "Person");
		assert_eq!(doc["name"], "Mel Harper");
		assert_eq!(doc["worksFor"]["name"], "West Coast Celebrants");
		assert_eq!(doc["areaServed"][1]["name"], "Hokitika");
		assert!(doc.get("telephone").is_none());
	}

	#[test]
	fn phone_is_included_when_known() {
		let mut business = business();
		business.phone = Some("+64 21 555 0199".into());
		assert_eq!(json_ld(&business, "a@b.nz", "https://b.nz")["telephone"], "+64 21 555 0199");
	}

	#[test]
	fn script_cant_be_closed_early() {
		let mut business = business();
		business.person = "</script><script>alert(1)".into();
		let script = json_ld_script(&business, "a@b.nz", "https://b.nz").unwrap();
		assert!(!script.contains("</script>"));
		assert!(serde_json::from_str::<Value>(&script).is_ok());
	}
}
