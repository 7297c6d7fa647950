use anyhow::Result;
use odontolife::AppointmentRecord;
use serde_json::json;

/// One appointment per line: id, time, title and patient.
pub(crate) fn format_plain<'a>(records: impl IntoIterator<Item = &'a AppointmentRecord>) -> String {
	let mut out = String::new();
	for record in records {
		out.push_str(&format!(
			"{}  {}  {}  ({})\n",
			record.id, record.time, record.title, record.patient_name
		));
	}
	out
}

/// Print a plain-text listing, or the empty-result text when nothing matched.
pub(crate) fn print_plain<'a>(
	records: impl IntoIterator<Item = &'a AppointmentRecord>,
	empty_text: &str,
) {
	let listing = format_plain(records);
	if listing.is_empty() {
		println!("{empty_text}");
	} else {
		print!("{listing}");
	}
}

/// Format the listing as a JSON document.
pub(crate) fn format_json<'a>(
	query: &str,
	records: impl IntoIterator<Item = &'a AppointmentRecord>,
) -> Result<String> {
	let appointments: Vec<&AppointmentRecord> = records.into_iter().collect();
	let payload = json!({
		"query": query,
		"count": appointments.len(),
		"appointments": appointments,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json<'a>(
	query: &str,
	records: impl IntoIterator<Item = &'a AppointmentRecord>,
) -> Result<()> {
	println!("{}", format_json(query, records)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use odontolife::{AppointmentListScreen, Catalog};
	use serde_json::Value;

	use super::*;

	#[test]
	fn plain_listing_follows_the_filtered_view() {
		let mut screen = AppointmentListScreen::new(Catalog::seed());
		screen.set_search_query("consulta");

		insta::assert_snapshot!(format_plain(screen.visible_records()), @r"
		1  14:00  Consulta Odontológica  (Carlos Silva)
		3  16:00  Consulta de Urgência  (João Pereira)
		");
	}

	#[test]
	fn json_listing_includes_every_field() {
		let mut screen = AppointmentListScreen::new(Catalog::seed());
		screen.set_search_query("Mariana");

		let json = format_json(screen.query(), screen.visible_records()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "Mariana");
		assert_eq!(value["count"], 1);
		assert_eq!(value["appointments"][0]["id"], "2");
		assert_eq!(value["appointments"][0]["document_id"], "987.654.321-00");
		assert_eq!(value["appointments"][0]["procedure_type"], "Tratamento ortodôntico");
	}

	#[test]
	fn empty_listing_is_empty_text() {
		let mut screen = AppointmentListScreen::new(Catalog::seed());
		screen.set_search_query("zzz");
		assert!(format_plain(screen.visible_records()).is_empty());
	}
}
