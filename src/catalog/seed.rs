use super::{AppointmentRecord, Catalog};

impl Catalog {
	/// The three appointments the clinic screen ships with.
	#[must_use]
	pub fn seed() -> Self {
		Self {
			records: seed_records()
				.into_iter()
				.map(|record| (record.id.clone(), record))
				.collect(),
		}
	}
}

fn seed_records() -> Vec<AppointmentRecord> {
	vec![
		AppointmentRecord::new(
			"1",
			"Consulta Odontológica",
			"Carlos Silva",
			"14:00",
			"123.456.789-00",
			"Avaliação inicial",
		),
		AppointmentRecord::new(
			"2",
			"Retorno Clínico",
			"Mariana Costa",
			"15:30",
			"987.654.321-00",
			"Tratamento ortodôntico",
		),
		AppointmentRecord::new(
			"3",
			"Consulta de Urgência",
			"João Pereira",
			"16:00",
			"456.123.789-00",
			"Dor de dente",
		),
	]
}
