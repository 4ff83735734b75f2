/// The mutable set of payment-form field values held by the controller.
///
/// Every field is a plain string, created empty and reset to empty after a
/// successful submission. Nothing in here is validated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
	pub number: String,
	pub name:   String,
	pub month:  String,
	pub year:   String,
	pub code:   String,
}

impl FormState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reset(&mut self) {
		self.number = String::new();
		self.name = String::new();
		self.month = String::new();
		self.year = String::new();
		self.code = String::new();
	}
}
