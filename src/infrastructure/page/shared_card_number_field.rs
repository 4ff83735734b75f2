use std::sync::{Arc, RwLock};

use crate::domain::page::CardNumberSource;

/// Live card-number input held in a shared cell. The host's input binding
/// writes into it on every keystroke; the controller reads it at submit
/// time, bypassing the bound form-state field.
#[derive(Clone, Default)]
pub struct SharedCardNumberField {
	value: Arc<RwLock<String>>,
}

impl SharedCardNumberField {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: Arc::new(RwLock::new(value.into())),
		}
	}

	pub fn set(&self, value: impl Into<String>) {
		*self.value.write().unwrap() = value.into();
	}
}

impl CardNumberSource for SharedCardNumberField {
	fn value(&self) -> String {
		self.value.read().unwrap().clone()
	}
}
