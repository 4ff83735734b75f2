use std::sync::{Arc, RwLock};

use checkout_payment::domain::page::Notifier;

/// Notifier double that records every message. Clones share the record.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
	messages: Arc<RwLock<Vec<String>>>,
}

impl RecordingNotifier {
	pub fn messages(&self) -> Vec<String> {
		self.messages.read().unwrap().clone()
	}
}

impl Notifier for RecordingNotifier {
	fn success(&self, message: &str) {
		self.messages.write().unwrap().push(message.to_string());
	}
}
