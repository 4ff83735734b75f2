use std::sync::{Arc, RwLock};

use crate::domain::page::Navigator;

/// Records navigation targets instead of redirecting. Browser hosts
/// replace this with a real `location.assign`; headless hosts and tests
/// inspect the record.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
	targets: Arc<RwLock<Vec<String>>>,
}

impl RecordingNavigator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn visited(&self) -> Vec<String> {
		self.targets.read().unwrap().clone()
	}
}

impl Navigator for RecordingNavigator {
	fn assign(&self, target: &str) {
		self.targets.write().unwrap().push(target.to_string());
	}
}
