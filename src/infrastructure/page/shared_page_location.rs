use std::sync::{Arc, RwLock};

use crate::domain::page::PageLocation;

/// Page path held in a shared cell. The host's router writes the current
/// path; the controller reads it at submit time. Clones share the cell.
#[derive(Clone, Default)]
pub struct SharedPageLocation {
	path: Arc<RwLock<String>>,
}

impl SharedPageLocation {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: Arc::new(RwLock::new(path.into())),
		}
	}

	pub fn set(&self, path: impl Into<String>) {
		*self.path.write().unwrap() = path.into();
	}
}

impl PageLocation for SharedPageLocation {
	fn pathname(&self) -> String {
		self.path.read().unwrap().clone()
	}
}
