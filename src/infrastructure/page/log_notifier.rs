use log::info;

use crate::domain::page::Notifier;

/// Routes success notifications to the log. Browser hosts replace this
/// with a real user-facing alert.
#[derive(Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
	fn success(&self, message: &str) {
		info!("{message}");
	}
}
