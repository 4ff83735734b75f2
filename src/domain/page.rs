//! Page capabilities injected into the form controller.
//!
//! Browser hosts read the page location and the card-number input straight
//! from the page, and surface success through a global alert. Behind these
//! traits the same flow runs without a browser: the host adapter binds
//! each capability to its environment.

/// Yields the current page path at call time.
pub trait PageLocation: Send + Sync + 'static {
	fn pathname(&self) -> String;
}

/// Yields the live value of the card-number input at call time.
///
/// The submitted number always comes from here, never from the bound
/// `FormState::number` field: the host form's number binding never
/// receives input, so submission reads the live field directly.
pub trait CardNumberSource: Send + Sync + 'static {
	fn value(&self) -> String;
}

/// User-facing success notification.
pub trait Notifier: Send + Sync + 'static {
	fn success(&self, message: &str);
}

/// Browser navigation, invoked once on successful submission.
pub trait Navigator: Send + Sync + 'static {
	fn assign(&self, target: &str);
}
