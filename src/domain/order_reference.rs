use std::fmt;

/// Path prefix of the checkout payment page.
const PAYMENT_PATH_PREFIX: &str = "/payment/";

/// The numeric order identifier parsed from the page path, target of the
/// payment POST. Derived at submit time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderReference(u64);

impl OrderReference {
	/// Derives an order reference from a page path of the form
	/// `/payment/<id>/` (trailing slash optional). Anything else, including
	/// an id of zero, yields `None` rather than a partial parse.
	pub fn from_path(path: &str) -> Option<OrderReference> {
		let id = path.strip_prefix(PAYMENT_PATH_PREFIX)?;
		let id = id.strip_suffix('/').unwrap_or(id);
		let id: u64 = id.parse().ok()?;

		if id == 0 {
			return None;
		}

		Some(OrderReference(id))
	}

	pub fn value(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for OrderReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
