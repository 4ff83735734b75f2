use std::sync::RwLock;

use log::{info, warn};

use crate::domain::form_state::FormState;
use crate::domain::gateway::{PaymentGateway, SubmissionError};
use crate::domain::order_reference::OrderReference;
use crate::domain::page::{CardNumberSource, Navigator, Notifier, PageLocation};
use crate::use_cases::dto::SubmitPaymentCommand;
use crate::use_cases::submit_payment::SubmitPaymentUseCase;

const DEFAULT_SITE_ROOT: &str = "/";
const SUCCESS_MESSAGE: &str = "Payment successful";

/// The payment-form component of the checkout page.
///
/// Owns the ephemeral [`FormState`] and drives one submission per
/// [`submit`](PaymentFormController::submit) call: derive the order
/// reference from the page path, read the live card number, POST through
/// the gateway, and on success notify, reset and navigate to the site
/// root. On failure the state is left untouched so the user can resubmit.
///
/// There is no in-flight guard and no pending state: two quick `submit`
/// calls issue two independent requests. Documented behavior, not a
/// guarantee.
pub struct PaymentFormController<G, L, C, N, V>
where
	G: PaymentGateway,
	L: PageLocation,
	C: CardNumberSource,
	N: Notifier,
	V: Navigator,
{
	state:          RwLock<FormState>,
	submit_payment: SubmitPaymentUseCase<G>,
	location:       L,
	card_number:    C,
	notifier:       N,
	navigator:      V,
	site_root:      String,
}

impl<G, L, C, N, V> PaymentFormController<G, L, C, N, V>
where
	G: PaymentGateway,
	L: PageLocation,
	C: CardNumberSource,
	N: Notifier,
	V: Navigator,
{
	pub fn new(
		gateway: G,
		location: L,
		card_number: C,
		notifier: N,
		navigator: V,
	) -> Self {
		Self {
			state:          RwLock::new(FormState::new()),
			submit_payment: SubmitPaymentUseCase::new(gateway),
			location,
			card_number,
			notifier,
			navigator,
			site_root:      DEFAULT_SITE_ROOT.to_string(),
		}
	}

	/// Overrides the success-navigation target, `/` by default.
	pub fn with_site_root(mut self, site_root: impl Into<String>) -> Self {
		self.site_root = site_root.into();
		self
	}

	/// Snapshot of the current form state.
	pub fn submit_state(&self) -> FormState {
		self.state.read().unwrap().clone()
	}

	pub fn set_number(&self, value: impl Into<String>) {
		self.state.write().unwrap().number = value.into();
	}

	pub fn set_name(&self, value: impl Into<String>) {
		self.state.write().unwrap().name = value.into();
	}

	pub fn set_month(&self, value: impl Into<String>) {
		self.state.write().unwrap().month = value.into();
	}

	pub fn set_year(&self, value: impl Into<String>) {
		self.state.write().unwrap().year = value.into();
	}

	pub fn set_code(&self, value: impl Into<String>) {
		self.state.write().unwrap().code = value.into();
	}

	/// Submits the form once. Failures are swallowed into a log line; the
	/// caller gets no error and the form stays as it was.
	pub async fn submit(&self) {
		let path = self.location.pathname();
		let order = match OrderReference::from_path(&path) {
			Some(order) => order,
			None => {
				warn!(
					"Payment submission aborted for path {path:?}: {}",
					SubmissionError::MissingOrderReference
				);
				return;
			}
		};

		// The bound number field never receives input, so the live field
		// value wins at submit time.
		let number = self.card_number.value();

		let command = {
			let state = self.state.read().unwrap();
			SubmitPaymentCommand {
				order,
				name: state.name.clone(),
				number,
				month: state.month.clone(),
				year: state.year.clone(),
				code: state.code.clone(),
			}
		};

		match self.submit_payment.execute(command).await {
			Ok(()) => {
				info!("Payment for order {order} accepted");
				self.notifier.success(SUCCESS_MESSAGE);
				self.state.write().unwrap().reset();
				self.navigator.assign(&self.site_root);
			}
			Err(e) => {
				warn!("Payment submission failed for order {order}: {e}");
			}
		}
	}
}
