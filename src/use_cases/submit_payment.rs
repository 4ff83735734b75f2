use crate::domain::gateway::{CardDetails, PaymentGateway, SubmissionError};
use crate::use_cases::dto::SubmitPaymentCommand;

/// Sends one payment submission through the gateway. No validation, no
/// retry, no idempotency guard: the backend is trusted entirely.
#[derive(Clone)]
pub struct SubmitPaymentUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> SubmitPaymentUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	pub async fn execute(
		&self,
		command: SubmitPaymentCommand,
	) -> Result<(), SubmissionError> {
		let details = CardDetails {
			name:   command.name,
			number: command.number,
			year:   command.year,
			month:  command.month,
			code:   command.code,
		};

		self.gateway.submit(command.order, &details).await
	}
}
