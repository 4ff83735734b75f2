use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::domain::order_reference::OrderReference;

/// Wire body of the payment POST. Field names and order match what the
/// storefront backend expects.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CardDetails {
	pub name:   String,
	pub number: String,
	pub year:   String,
	pub month:  String,
	pub code:   String,
}

/// The single failure category of a submission. Network errors and
/// non-success responses are not distinguished beyond the log line emitted
/// where they occur.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
	#[display("Could not reach the payment endpoint.")]
	Unreachable,
	#[display("Payment endpoint rejected the submission.")]
	Rejected,
	#[display("Page path does not reference an order.")]
	MissingOrderReference,
}

/// Outbound port for the payment backend.
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn submit(
		&self,
		order: OrderReference,
		details: &CardDetails,
	) -> Result<(), SubmissionError>;
}
