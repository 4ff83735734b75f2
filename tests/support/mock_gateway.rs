use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use checkout_payment::domain::gateway::{
	CardDetails, PaymentGateway, SubmissionError,
};
use checkout_payment::domain::order_reference::OrderReference;

/// Gateway double that records every submission and returns a fixed
/// outcome. Clones share the record.
#[derive(Clone)]
pub struct MockPaymentGateway {
	outcome:     Result<(), SubmissionError>,
	submissions: Arc<RwLock<Vec<(OrderReference, CardDetails)>>>,
}

impl MockPaymentGateway {
	pub fn succeeding() -> Self {
		Self {
			outcome:     Ok(()),
			submissions: Arc::new(RwLock::new(Vec::new())),
		}
	}

	pub fn failing(error: SubmissionError) -> Self {
		Self {
			outcome:     Err(error),
			submissions: Arc::new(RwLock::new(Vec::new())),
		}
	}

	pub fn submissions(&self) -> Vec<(OrderReference, CardDetails)> {
		self.submissions.read().unwrap().clone()
	}
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
	async fn submit(
		&self,
		order: OrderReference,
		details: &CardDetails,
	) -> Result<(), SubmissionError> {
		self.submissions
			.write()
			.unwrap()
			.push((order, details.clone()));
		self.outcome
	}
}
