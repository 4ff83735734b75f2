use async_trait::async_trait;
use log::error;
use reqwest::Client;

use crate::config::Config;
use crate::domain::gateway::{CardDetails, PaymentGateway, SubmissionError};
use crate::domain::order_reference::OrderReference;

/// Gateway backed by the storefront payment endpoint,
/// `POST {base_url}/api/payment/{orderId}/`.
#[derive(Clone)]
pub struct HttpPaymentGateway {
	base_url:    String,
	http_client: Client,
}

impl HttpPaymentGateway {
	pub fn new(base_url: impl Into<String>, http_client: Client) -> Self {
		Self {
			base_url: base_url.into(),
			http_client,
		}
	}

	pub fn from_config(config: &Config, http_client: Client) -> Self {
		Self::new(config.gateway_base_url.clone(), http_client)
	}

	fn endpoint_for(&self, order: OrderReference) -> String {
		format!(
			"{}/api/payment/{}/",
			self.base_url.trim_end_matches('/'),
			order.value()
		)
	}
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
	async fn submit(
		&self,
		order: OrderReference,
		details: &CardDetails,
	) -> Result<(), SubmissionError> {
		let resp = self
			.http_client
			.post(self.endpoint_for(order))
			.json(details)
			.send()
			.await
			.map_err(|e| {
				error!("Failed to reach payment endpoint for order {order}: {e}");
				SubmissionError::Unreachable
			})?;

		if resp.status().is_success() {
			Ok(())
		} else {
			error!(
				"Payment endpoint returned non-success status for order {order}: {}",
				resp.status()
			);
			Err(SubmissionError::Rejected)
		}
	}
}
