use crate::domain::order_reference::OrderReference;

#[derive(Debug, Clone)]
pub struct SubmitPaymentCommand {
	pub order:  OrderReference,
	pub name:   String,
	pub number: String,
	pub month:  String,
	pub year:   String,
	pub code:   String,
}
