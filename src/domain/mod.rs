pub mod form_state;
pub mod gateway;
pub mod order_reference;
pub mod page;
