pub mod dto;
pub mod submit_payment;
