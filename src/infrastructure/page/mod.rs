pub mod log_notifier;
pub mod recording_navigator;
pub mod shared_card_number_field;
pub mod shared_page_location;
