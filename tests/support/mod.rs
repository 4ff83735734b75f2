pub mod mock_gateway;
pub mod recording_notifier;
