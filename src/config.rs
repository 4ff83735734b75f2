use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub gateway_base_url: String,
	pub site_root:        Option<String>,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}

#[cfg(test)]
mod tests {
	use std::env;

	use super::*;

	// Single test body: the APP_* variables are process-global and the
	// harness runs tests in parallel.
	#[test]
	fn test_config_load() {
		unsafe {
			env::set_var("APP_GATEWAY_BASE_URL", "http://test_gateway/");
			env::set_var("APP_SITE_ROOT", "/store/");
		};

		let config = Config::load().expect("Failed to load config in test");

		assert_eq!(config.gateway_base_url, "http://test_gateway/");
		assert_eq!(config.site_root, Some("/store/".to_string()));

		unsafe {
			env::remove_var("APP_SITE_ROOT");
		};

		let config = Config::load().expect("Failed to load config in test");

		assert_eq!(config.site_root, None);

		unsafe {
			env::remove_var("APP_GATEWAY_BASE_URL");
		}
	}
}
