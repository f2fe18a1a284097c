use std::time::Duration;

use serde_with::{serde_as, DurationMilliSeconds};

fn default_timeout() -> Duration {
	Duration::from_secs(10)
}

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
/// Where the bridge lives and which whitelisted user to act as
pub struct Config {
	/// `host` or `host:port`, optionally with an `http://`/`https://` scheme
	pub host: String,
	/// Whitelisted username (the API key)
	pub username: String,
	/// Per-request timeout, in milliseconds when serialized
	#[serde_as(as = "DurationMilliSeconds<u64>")]
	#[serde(rename = "timeout_ms", default = "default_timeout")]
	pub timeout: Duration,
}

impl Config {
	pub fn new<H: Into<String>, U: Into<String>>(host: H, username: U) -> Config {
		Config {
			host: host.into(),
			username: username.into(),
			timeout: default_timeout(),
		}
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Config {
		self.timeout = timeout;
		self
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// The capability URL every route is appended to.
	pub fn base_url(&self) -> String {
		let host = self.host.trim_end_matches('/');
		if host.starts_with("http://") || host.starts_with("https://") {
			format!("{}/api/{}", host, self.username)
		} else {
			format!("http://{}/api/{}", host, self.username)
		}
	}
}
