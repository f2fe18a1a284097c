//! Errors raised while talking to a bridge.

use reqwest::StatusCode;

/// The credential in the base URL is not whitelisted on the bridge.
pub const UNAUTHORIZED_USER: i64 = 1;
/// The addressed resource (light, scene, whitelist entry, ...) does not exist.
pub const RESOURCE_NOT_AVAILABLE: i64 = 3;
/// A parameter value was rejected.
pub const INVALID_VALUE: i64 = 7;
/// The light is logically off: it still accepts `on`, but no color or
/// brightness parameters.
pub const DEVICE_OFF: i64 = 201;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The HTTP exchange itself failed. Never produced from the body of a
	/// well-formed bridge answer.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The bridge accepted the request but reported a failure for it.
	///
	/// `kind` is the bridge's numeric error type, `message` its description
	/// prefixed with `"error: "`.
	#[error("bridge error type {kind}: {message}")]
	Bridge { kind: i64, message: String },

	/// The bridge answered with a document the resource model can't read.
	#[error("unexpected response from bridge: {0}")]
	Unexpected(String),

	/// A raw JSON command handed in by the caller is not a JSON object.
	#[error("invalid command: {0}")]
	InvalidCommand(serde_json::Error),
}

/// Failures below the bridge API: connection, status line and body decoding.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	#[error("could not set up HTTP client: {0}")]
	Client(#[source] reqwest::Error),

	#[error("request to {url} failed: {source}")]
	Request {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("got bad response status {status} from {url}")]
	BadStatus { url: String, status: StatusCode },

	#[error("response body from {url} is not JSON: {source}")]
	Body {
		url: String,
		#[source]
		source: serde_json::Error,
	},
}

impl Error {
	/// Build a bridge error from the `type` and `description` of an error unit.
	pub fn bridge(kind: i64, description: &str) -> Self {
		Error::Bridge {
			kind,
			message: format!("error: {}", description),
		}
	}

	pub(crate) fn unexpected<S: Into<String>>(what: S) -> Self {
		Error::Unexpected(what.into())
	}

	/// The bridge error type, if this is a [`Error::Bridge`].
	pub fn kind(&self) -> Option<i64> {
		match self {
			Error::Bridge { kind, .. } => Some(*kind),
			_ => None,
		}
	}

	pub fn is_transport(&self) -> bool {
		matches!(self, Error::Transport(_))
	}
}
