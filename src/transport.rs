//! One HTTP call per bridge operation.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::error::{Result, TransportError};
use crate::response::Response;

/// Status line and raw body of one HTTP exchange
#[derive(Debug, Clone)]
pub struct Reply {
	pub status: StatusCode,
	pub body: String,
}

/// Carries a single request to the bridge and hands back whatever came back.
///
/// Implementations must not retry and must not interpret the body.
pub trait Transport: Send + Sync {
	fn send(
		&self,
		method: Method,
		url: &str,
		body: Option<&Value>,
	) -> std::result::Result<Reply, TransportError>;
}

/// [`Transport`] over a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	pub fn new(timeout: Duration) -> std::result::Result<HttpTransport, TransportError> {
		let client = Client::builder()
			.timeout(timeout)
			.build()
			.map_err(TransportError::Client)?;
		Ok(HttpTransport { client })
	}
}

impl Transport for HttpTransport {
	fn send(
		&self,
		method: Method,
		url: &str,
		body: Option<&Value>,
	) -> std::result::Result<Reply, TransportError> {
		let mut request = self.client.request(method, url);
		if let Some(body) = body {
			request = request.json(body);
		}
		let failed = |source| TransportError::Request {
			url: url.to_string(),
			source,
		};
		let response = request.send().map_err(failed)?;
		let status = response.status();
		let body = response.text().map_err(failed)?;
		Ok(Reply { status, body })
	}
}

/// The capability URL of a bridge together with the transport to reach it.
///
/// Shared by a [`crate::Bridge`] and every light, group and scene it hands out.
pub(crate) struct Endpoint {
	base_url: String,
	transport: Box<dyn Transport>,
}

impl fmt::Debug for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Endpoint")
			.field("base_url", &self.base_url)
			.finish()
	}
}

impl Endpoint {
	pub(crate) fn new(base_url: String, transport: Box<dyn Transport>) -> Endpoint {
		Endpoint {
			base_url,
			transport,
		}
	}

	pub(crate) fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Send `payload` to `<base>/<route>` and normalise the answer.
	///
	/// A non-2xx status fails before the body is looked at.
	pub(crate) fn request(
		&self,
		method: Method,
		route: &str,
		payload: Option<&Value>,
	) -> Result<Response> {
		let url = format!("{}/{}", self.base_url, route);
		debug!("{} /{}", method, route);
		let reply = self
			.transport
			.send(method, &url, payload)
			.map_err(|e| {
				error!("{}", e);
				e
			})?;
		if !reply.status.is_success() {
			let err = TransportError::BadStatus {
				url,
				status: reply.status,
			};
			error!("{}", err);
			return Err(err.into());
		}
		let body: Value = serde_json::from_str(&reply.body)
			.map_err(|source| TransportError::Body { url, source })?;
		Response::from_body(body)
	}
}
