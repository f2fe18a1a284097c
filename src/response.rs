//! Normalised bridge answers.
//!
//! Fetches answer with a single JSON object, commands with an array of
//! single-key objects such as `{"success": {"/lights/1/state/on": true}}` or
//! `{"error": {"type": 201, "description": "..."}}`. Both shapes end up as a
//! [`Response`]: an ordered list of [`ResponseUnit`]s.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Deserialize)]
struct ErrorBody {
	#[serde(rename = "type")]
	kind: i64,
	#[serde(default)]
	description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseUnit {
	/// Any unit without an `"error"` key, kept as received.
	Success(Value),
	Error { kind: i64, description: String },
}

impl ResponseUnit {
	pub fn parse(unit: Value) -> Result<ResponseUnit> {
		match unit.get("error") {
			Some(body) => {
				let body: ErrorBody = decode(body)?;
				Ok(ResponseUnit::Error {
					kind: body.kind,
					description: body.description,
				})
			}
			None => Ok(ResponseUnit::Success(unit)),
		}
	}
}

/// Wrap a lone object into a one-element sequence; arrays pass unchanged.
pub fn normalize(body: Value) -> Vec<Value> {
	match body {
		Value::Array(units) => units,
		other => vec![other],
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
	units: Vec<ResponseUnit>,
}

impl Response {
	pub fn from_body(body: Value) -> Result<Response> {
		let units = normalize(body)
			.into_iter()
			.map(ResponseUnit::parse)
			.collect::<Result<Vec<_>>>()?;
		Ok(Response { units })
	}

	pub fn units(&self) -> &[ResponseUnit] {
		&self.units
	}

	/// Fail with the first error unit in sequence order.
	///
	/// Later error units of the same answer are not reported.
	pub fn check(&self) -> Result<()> {
		for unit in &self.units {
			if let ResponseUnit::Error { kind, description } = unit {
				return Err(Error::bridge(*kind, description));
			}
		}
		Ok(())
	}

	/// The JSON of the first unit, which is the whole document for fetches.
	pub fn into_payload(self) -> Result<Value> {
		self.check()?;
		match self.units.into_iter().next() {
			Some(ResponseUnit::Success(value)) => Ok(value),
			_ => Err(Error::unexpected("empty response")),
		}
	}
}

/// Read a typed value out of a bridge document, reporting shape mismatches
/// as [`Error::Unexpected`].
pub(crate) fn decode<T: DeserializeOwned>(value: &Value) -> Result<T> {
	<T as serde::Deserialize>::deserialize(value).map_err(|e| Error::unexpected(e.to_string()))
}
