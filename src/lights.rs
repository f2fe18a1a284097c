use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::{Error, Result, DEVICE_OFF};
use crate::response::decode;
use crate::transport::Endpoint;
use crate::value::coerce;

pub(crate) const ROUTE: &str = "lights";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
/// Attributes of a light
pub struct LightAttributes {
	pub name: String,
	pub state: LightState,
	#[serde(rename = "type")]
	pub light_type: Option<String>,
	pub modelid: Option<String>,
	pub manufacturername: Option<String>,
	pub uniqueid: Option<String>,
	pub swversion: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
/// Current state of a light, kept exactly as the bridge reported it
pub struct LightState(pub Map<String, Value>);

impl LightState {
	pub fn get(&self, attr: &str) -> Option<&Value> {
		self.0.get(attr)
	}

	pub fn on(&self) -> Option<bool> {
		self.get("on").and_then(Value::as_bool)
	}

	/// Brightness
	pub fn bri(&self) -> Option<u64> {
		self.get("bri").and_then(Value::as_u64)
	}

	pub fn reachable(&self) -> Option<bool> {
		self.get("reachable").and_then(Value::as_bool)
	}
}

/// One light known to a bridge.
///
/// Name and state are a snapshot of the last fetch. Commands sent with
/// [`Light::set`] or [`Light::send`] do not update it; call [`Light::fetch`]
/// to see what the bridge made of them.
#[derive(Debug, Clone)]
pub struct Light {
	index: u32,
	attributes: LightAttributes,
	endpoint: Arc<Endpoint>,
}

impl Light {
	pub(crate) fn new(endpoint: Arc<Endpoint>, index: u32) -> Light {
		Light::with_attributes(endpoint, index, LightAttributes::default())
	}

	pub(crate) fn with_attributes(
		endpoint: Arc<Endpoint>,
		index: u32,
		attributes: LightAttributes,
	) -> Light {
		Light {
			index,
			attributes,
			endpoint,
		}
	}

	/// Build one light per entry of a `GET lights` document, in document order.
	pub(crate) fn parse_all(
		endpoint: &Arc<Endpoint>,
		lights: &Map<String, Value>,
	) -> Result<Vec<Light>> {
		lights
			.iter()
			.map(|(key, attributes)| -> Result<Light> {
				let index = key
					.parse::<u32>()
					.map_err(|_| {
						Error::unexpected(format!("light key {:?} is not an index", key))
					})?;
				Ok(Light::with_attributes(endpoint.clone(), index, decode(attributes)?))
			})
			.collect()
	}

	/// Bridge-assigned index, starting at 1
	pub fn index(&self) -> u32 {
		self.index
	}

	pub fn name(&self) -> &str {
		&self.attributes.name
	}

	pub fn state(&self) -> &LightState {
		&self.attributes.state
	}

	pub fn attributes(&self) -> &LightAttributes {
		&self.attributes
	}

	fn route(&self) -> String {
		format!("{}/{}", ROUTE, self.index)
	}

	/// Reload name and state from the bridge.
	pub fn fetch(&mut self) -> Result<()> {
		let payload = self
			.endpoint
			.request(Method::GET, &self.route(), None)?
			.into_payload()?;
		self.attributes = decode(&payload)?;
		Ok(())
	}

	/// Set one state parameter, e.g. `light.set("bri", 200)`.
	///
	/// String values go through [`coerce`], so `"false"` and `"254"` are
	/// sent as a boolean and a number. A light that is logically off rejects
	/// everything but `on`; that rejection is logged and otherwise ignored.
	pub fn set<V: Into<Value>>(&self, attr: &str, value: V) -> Result<()> {
		let mut command = Map::new();
		command.insert(attr.to_string(), coerce(value.into()));
		self.put_state(command)
	}

	/// Send a raw JSON command object such as `{"on": true, "bri": 100}`.
	pub fn send(&self, command: &str) -> Result<()> {
		let command: Map<String, Value> =
			serde_json::from_str(command).map_err(Error::InvalidCommand)?;
		self.put_state(command)
	}

	fn put_state(&self, command: Map<String, Value>) -> Result<()> {
		let route = format!("{}/state", self.route());
		let result = self
			.endpoint
			.request(Method::PUT, &route, Some(&Value::Object(command)))
			.and_then(|response| response.check());
		match result {
			Err(Error::Bridge {
				kind: DEVICE_OFF,
				message,
			}) => {
				warn!("light {} is off, command ignored: {}", self.index, message);
				Ok(())
			}
			Err(err @ Error::Bridge { .. }) => {
				warn!("light {}: {}", self.index, err);
				Err(err)
			}
			other => other,
		}
	}
}
