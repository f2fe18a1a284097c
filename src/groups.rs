use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};
use serde_with::{serde_as, DisplayFromStr};

use crate::error::{Error, Result};
use crate::response::decode;
use crate::transport::Endpoint;

pub(crate) const ROUTE: &str = "groups";

/// The group the bridge reserves for "every light"
pub const ALL_LIGHTS: u32 = 0;

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
/// Attributes of a group
pub struct GroupAttributes {
	pub name: String,
	/// Indices of the member lights
	#[serde_as(as = "Vec<DisplayFromStr>")]
	#[serde(default)]
	pub lights: Vec<u32>,
	#[serde(rename = "type")]
	pub group_type: Option<String>,
}

/// A named set of lights that takes commands as one.
///
/// Membership is whatever the bridge reported at fetch time; groups are
/// only ever written to through [`Group::set`].
#[derive(Debug, Clone)]
pub struct Group {
	id: u32,
	attributes: GroupAttributes,
	endpoint: Arc<Endpoint>,
}

impl Group {
	pub(crate) fn new(endpoint: Arc<Endpoint>, id: u32) -> Group {
		Group {
			id,
			attributes: GroupAttributes::default(),
			endpoint,
		}
	}

	pub(crate) fn parse_all(
		endpoint: &Arc<Endpoint>,
		groups: &Map<String, Value>,
	) -> Result<Vec<Group>> {
		groups
			.iter()
			.map(|(key, attributes)| -> Result<Group> {
				let id = key
					.parse::<u32>()
					.map_err(|_| {
						Error::unexpected(format!("group key {:?} is not an id", key))
					})?;
				Ok(Group {
					id,
					attributes: decode(attributes)?,
					endpoint: endpoint.clone(),
				})
			})
			.collect()
	}

	pub fn id(&self) -> u32 {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.attributes.name
	}

	pub fn lights(&self) -> &[u32] {
		&self.attributes.lights
	}

	pub fn attributes(&self) -> &GroupAttributes {
		&self.attributes
	}

	pub fn is_all_lights(&self) -> bool {
		self.id == ALL_LIGHTS
	}

	/// Broadcast one action parameter to every member light.
	///
	/// Unlike [`crate::Light::set`] no error is ignored here, and the value
	/// is sent as given.
	pub fn set<V: Into<Value>>(&self, attr: &str, value: V) -> Result<()> {
		let mut action = Map::new();
		action.insert(attr.to_string(), value.into());
		let route = format!("{}/{}/action", ROUTE, self.id);
		self.endpoint
			.request(Method::PUT, &route, Some(&Value::Object(action)))?
			.check()
	}

	pub fn delete(&self) -> Result<()> {
		let route = format!("{}/{}", ROUTE, self.id);
		self.endpoint.request(Method::DELETE, &route, None)?.check()
	}
}
