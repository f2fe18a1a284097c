use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};
use serde_with::{serde_as, DisplayFromStr};

use crate::error::Result;
use crate::groups::{Group, ALL_LIGHTS};
use crate::response::decode;
use crate::transport::Endpoint;

pub(crate) const ROUTE: &str = "scenes";

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
/// Attributes of a scene
pub struct SceneAttributes {
	pub name: String,
	/// Indices of the lights the scene sets
	#[serde_as(as = "Vec<DisplayFromStr>")]
	pub lights: Vec<u32>,
	pub owner: Option<String>,
	pub recycle: Option<bool>,
	pub locked: Option<bool>,
}

/// A stored set of light states.
///
/// Scene names are not unique; the id is.
#[derive(Debug, Clone)]
pub struct Scene {
	id: String,
	attributes: SceneAttributes,
	endpoint: Arc<Endpoint>,
}

impl Scene {
	pub(crate) fn parse_all(
		endpoint: &Arc<Endpoint>,
		scenes: &Map<String, Value>,
	) -> Result<Vec<Scene>> {
		scenes
			.iter()
			.map(|(id, attributes)| -> Result<Scene> {
				Ok(Scene {
					id: id.clone(),
					attributes: decode(attributes)?,
					endpoint: endpoint.clone(),
				})
			})
			.collect()
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn name(&self) -> &str {
		&self.attributes.name
	}

	pub fn lights(&self) -> &[u32] {
		&self.attributes.lights
	}

	pub fn attributes(&self) -> &SceneAttributes {
		&self.attributes
	}

	/// Recall the scene.
	///
	/// The bridge has no scene endpoint for this: the scene id goes out as
	/// the `scene` action of the all-lights group.
	pub fn activate(&self) -> Result<()> {
		Group::new(self.endpoint.clone(), ALL_LIGHTS).set("scene", self.id.as_str())
	}

	pub fn delete(&self) -> Result<()> {
		let route = format!("{}/{}", ROUTE, self.id);
		self.endpoint.request(Method::DELETE, &route, None)?.check()
	}
}
