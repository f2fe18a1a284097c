use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::groups::{self, Group, ALL_LIGHTS};
use crate::lights::{self, Light};
use crate::scenes::{self, Scene};
use crate::transport::{Endpoint, HttpTransport, Transport};

fn into_object(value: Value, what: &str) -> Result<Map<String, Value>> {
	match value {
		Value::Object(map) => Ok(map),
		other => Err(Error::unexpected(format!("{} is not an object: {}", what, other))),
	}
}

/// A Hue bridge, addressed through one whitelisted user.
///
/// The light, group and scene lists are whatever the most recent `fetch_*`
/// call returned. Every fetch replaces its list wholesale and every `find_*`
/// fetches again; nothing here notices changes made on the bridge in between.
#[derive(Debug)]
pub struct Bridge {
	endpoint: Arc<Endpoint>,
	data: Map<String, Value>,
	lights: Vec<Light>,
	groups: Vec<Group>,
	scenes: Vec<Scene>,
}

impl Bridge {
	/// Connect through HTTP with the timeout from `config`.
	pub fn new(config: &Config) -> Result<Bridge> {
		let transport = HttpTransport::new(config.timeout())?;
		Ok(Bridge::with_transport(config, transport))
	}

	pub fn with_transport<T: Transport + 'static>(config: &Config, transport: T) -> Bridge {
		Bridge {
			endpoint: Arc::new(Endpoint::new(config.base_url(), Box::new(transport))),
			data: Map::new(),
			lights: Vec::new(),
			groups: Vec::new(),
			scenes: Vec::new(),
		}
	}

	pub fn base_url(&self) -> &str {
		self.endpoint.base_url()
	}

	fn get(&self, route: &str) -> Result<Map<String, Value>> {
		let payload = self
			.endpoint
			.request(Method::GET, route, None)?
			.into_payload()?;
		into_object(payload, if route.is_empty() { "bridge state" } else { route })
	}

	/// Fetch the full state of the bridge (lights, groups, config, ...).
	pub fn fetch_all(&mut self) -> Result<&Map<String, Value>> {
		self.data = self.get("")?;
		Ok(&self.data)
	}

	/// The document of the last successful [`Bridge::fetch_all`]
	pub fn data(&self) -> &Map<String, Value> {
		&self.data
	}

	pub fn fetch_config(&self) -> Result<Map<String, Value>> {
		self.get("config")
	}

	/// Usernames allowed to use the API, keyed by username
	pub fn whitelist(&self) -> Result<Map<String, Value>> {
		let config = self.fetch_config()?;
		match config.get("whitelist") {
			Some(whitelist) => into_object(whitelist.clone(), "whitelist"),
			None => Err(Error::unexpected("config has no whitelist")),
		}
	}

	/// Remove a user from the whitelist.
	///
	/// Deleting an unknown user fails with [`crate::RESOURCE_NOT_AVAILABLE`].
	pub fn delete_user(&self, id: &str) -> Result<()> {
		let route = format!("config/whitelist/{}", id);
		self.endpoint.request(Method::DELETE, &route, None)?.check()
	}

	/// Fetch all lights, sorted by index.
	pub fn fetch_lights(&mut self) -> Result<&[Light]> {
		let document = self.get(lights::ROUTE)?;
		let mut lights = Light::parse_all(&self.endpoint, &document)?;
		lights.sort_by_key(Light::index);
		debug!("fetched {} lights", lights.len());
		self.lights = lights;
		Ok(&self.lights)
	}

	/// The lights of the last [`Bridge::fetch_lights`]
	pub fn lights(&self) -> &[Light] {
		&self.lights
	}

	/// Fetch all groups, sorted by name. The all-lights group is not among them.
	pub fn fetch_groups(&mut self) -> Result<&[Group]> {
		let document = self.get(groups::ROUTE)?;
		let mut groups = Group::parse_all(&self.endpoint, &document)?;
		groups.sort_by(|a, b| a.name().cmp(b.name()));
		debug!("fetched {} groups", groups.len());
		self.groups = groups;
		Ok(&self.groups)
	}

	pub fn groups(&self) -> &[Group] {
		&self.groups
	}

	/// Fetch all scenes, sorted by name.
	///
	/// Scenes sharing a name keep the order the bridge listed them in.
	pub fn fetch_scenes(&mut self) -> Result<&[Scene]> {
		let document = self.get(scenes::ROUTE)?;
		let mut scenes = Scene::parse_all(&self.endpoint, &document)?;
		scenes.sort_by(|a, b| a.name().cmp(b.name()));
		debug!("fetched {} scenes", scenes.len());
		self.scenes = scenes;
		Ok(&self.scenes)
	}

	pub fn scenes(&self) -> &[Scene] {
		&self.scenes
	}

	/// First scene called `name`, after fetching the scene list again.
	pub fn find_scene_by_name(&mut self, name: &str) -> Result<Option<Scene>> {
		let scenes = self.fetch_scenes()?;
		Ok(scenes.iter().find(|scene| scene.name() == name).cloned())
	}

	pub fn find_scene_by_id(&mut self, id: &str) -> Result<Option<Scene>> {
		let scenes = self.fetch_scenes()?;
		Ok(scenes.iter().find(|scene| scene.id() == id).cloned())
	}

	/// First light called `name`, after fetching the light list again.
	pub fn find_light_by_name(&mut self, name: &str) -> Result<Option<Light>> {
		let lights = self.fetch_lights()?;
		Ok(lights.iter().find(|light| light.name() == name).cloned())
	}

	pub fn delete_scene(&self, scene: &Scene) -> Result<()> {
		scene.delete()
	}

	/// A handle on light `index` without fetching anything; its name and
	/// state stay empty until [`Light::fetch`].
	pub fn light(&self, index: u32) -> Light {
		Light::new(self.endpoint.clone(), index)
	}

	pub fn group(&self, id: u32) -> Group {
		Group::new(self.endpoint.clone(), id)
	}

	pub fn all_lights(&self) -> Group {
		self.group(ALL_LIGHTS)
	}

	/// Switch every light on or off with one group command.
	pub fn set_all_on(&self, on: bool) -> Result<()> {
		self.all_lights().set("on", on)
	}

	/// Set `attr` on every light, one request per light.
	///
	/// The first failure that [`Light::set`] does not ignore stops the loop;
	/// lights before it keep the new value.
	pub fn set_all_attribute<V: Into<Value>>(&mut self, attr: &str, value: V) -> Result<()> {
		let value = value.into();
		for light in self.fetch_lights()? {
			light.set(attr, value.clone())?;
		}
		Ok(())
	}
}
