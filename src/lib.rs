//! Blocking client for the JSON/HTTP API of a Hue bridge.
//!
//! ```no_run
//! use huelink::{Bridge, Config};
//!
//! # fn main() -> huelink::Result<()> {
//! let mut bridge = Bridge::new(&Config::new("10.0.1.3:80", "vXBlVENNfyKjfF3s"))?;
//! for light in bridge.fetch_lights()? {
//! 	println!("{} {}", light.index(), light.name());
//! }
//! if let Some(light) = bridge.find_light_by_name("Desk")? {
//! 	light.set("on", true)?;
//! 	light.set("bri", "200")?;
//! }
//! # Ok(())
//! # }
//! ```
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate serde_with;
extern crate thiserror;
pub mod error;
pub use error::{
	Error, Result, TransportError, DEVICE_OFF, INVALID_VALUE, RESOURCE_NOT_AVAILABLE,
	UNAUTHORIZED_USER,
};
pub mod config;
pub use config::Config;
pub mod response;
pub use response::{Response, ResponseUnit};
pub mod transport;
pub use reqwest::{Method, StatusCode};
pub use transport::{HttpTransport, Reply, Transport};
pub mod value;
pub use value::coerce;
pub mod lights;
pub use lights::{Light, LightAttributes, LightState};
pub mod groups;
pub use groups::{Group, GroupAttributes, ALL_LIGHTS};
pub mod scenes;
pub use scenes::{Scene, SceneAttributes};
pub mod bridge;
pub use bridge::Bridge;
