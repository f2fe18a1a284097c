//! Shared helpers: a bridge pointed at a local mockito server.

#![allow(dead_code)]

use huelink::{Bridge, Config};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;

pub const USER: &str = "testuser";

pub fn server() -> ServerGuard {
	Server::new()
}

pub fn bridge(server: &ServerGuard) -> Bridge {
	Bridge::new(&Config::new(server.url(), USER)).expect("failed to build bridge")
}

/// Path of `route` below the API root of [`USER`].
pub fn path(route: &str) -> String {
	format!("/api/{}/{}", USER, route)
}

/// Answer `method route` once with `body`.
pub fn answer(server: &mut ServerGuard, method: &str, route: &str, body: Value) -> Mock {
	server
		.mock(method, path(route).as_str())
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(body.to_string())
		.create()
}

/// Answer `method route` with `body`, only when the request carries `expected`.
pub fn answer_command(
	server: &mut ServerGuard,
	method: &str,
	route: &str,
	expected: Value,
	body: Value,
) -> Mock {
	server
		.mock(method, path(route).as_str())
		.match_body(Matcher::Json(expected))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(body.to_string())
		.create()
}
