//! Scenes and groups against a mock bridge.

mod common;

use common::{answer, answer_command, bridge, server};
use huelink::{Error, ALL_LIGHTS, INVALID_VALUE, RESOURCE_NOT_AVAILABLE};
use mockito::ServerGuard;
use serde_json::json;

fn scene_list(server: &mut ServerGuard) -> mockito::Mock {
	answer(
		server,
		"GET",
		"scenes",
		json!({
			"ac637e2f0-on-0": {"name": "Relax", "lights": ["1", "2"]},
			"4e1c6b20e-on-0": {"name": "Energize", "lights": ["1"]},
			"a1b2c3d4e-on-0": {"name": "Relax", "lights": ["3"]},
			"Z9eWqvoKb7e0": {"name": "Bright", "lights": ["1", "2", "3"], "recycle": true}
		}),
	)
}

#[test]
fn fetch_scenes_sorts_by_name_keeping_bridge_order_for_ties() {
	let mut server = server();
	scene_list(&mut server);
	let mut bridge = bridge(&server);

	let scenes = bridge.fetch_scenes().unwrap();
	let listed: Vec<(&str, &str)> = scenes.iter().map(|s| (s.name(), s.id())).collect();
	assert_eq!(
		listed,
		vec![
			("Bright", "Z9eWqvoKb7e0"),
			("Energize", "4e1c6b20e-on-0"),
			("Relax", "ac637e2f0-on-0"),
			("Relax", "a1b2c3d4e-on-0"),
		]
	);
	assert_eq!(scenes[0].lights(), &[1, 2, 3]);
	assert_eq!(scenes[0].attributes().recycle, Some(true));
}

#[test]
fn scene_sort_is_case_sensitive() {
	let mut server = server();
	answer(
		&mut server,
		"GET",
		"scenes",
		json!({
			"1": {"name": "relax", "lights": []},
			"2": {"name": "Relax", "lights": []},
			"3": {"name": "bright", "lights": []}
		}),
	);
	let mut bridge = bridge(&server);

	let names: Vec<&str> = bridge
		.fetch_scenes()
		.unwrap()
		.iter()
		.map(|s| s.name())
		.collect();
	assert_eq!(names, vec!["Relax", "bright", "relax"]);
}

#[test]
fn find_scene_refetches_every_time() {
	let mut server = server();
	let list = server
		.mock("GET", common::path("scenes").as_str())
		.with_body(
			json!({
				"ac637e2f0-on-0": {"name": "Relax", "lights": ["1", "2"]},
				"4e1c6b20e-on-0": {"name": "Energize", "lights": ["1"]},
				"a1b2c3d4e-on-0": {"name": "Relax", "lights": ["3"]}
			})
			.to_string(),
		)
		.expect(4)
		.create();
	let mut bridge = bridge(&server);

	let relax = bridge.find_scene_by_name("Relax").unwrap().unwrap();
	assert_eq!(relax.id(), "ac637e2f0-on-0");
	assert!(bridge.find_scene_by_name("relax").unwrap().is_none());
	let by_id = bridge.find_scene_by_id("a1b2c3d4e-on-0").unwrap().unwrap();
	assert_eq!(by_id.lights(), &[3]);
	assert!(bridge.find_scene_by_id("bad id").unwrap().is_none());
	list.assert();
}

#[test]
fn activate_goes_through_all_lights_group() {
	let mut server = server();
	scene_list(&mut server);
	let command = answer_command(
		&mut server,
		"PUT",
		"groups/0/action",
		json!({"scene": "4e1c6b20e-on-0"}),
		json!([{"success": {"/groups/0/action/scene": "4e1c6b20e-on-0"}}]),
	);
	let mut bridge = bridge(&server);

	let scene = bridge.find_scene_by_name("Energize").unwrap().unwrap();
	scene.activate().unwrap();
	command.assert();
}

#[test]
fn delete_scene() {
	let mut server = server();
	scene_list(&mut server);
	let delete = answer(
		&mut server,
		"DELETE",
		"scenes/Z9eWqvoKb7e0",
		json!([{"success": "/scenes/Z9eWqvoKb7e0 deleted"}]),
	);
	answer(
		&mut server,
		"DELETE",
		"scenes/4e1c6b20e-on-0",
		json!([{"error": {"type": 3, "address": "/scenes/4e1c6b20e-on-0", "description": "resource, /scenes/4e1c6b20e-on-0, not available"}}]),
	);
	let mut bridge = bridge(&server);

	let scenes = bridge.fetch_scenes().unwrap().to_vec();
	bridge.delete_scene(&scenes[0]).unwrap();
	delete.assert();
	let err = scenes[1].delete().unwrap_err();
	assert_eq!(err.kind(), Some(RESOURCE_NOT_AVAILABLE));
}

#[test]
fn fetch_groups_sorts_by_name() {
	let mut server = server();
	answer(
		&mut server,
		"GET",
		"groups",
		json!({
			"1": {"name": "Living room", "lights": ["1", "2"], "type": "Room"},
			"2": {"name": "Hallway", "lights": ["3"], "type": "Zone"},
			"7": {"name": "Bedroom", "lights": [], "type": "Room"}
		}),
	);
	let mut bridge = bridge(&server);

	let groups = bridge.fetch_groups().unwrap();
	let listed: Vec<(u32, &str)> = groups.iter().map(|g| (g.id(), g.name())).collect();
	assert_eq!(listed, vec![(7, "Bedroom"), (2, "Hallway"), (1, "Living room")]);
	assert_eq!(groups[2].lights(), &[1, 2]);
	assert!(!groups[0].is_all_lights());
	assert_eq!(bridge.groups().len(), 3);
}

#[test]
fn group_set_never_suppresses() {
	let mut server = server();
	answer_command(
		&mut server,
		"PUT",
		"groups/0/action",
		json!({"hue": 0}),
		json!([{"error": {"type": 201, "description": "device is off"}}]),
	);
	answer_command(
		&mut server,
		"PUT",
		"groups/0/action",
		json!({"sat": "max"}),
		json!([{"error": {"type": 7, "description": "invalid value, max, for parameter, sat"}}]),
	);
	let bridge = bridge(&server);
	let all = bridge.all_lights();
	assert_eq!(all.id(), ALL_LIGHTS);
	assert!(all.is_all_lights());

	assert_eq!(all.set("hue", 0).unwrap_err().kind(), Some(201));
	match all.set("sat", "max") {
		Err(Error::Bridge { kind, .. }) => assert_eq!(kind, INVALID_VALUE),
		other => panic!("expected bridge error, got {:?}", other),
	}
}

#[test]
fn group_delete() {
	let mut server = server();
	let delete = answer(
		&mut server,
		"DELETE",
		"groups/7",
		json!([{"success": "/groups/7 deleted."}]),
	);
	let bridge = bridge(&server);

	bridge.group(7).delete().unwrap();
	delete.assert();
}
