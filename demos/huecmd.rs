//! Command-line front end for a Hue bridge.
//!
//! Run with: cargo run --example huecmd -- --host 10.0.1.3:80 --user <username> --lights
//!
//! Set one parameter: `--light Desk bri 200`, or send a whole command:
//! `--light Desk '{"on": true, "bri": 100}'`.

use clap::Parser;
use huelink::{Bridge, Config, Error};

#[derive(Parser)]
#[command(name = "huecmd")]
#[command(about = "Control Hue lights from the command line", long_about = None)]
struct Cli {
	/// Bridge address, host or host:port
	#[arg(long)]
	host: String,

	/// Whitelisted username
	#[arg(long)]
	user: String,

	/// List lights
	#[arg(long)]
	lights: bool,

	/// Switch all lights off
	#[arg(long)]
	off: bool,

	/// List scenes
	#[arg(long)]
	scenes: bool,

	/// Activate the scene with this id
	#[arg(long)]
	scene: Option<String>,

	/// Light name, then either a JSON command or a parameter and a value
	#[arg(long, num_args = 2..=3, value_names = ["NAME", "COMMAND"])]
	light: Option<Vec<String>>,
}

fn run(cli: &Cli) -> huelink::Result<()> {
	let mut bridge = Bridge::new(&Config::new(cli.host.as_str(), cli.user.as_str()))?;

	if let Some(args) = &cli.light {
		match bridge.find_light_by_name(&args[0])? {
			None => println!("huecmd did not find any light by that name"),
			Some(light) => match args.as_slice() {
				[_, command] => {
					println!("huecmd sending {} to {}", command, light.name());
					light.send(command)?;
				}
				[_, attr, value] => light.set(attr, value.as_str())?,
				_ => unreachable!("clap enforces two or three values"),
			},
		}
	}

	if cli.lights {
		println!("huecmd found these lights");
		for light in bridge.fetch_lights()? {
			println!("{} {}", light.index(), light.name());
		}
	}

	if cli.scenes {
		println!("huecmd found these scenes");
		for (i, scene) in bridge.fetch_scenes()?.iter().enumerate() {
			println!("{} {} {:?} {}", i + 1, scene.name(), scene.lights(), scene.id());
		}
	}

	if cli.off {
		bridge.set_all_on(false)?;
	}

	if let Some(id) = &cli.scene {
		match bridge.find_scene_by_id(id)? {
			Some(scene) => scene.activate()?,
			None => println!("huecmd did not find a scene with that id"),
		}
	}

	Ok(())
}

fn main() {
	let cli = Cli::parse();
	match run(&cli) {
		Ok(()) => {}
		Err(Error::Bridge { kind, message }) => {
			eprintln!("Hue error type {} {}", kind, message);
			std::process::exit(1);
		}
		Err(err) => {
			eprintln!("{}", err);
			std::process::exit(2);
		}
	}
}
