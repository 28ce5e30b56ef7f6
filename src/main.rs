use std::path::Path;

use clap::{Arg, Command};

use flight_sandbox::{load_config, run_scene, Config, ConfigError};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("flight-sandbox")
        .about("Interactive sandbox scene with spawnable cubes and a prototype flight mode")
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a TOML configuration file")
                .takes_value(true)
                .default_value("flight-sandbox.toml"),
        )
        .get_matches();

    let config_path = matches.value_of("config").unwrap();
    let config = match load_config(Path::new(config_path)) {
        Ok(config) => {
            println!("Read configuration from {}", config_path);
            config
        }
        Err(ConfigError::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => {
            println!("No configuration at {}, using defaults", config_path);
            Config::default()
        }
        Err(error) => return Err(error.into()),
    };

    run_scene(&config);
    Ok(())
}
