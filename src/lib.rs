#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

use bevy::prelude::*;
use bevy::window::{MonitorSelection, PresentMode, Window, WindowMode, WindowPlugin, WindowResolution};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
pub mod ui;

use events::{AvatarEmoteEvent, FlightToggleEvent, HoverToggleEvent, SpawnObjectEvent};
use resources::{
    vertical_movement_registered, FlightSettings, FlightState, SceneSettings, SelectedSpawner,
};
use systems::{
    avatar_emote_system, flight_input_system, flight_movement_system, flight_toggle_system,
    orbit_camera_system, pointer_interaction_system, scene_setup_system,
    spawn_object_event_system, spinner_system,
};
use ui::ui_hover_text_system;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    pub width: f32,
    pub height: f32,
    pub fullscreen: bool,
    pub disable_vsync: bool,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            fullscreen: false,
            disable_vsync: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub initial_cubes: Vec<[f32; 3]>,
    pub plane_position: [f32; 3],
    pub plane_rotation: [f32; 4],
    pub spawn_min: [f32; 3],
    pub spawn_max: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        let defaults = SceneSettings::default();
        Self {
            initial_cubes: defaults
                .initial_cubes
                .iter()
                .map(|position| position.to_array())
                .collect(),
            plane_position: defaults.plane_position.to_array(),
            plane_rotation: defaults.plane_rotation.to_array(),
            spawn_min: defaults.spawn_min.to_array(),
            spawn_max: defaults.spawn_max.to_array(),
        }
    }
}

impl SceneConfig {
    pub fn settings(&self) -> SceneSettings {
        SceneSettings {
            initial_cubes: self
                .initial_cubes
                .iter()
                .map(|position| Vec3::from_array(*position))
                .collect(),
            plane_position: Vec3::from_array(self.plane_position),
            plane_rotation: Quat::from_array(self.plane_rotation).normalize(),
            spawn_min: Vec3::from_array(self.spawn_min),
            spawn_max: Vec3::from_array(self.spawn_max),
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub vertical_speed: f32,
    pub platform_scale: [f32; 3],
    pub flight_emote: String,
}

impl Default for FlightConfig {
    fn default() -> Self {
        let defaults = FlightSettings::default();
        Self {
            vertical_speed: defaults.vertical_speed,
            platform_scale: defaults.platform_scale.to_array(),
            flight_emote: defaults.flight_emote,
        }
    }
}

impl FlightConfig {
    pub fn settings(&self) -> FlightSettings {
        FlightSettings {
            vertical_speed: self.vertical_speed,
            platform_scale: Vec3::from_array(self.platform_scale),
            flight_emote: self.flight_emote.clone(),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graphics: GraphicsConfig,
    pub scene: SceneConfig,
    pub flight: FlightConfig,
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let toml_str = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&toml_str)?)
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
enum SceneSystemSets {
    Input,
    Flight,
    Spawn,
    UpdateCamera,
    Ui,
}

/// Builds the Bevy app for the sandbox scene and runs it.
pub fn run_scene(config: &Config) {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "flight-sandbox".to_string(),
                    present_mode: if config.graphics.disable_vsync {
                        PresentMode::Immediate
                    } else {
                        PresentMode::Fifo
                    },
                    resolution: WindowResolution::new(
                        config.graphics.width as u32,
                        config.graphics.height as u32,
                    ),
                    mode: if config.graphics.fullscreen {
                        WindowMode::BorderlessFullscreen(MonitorSelection::Primary)
                    } else {
                        WindowMode::Windowed
                    },
                    ..Default::default()
                }),
                ..Default::default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                filter: "wgpu=error,naga=error".to_string(),
                ..Default::default()
            }),
    );

    app.add_plugins(bevy_egui::EguiPlugin {
        enable_multipass_for_primary_context: false,
        ..Default::default()
    });
    app.add_plugins(
        bevy_rapier3d::prelude::RapierPhysicsPlugin::<bevy_rapier3d::prelude::NoUserData>::default(),
    );

    app.insert_resource(config.flight.settings());
    app.insert_resource(config.scene.settings());
    app.init_resource::<FlightState>();
    app.init_resource::<SelectedSpawner>();

    app.register_type::<components::Cube>()
        .register_type::<components::SpawnedPlane>()
        .register_type::<components::Spinner>()
        .register_type::<components::InteractionPrompt>()
        .register_type::<components::PlayerAvatar>()
        .register_type::<components::FlightPlatform>()
        .register_type::<components::ActiveEmote>()
        .register_type::<FlightState>()
        .register_type::<FlightSettings>();

    app.add_message::<FlightToggleEvent>()
        .add_message::<HoverToggleEvent>()
        .add_message::<SpawnObjectEvent>()
        .add_message::<AvatarEmoteEvent>();

    app.configure_sets(
        Update,
        (
            SceneSystemSets::Input,
            SceneSystemSets::Flight.after(SceneSystemSets::Input),
            SceneSystemSets::Spawn.after(SceneSystemSets::Input),
            SceneSystemSets::Ui.after(SceneSystemSets::Input),
        ),
    );

    app.add_systems(Startup, scene_setup_system);

    app.add_systems(
        Update,
        (
            flight_input_system,
            pointer_interaction_system.after(bevy_egui::EguiPreUpdateSet::InitContexts),
        )
            .in_set(SceneSystemSets::Input),
    );

    app.add_systems(
        Update,
        (
            flight_toggle_system,
            flight_movement_system
                .run_if(vertical_movement_registered)
                .after(flight_toggle_system),
            avatar_emote_system.after(flight_toggle_system),
        )
            .in_set(SceneSystemSets::Flight),
    );

    app.add_systems(
        Update,
        (spawn_object_event_system, spinner_system).in_set(SceneSystemSets::Spawn),
    );

    app.add_systems(
        Update,
        orbit_camera_system
            .in_set(SceneSystemSets::UpdateCamera)
            .after(bevy_egui::EguiPreUpdateSet::InitContexts),
    );

    app.add_systems(Update, ui_hover_text_system.in_set(SceneSystemSets::Ui));

    log::info!("Starting flight-sandbox scene");
    app.run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_settings_defaults() {
        let config = Config::default();
        let flight = config.flight.settings();
        assert_eq!(flight.vertical_speed, FlightSettings::default().vertical_speed);
        assert_eq!(flight.platform_scale, FlightSettings::default().platform_scale);

        let scene = config.scene.settings();
        assert_eq!(scene.initial_cubes, SceneSettings::default().initial_cubes);
        assert!((scene.plane_rotation.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_config_parses_overrides() {
        let toml_str = r#"
            [flight]
            vertical_speed = 0.1

            [scene]
            initial_cubes = [[2.0, 1.0, 2.0], [14.0, 1.0, 14.0]]

            [graphics]
            width = 1280.0
            height = 720.0
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.flight.settings().vertical_speed, 0.1);
        assert_eq!(config.scene.settings().initial_cubes.len(), 2);
        assert_eq!(config.graphics.width, 1280.0);
        // Unspecified sections keep their defaults.
        assert_eq!(
            config.flight.settings().platform_scale,
            FlightSettings::default().platform_scale
        );
    }

    #[test]
    fn test_load_config_missing_file_is_io_error() {
        let result = load_config(Path::new("definitely-missing-config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
