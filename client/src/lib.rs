pub mod audio;
pub mod config;
pub mod constants;
pub mod input;
pub mod tool;
pub mod ui;

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use shared::sets::WaterPlacerSet;
use shared::{LiquidEvent, LiquidRegistry, WaterPlacerTool, MOD_NAME, MOD_VERSION};

use audio::PlacementAudioPlugin;
use config::load_config;
use constants::CONFIG_FILE_NAME;
use input::keyboard::toggle_water_placer;
use tool::queue::{dispatch_queued_liquid_events, QueuedLiquidEvents};
use tool::{enter_water_placer, exit_water_placer, update_water_placer};
use ui::hud::{setup_tool_hud, update_tool_hud, ToolHudText};
use ui::radial_menu::{close_radial_menu, drive_radial_menu, RadialMenuState};

/// Which handheld tool is active.
#[derive(States, Clone, Copy, Default, Eq, PartialEq, Debug, Hash)]
pub enum ToolState {
    #[default]
    Inactive,
    WaterPlacer,
}

/// Marks the camera the tool aims with.
#[derive(Component, Debug, Default)]
pub struct ToolCamera;

/// Marks meshes the terrain ray cast may hit.
#[derive(Component, Debug, Default)]
pub struct Terrain;

pub struct WaterPlacerPlugin {
    pub config_folder: PathBuf,
}

impl WaterPlacerPlugin {
    pub fn new(config_folder: impl Into<PathBuf>) -> Self {
        Self {
            config_folder: config_folder.into(),
        }
    }
}

impl Plugin for WaterPlacerPlugin {
    fn build(&self, app: &mut App) {
        info!("Loading {} {}", MOD_NAME, MOD_VERSION);

        let config = load_config(&self.config_folder.join(CONFIG_FILE_NAME));

        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin {
                enable_multipass_for_primary_context: false,
            });
        }

        app.insert_resource(WaterPlacerTool::new(config.tool.free_place_distance))
            .insert_resource(config)
            .init_resource::<LiquidRegistry>()
            .init_resource::<QueuedLiquidEvents>()
            .init_resource::<ToolHudText>()
            .init_resource::<RadialMenuState>()
            .add_event::<LiquidEvent>()
            .add_plugins(PlacementAudioPlugin)
            .init_state::<ToolState>()
            .enable_state_scoped_entities::<ToolState>()
            .configure_sets(
                Update,
                (
                    WaterPlacerSet::Input,
                    WaterPlacerSet::Tool,
                    WaterPlacerSet::Dispatch,
                    WaterPlacerSet::Ui,
                )
                    .chain(),
            )
            .add_systems(
                OnEnter(ToolState::WaterPlacer),
                (enter_water_placer, setup_tool_hud).chain(),
            )
            .add_systems(
                OnExit(ToolState::WaterPlacer),
                (exit_water_placer, close_radial_menu),
            )
            .add_systems(Update, toggle_water_placer.in_set(WaterPlacerSet::Input))
            .add_systems(
                Update,
                (update_water_placer, drive_radial_menu)
                    .chain()
                    .in_set(WaterPlacerSet::Tool)
                    .run_if(in_state(ToolState::WaterPlacer)),
            )
            .add_systems(
                Update,
                dispatch_queued_liquid_events.in_set(WaterPlacerSet::Dispatch),
            )
            .add_systems(
                Update,
                update_tool_hud
                    .in_set(WaterPlacerSet::Ui)
                    .run_if(resource_changed::<ToolHudText>),
            );
    }
}
