pub mod host;
pub mod queue;

use bevy::prelude::*;
use shared::{HandheldMode, WaterPlacerTool};

use host::ToolHost;

pub fn enter_water_placer(mut tool: ResMut<WaterPlacerTool>, mut host: ToolHost) {
    tool.enter(&mut host);
}

pub fn exit_water_placer(mut tool: ResMut<WaterPlacerTool>, mut host: ToolHost) {
    tool.exit(&mut host);
}

pub fn update_water_placer(mut tool: ResMut<WaterPlacerTool>, mut host: ToolHost) {
    tool.update_behavior(&mut host);
}
