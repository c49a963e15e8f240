pub mod constants;
pub mod liquids;
pub mod messages;
pub mod sets;
pub mod tool;

pub use constants::*;
pub use liquids::{LiquidIndex, LiquidRegistry, LiquidTemplate};
pub use messages::LiquidEvent;
pub use tool::{
    BoxEdit, BoxStep, FillMode, HandheldMode, HostAdapter, MenuOption, ToolAction,
    WaterPlacerTool,
};
