use super::{FillMode, HostAdapter, ToolAction};

pub const TOOL_TITLE: &str = "Water Placer";

pub fn help_text(host: &dyn HostAdapter, free_place: bool) -> String {
    format!(
        "Press {} to place water.\nPress {} to flood fill an area.\nPress {} to {} free place mode.",
        host.hotkey_label(ToolAction::Action),
        host.hotkey_label(ToolAction::AlternateAction),
        host.hotkey_label(ToolAction::ToggleBuildMode),
        if free_place { "disable" } else { "enable" },
    )
}

pub fn tablet_title(mode: FillMode, free_place: bool) -> String {
    let targeting = if free_place { "Free" } else { "Terrain" };
    format!("{TOOL_TITLE} - {} - {targeting}", mode.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tablet_title_names_mode_and_targeting() {
        assert_eq!(
            tablet_title(FillMode::Flood, false),
            "Water Placer - Flood Fill Mode - Terrain"
        );
        assert_eq!(
            tablet_title(FillMode::Box, true),
            "Water Placer - Box Mode - Free"
        );
    }
}
