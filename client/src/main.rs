mod sandbox;

use bevy::{prelude::*, window::PresentMode};
use clap::Parser;
use waterplacer::WaterPlacerPlugin;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        default_value = "config",
        help = "Folder holding waterplacer.ron"
    )]
    config_folder: String,

    #[arg(long, help = "Half width of the flat test terrain, in cells")]
    terrain_radius: Option<i32>,
}

fn main() {
    let args = Args::parse();

    println!(
        "Starting water placer sandbox with config folder: {}",
        args.config_folder
    );

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            // Ensures that pixel-art textures will remain pixelated, and not become a blurry mess
            .set(ImagePlugin::default_nearest())
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Water Placer Sandbox".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
    );

    app.insert_resource(sandbox::SandboxSettings {
        terrain_radius: args
            .terrain_radius
            .unwrap_or(sandbox::DEFAULT_TERRAIN_RADIUS),
    })
    .add_plugins(WaterPlacerPlugin::new(args.config_folder))
    .add_plugins(sandbox::sandbox_plugin)
    .run();
}
