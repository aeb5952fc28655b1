use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use doodlepad::{Config, replay};

#[derive(Parser, Debug)]
#[command(name = "doodlepad")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DOODLEPAD_GIT_HASH"), ")"))]
#[command(about = "Freehand doodle surface with DPR-aware rendering and pointer replay")]
struct Cli {
    /// Replay a recorded pointer-event script (JSON)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the replayed surface to this PNG file
    #[arg(long, short = 'o', value_name = "FILE", requires = "script")]
    output: Option<PathBuf>,

    /// Override the script's device pixel ratio
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    if let Some(script_path) = cli.script {
        let mut script = replay::Script::load(&script_path)?;
        if let Some(scale) = cli.scale {
            script.scale = Some(scale);
        }

        let pad = replay::replay(&script, &config)?;

        if let Some(output) = cli.output {
            pad.write_png(&output)?;
            log::info!("Wrote {}", output.display());
            println!("Wrote {}", output.display());
        } else if let Some(surface) = pad.surface() {
            println!(
                "Replayed {} events on a {:.0}x{:.0} surface ({}x{} pixels @ {:.2}x)",
                script.events.len(),
                surface.logical_width(),
                surface.logical_height(),
                surface.physical_width(),
                surface.physical_height(),
                surface.scale()
            );
        }
    } else {
        // No flags: show usage
        println!("doodlepad: freehand doodle surface with pointer replay");
        println!();
        println!("Usage:");
        println!("  doodlepad --script sketch.json --output sketch.png");
        println!("  doodlepad --script sketch.json            Replay and report stats");
        println!("  doodlepad --help                          Show help");
        println!();
        println!("Scripts are JSON event recordings:");
        println!("  {{");
        println!("    \"width\": 400, \"height\": 300, \"scale\": 2.0,");
        println!("    \"events\": [");
        println!("      {{\"op\": \"set-color\", \"color\": \"teal\"}},");
        println!(
            "      {{\"op\": \"pointer-down\", \"event\": {{\"kind\": \"mouse\", \"client_x\": 10, \"client_y\": 10}}}},"
        );
        println!(
            "      {{\"op\": \"pointer-move\", \"event\": {{\"kind\": \"mouse\", \"client_x\": 60, \"client_y\": 40}}}},"
        );
        println!("      {{\"op\": \"pointer-up\"}}");
        println!("    ]");
        println!("  }}");
        println!();
        println!("Config: ~/.config/doodlepad/config.toml (drawing defaults, background)");
    }

    Ok(())
}
