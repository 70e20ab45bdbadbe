mod area_cmd;
mod demo_cmd;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "planar", about = "Validated 2D shapes with auto-recalculated areas")]
struct Cli {
    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the demo shape list, print each shape polymorphically, then
    /// run the dimension-doubling walkthrough
    Demo,
    /// Construct a single shape and report its area
    Area {
        #[command(subcommand)]
        shape: AreaCommands,
    },
}

#[derive(Subcommand)]
pub enum AreaCommands {
    /// Area of a circle
    Circle {
        /// Radius (must be > 0)
        radius: f64,
        /// Center x coordinate
        #[arg(long, default_value_t = 0.0)]
        x: f64,
        /// Center y coordinate
        #[arg(long, default_value_t = 0.0)]
        y: f64,
        /// Shape name
        #[arg(long, default_value = "Circle")]
        name: String,
    },
    /// Area of a rectangle
    Rectangle {
        /// Length (must be > 0)
        length: f64,
        /// Width (must be > 0)
        width: f64,
        /// Shape name
        #[arg(long, default_value = "Rectangle")]
        name: String,
    },
    /// Area of a square
    Square {
        /// Side (must be > 0)
        side: f64,
        /// Shape name
        #[arg(long, default_value = "Square")]
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => demo_cmd::run_demo(cli.json)?,
        Commands::Area { shape } => area_cmd::run_area(shape, cli.json)?,
    }

    Ok(())
}
