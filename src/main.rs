use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epd_pipeline::ProcessOptions;
use photoframe::job;

#[derive(Parser)]
#[command(name = "photoframe")]
#[command(about = "PhotoFrame image processor - convert JPEG photos to 7-color e-paper BMPs")]
struct Cli {
    /// Input JPEG image
    input: PathBuf,

    /// Output directory for the BMP and preview artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Brightness adjustment in photographic stops
    #[arg(short, long, default_value_t = 0.0)]
    brightness: f32,

    /// Contrast multiplier
    #[arg(short, long, default_value_t = 1.1)]
    contrast: f32,

    /// Quantize against the nominal palette instead of measured panel colors
    #[arg(long)]
    no_measured_palette: bool,

    /// Render the BMP with measured panel colors (darker, panel-accurate preview)
    #[arg(long)]
    render_measured: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photoframe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let options = ProcessOptions {
        brightness_stops: cli.brightness,
        contrast: cli.contrast,
        measured_quantization: !cli.no_measured_palette,
        measured_output: cli.render_measured,
    };

    let outputs = job::process_file(&cli.input, &cli.output_dir, &options)?;
    println!(
        "Wrote {} and {}",
        outputs.bmp.display(),
        outputs.preview.display()
    );

    Ok(())
}
