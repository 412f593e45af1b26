use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use halftone::assets::AssetLoader;
use halftone::models::{parse_channels, AppConfig, PresetConfig};
use halftone::services::{HalftoneService, RenderOptions};

#[derive(Parser)]
#[command(name = "halftone")]
#[command(about = "Print-style halftone and dither rendering for PNG images")]
struct Cli {
    /// Config file (overrides the CONFIG_FILE env var)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Halftone a PNG file
    Render {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Preset name from the config (default: the config's default_preset)
        #[arg(short, long)]
        preset: Option<String>,

        /// Screening strategy: "dot", "threshold" or "diffusion"
        #[arg(short, long)]
        strategy: Option<String>,

        /// Block edge in pixels (dot and threshold)
        #[arg(short, long)]
        block_size: Option<usize>,

        /// Color model: "direct" or "separated"
        #[arg(long)]
        color_model: Option<String>,

        /// Channels to screen as comma-separated indices (e.g. "0,2")
        #[arg(long)]
        channels: Option<String>,

        /// Error accumulation for diffusion: "wide" or "byte-wrap"
        #[arg(long)]
        accumulation: Option<String>,

        /// Skip oxipng re-compression of the output
        #[arg(long)]
        no_optimize: bool,
    },
    /// Write the default config.yaml for customization
    Init {
        /// Target path (default: CONFIG_FILE or ./config.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
    /// List the presets in the active config
    Presets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "halftone=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            preset,
            strategy,
            block_size,
            color_model,
            channels,
            accumulation,
            no_optimize,
        }) => {
            let channels = channels.as_deref().map(parse_channels).transpose()?;
            let options = RenderOptions {
                preset,
                overrides: PresetConfig {
                    strategy,
                    block_size,
                    color_model,
                    channels,
                    accumulation,
                },
                optimize: !no_optimize,
            };
            run_render_command(cli.config.as_deref(), &input, &output, &options)
        }
        Some(Commands::Init { output, force }) => run_init_command(output.as_deref(), force),
        Some(Commands::Presets) => run_presets_command(cli.config.as_deref()),
        None => {
            run_status_command(cli.config.as_deref());
            Ok(())
        }
    }
}

/// Config path from the CONFIG_FILE env var
fn env_config_file() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Load the active config
///
/// An explicit `--config` must load cleanly. A CONFIG_FILE path falls back
/// to the embedded defaults with a warning.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return AppConfig::load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display()));
    }

    let loader = AssetLoader::new(env_config_file());
    Ok(AppConfig::load_from_assets(&loader))
}

/// Halftone a PNG file
fn run_render_command(
    config_path: Option<&Path>,
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let service = HalftoneService::new(config);

    let report = service
        .render_file(input, output, options)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;

    println!(
        "Rendered {} ({}x{}, {} bytes)",
        output.display(),
        report.width,
        report.height,
        report.bytes
    );

    Ok(())
}

/// Write the embedded default config to the filesystem
fn run_init_command(output: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::new(env_config_file());
    let report = loader.init(output, force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        for f in &report.skipped {
            println!("  - {f}");
        }
        eprintln!("File exists (use --force to overwrite)");
        std::process::exit(1);
    }

    Ok(())
}

/// List presets from the active config
fn run_presets_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let default = config.default_preset.as_deref();

    for (name, preset) in &config.presets {
        let marker = if Some(name.as_str()) == default { "*" } else { " " };
        let mut parts = Vec::new();
        if let Some(ref s) = preset.strategy {
            parts.push(format!("strategy={s}"));
        }
        if let Some(size) = preset.block_size {
            parts.push(format!("block_size={size}"));
        }
        if let Some(ref model) = preset.color_model {
            parts.push(format!("color_model={model}"));
        }
        if let Some(ref channels) = preset.channels {
            let list: Vec<String> = channels.iter().map(|c| c.to_string()).collect();
            parts.push(format!("channels={}", list.join(",")));
        }
        if let Some(ref acc) = preset.accumulation {
            parts.push(format!("accumulation={acc}"));
        }
        println!("{marker} {name:<18} {}", parts.join(" "));
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = env_config_file();

    println!("Halftone v{VERSION}");
    println!("Print-style halftone and dither rendering for PNG images\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    let loader = AssetLoader::new(config_file);
    let config_source = match (config_path, loader.config_file()) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(path)) if loader.has_external_config() => path.display().to_string(),
        (None, Some(_)) => "embedded (file not found)".to_string(),
        (None, None) => "embedded".to_string(),
    };
    println!("\nConfig:  {config_source}");

    println!("\nRun 'halftone --help' for usage.");
}
