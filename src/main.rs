mod config;
mod output;
mod script;
mod services;

use std::path::PathBuf;

use canvas::consts::SURFACE_SIZE;
use canvas::engine::{EngineConfig, EngineCore, MaskEditor};
use canvas::error::CanvasError;
use canvas::export::{ExportOptions, encode_png};
use canvas::palette::Palette;
use canvas::theme::{Theme, ThemeKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use time::OffsetDateTime;

use crate::config::{ConfigError, GenerateConfig};
use crate::script::ScriptError;
use crate::services::generate::{GenerateClient, GenerateError, result_file_name};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("export failed: {0}")]
    Canvas(#[from] CanvasError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("timestamp format failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

#[derive(Parser, Debug)]
#[command(name = "maskpaint", about = "Segmentation mask painter: replay, export, generate")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture script, then export the painted mask.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// JSON gesture script.
    script: PathBuf,

    #[arg(long, env = "MASKPAINT_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Surface side length in pixels.
    #[arg(long, env = "MASKPAINT_SURFACE_SIZE", default_value_t = SURFACE_SIZE)]
    size: u32,

    /// Undo history depth. Each entry is a full surface copy.
    #[arg(long, env = "MASKPAINT_HISTORY", default_value_t = 10)]
    history: usize,

    #[arg(long, env = "MASKPAINT_THEME", value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Padding around the painted bounds in the exported crop.
    #[arg(long, default_value_t = canvas::consts::EXPORT_MARGIN_PX)]
    margin: u32,

    /// Also write a PNG of the final viewport (grid included).
    #[arg(long)]
    preview: bool,

    /// Upload the export to the generation service (`MASKPAINT_GENERATE_URL`).
    #[arg(long)]
    generate: bool,

    /// Endpoint override for `--generate`; default timeouts apply.
    #[arg(long, requires = "generate")]
    generate_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeKind {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeKind::Dark,
            ThemeArg::Light => ThemeKind::Light,
        }
    }
}

/// Preview size used when the script never declares a viewport.
const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 800.0);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay(args) => run_replay(args).await,
    }
}

async fn run_replay(args: ReplayArgs) -> Result<(), AppError> {
    // Resolve service config before painting so a bad env fails fast.
    let generate = if args.generate {
        let config = match &args.generate_url {
            Some(url) => GenerateConfig::new(url.as_str()),
            None => GenerateConfig::from_env()?,
        };
        Some(GenerateClient::new(&config)?)
    } else {
        None
    };

    let events = script::load(&args.script).await?;
    let mut engine = EngineCore::with_config(EngineConfig {
        surface_size: args.size,
        history_capacity: args.history,
        theme: Theme::from_kind(args.theme.into()),
        palette: Palette::default(),
    });
    let summary = script::replay(&mut engine, &events)?;
    tracing::info!(
        events = summary.events,
        fills = summary.fills,
        undos = summary.undos,
        redos = summary.redos,
        "replay complete"
    );

    let stamp = output::timestamp(OffsetDateTime::now_utc())?;
    let crop = engine.export(ExportOptions { margin_px: args.margin, ..ExportOptions::default() })?;
    let mask_name = crop.file_name(&stamp);
    let png = crop.encode_png()?;
    let path = output::write_file(&args.out_dir, &mask_name, &png).await?;
    println!("{}", path.display());

    if args.preview {
        if engine.viewport_width <= 0.0 || engine.viewport_height <= 0.0 {
            (engine.viewport_width, engine.viewport_height) = FALLBACK_VIEWPORT;
        }
        let view = encode_png(&engine.render())?;
        let path = output::write_file(&args.out_dir, &output::preview_file_name(&stamp), &view).await?;
        println!("{}", path.display());
    }

    if let Some(client) = generate {
        let result = client.generate(crop).await?;
        if let Some(input) = &result.input {
            tracing::debug!(bytes = input.len(), "service echoed input mask");
        }
        let path = output::write_file(&args.out_dir, &result_file_name(&stamp), &result.image).await?;
        println!("{}", path.display());
    }

    Ok(())
}
