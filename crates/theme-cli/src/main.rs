//! Theme Config CLI
//!
//! Builds the application's theme configuration at startup and prints it
//! for the frontend build to consume.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use theme_core::{
    BreakpointTable, ConfigurationError, LogoMarkup, ThemeConfigBuilder, ThemeOverrides,
};
use tracing_subscriber::EnvFilter;

mod output;

/// theme-config - print the theme and layout configuration
///
/// The overlay navigation threshold is derived from the `md` breakpoint.
#[derive(Parser, Debug)]
#[command(name = "theme-config")]
#[command(version, about, long_about = None)]
struct Args {
    /// Breakpoint preset the table starts from
    #[arg(short, long, default_value = "v2")]
    preset: Preset,

    /// Breakpoint entries merged over the preset, e.g. "md=1024,lg=1400"
    #[arg(short, long, env = "THEME_BREAKPOINTS")]
    breakpoints: Option<String>,

    /// JSON overrides file (defaults to the user config directory if present)
    #[arg(short, long, env = "THEME_OVERRIDES")]
    overrides: Option<PathBuf>,

    /// File holding raw logo markup (HTML or SVG)
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Print only the part of the configuration the layout engine reads
    #[arg(long)]
    layout: bool,

    /// Also print the rendered markup of every icon role
    #[arg(long)]
    render_icons: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum Preset {
    /// Vuetify 2 breakpoints (md = 960)
    V2,
    /// Vuetify 3 breakpoints (md = 960, xxl = 2560)
    V3,
    /// Start from an empty table
    None,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn breakpoint_table(args: &Args) -> Result<BreakpointTable, ConfigurationError> {
    let mut table = match args.preset {
        Preset::V2 => BreakpointTable::vuetify_v2(),
        Preset::V3 => BreakpointTable::vuetify_v3(),
        Preset::None => BreakpointTable::new(),
    };

    if let Some(entries) = &args.breakpoints {
        table.merge(&entries.parse()?);
    }
    Ok(table)
}

fn load_overrides(args: &Args) -> Result<Option<ThemeOverrides>, ConfigurationError> {
    match &args.overrides {
        Some(path) => ThemeOverrides::load(path).map(Some),
        None => ThemeOverrides::load_optional(&ThemeOverrides::default_path()),
    }
}

fn run(args: &Args) -> Result<String, ConfigurationError> {
    let table = breakpoint_table(args)?;
    tracing::debug!("Breakpoints: {}", table);

    let mut builder = ThemeConfigBuilder::new(table);

    if let Some(path) = &args.logo {
        let markup = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::IoError(format!("Failed to read {}: {e}", path.display()))
        })?;
        builder = builder.logo(LogoMarkup::from_raw(markup.trim()));
    }

    if let Some(overrides) = load_overrides(args)? {
        builder = builder.overrides(&overrides)?;
    }

    let config = builder.build()?;

    match args.format {
        OutputFormat::Json => output::json(&config, args.layout, args.render_icons),
        OutputFormat::Text => Ok(output::text(&config, args.layout, args.render_icons)),
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
