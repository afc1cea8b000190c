use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use itertools::Itertools;
use miette::Result;

use codeshot::Converter;
use codeshot::config::{
    self, FontSetting, PartialConfig, PartialHighlight, PartialLineNumbers, PartialStyle,
};
use codeshot::highlight::SyntectEngine;

/// Compile source code into a rasterization-ready render plan
#[derive(Parser)]
#[command(name = "codeshot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to render; `-` or absent reads stdin
    file: Option<String>,

    /// Language grammar (defaults to the file extension, then "js")
    #[arg(short, long)]
    lang: Option<String>,

    /// Color theme
    #[arg(short, long)]
    theme: Option<String>,

    /// Font URL or filesystem path handed to the rasterizer
    #[arg(long)]
    font: Option<String>,

    /// Font size multiplier
    #[arg(long)]
    font_ratio: Option<String>,

    /// Output format: png, jpeg, webp or avif
    #[arg(short, long)]
    format: Option<String>,

    /// Encoder quality, 1-100
    #[arg(short, long)]
    quality: Option<String>,

    /// Canvas background color; 0 or null derives it from the theme
    #[arg(long)]
    bg: Option<String>,

    /// Line spacing multiplier
    #[arg(long)]
    gap: Option<String>,

    /// Padding around the code, in pixels
    #[arg(long)]
    padding: Option<String>,

    /// Corner radius of the outer frame, in pixels
    #[arg(long)]
    border_radius: Option<String>,

    /// Show the line number gutter
    #[arg(long)]
    line_numbers: bool,

    /// First displayed line number
    #[arg(long)]
    start_from: Option<String>,

    /// 1-based line to highlight
    #[arg(long)]
    highlight_at: Option<String>,

    /// Canvas width in pixels; 0 or null auto-computes
    #[arg(long)]
    width: Option<String>,

    /// Canvas height in pixels; 0 or null auto-computes
    #[arg(long)]
    height: Option<String>,

    /// Write the render plan JSON here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Config file path (default: the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize default configuration file
    InitConfig,
    /// List available syntax highlighting themes
    ListThemes,
    /// List available language grammars
    ListLanguages,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        match command {
            Commands::InitConfig => return init_config(),
            Commands::ListThemes => return list_themes(),
            Commands::ListLanguages => return list_languages(),
        }
    }

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let code = read_input(cli.file.as_deref())?;

    let file_config = match &cli.config {
        Some(path) => PartialConfig::load_from_file(path)?,
        None => {
            let path = PartialConfig::default_config_path();
            if path.exists() {
                PartialConfig::load_from_file(&path)?
            } else {
                PartialConfig::default()
            }
        }
    };
    let partial = file_config.overlay(partial_from_flags(&cli));

    let converter = Converter::new();
    let plan = converter
        .plan(&code, &partial)
        .await
        .map_err(|e| miette::miette!("Failed to build render plan: {}", e))?;

    let json = serde_json::to_string_pretty(&plan)
        .map_err(|e| miette::miette!("Failed to serialize render plan: {}", e))?;

    match &cli.out {
        Some(path) => std::fs::write(path, json)
            .map_err(|e| miette::miette!("Failed to write {}: {}", path.display(), e))?,
        None => println!("{json}"),
    }

    Ok(())
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path, e)),
        _ => std::io::read_to_string(std::io::stdin())
            .map_err(|e| miette::miette!("Failed to read stdin: {}", e)),
    }
}

/// Map CLI flags onto a sparse configuration. Everything numeric arrives as
/// text and goes through the same lenient parsing as the HTTP path.
fn partial_from_flags(cli: &Cli) -> PartialConfig {
    let lang = cli.lang.clone().or_else(|| {
        cli.file
            .as_deref()
            .filter(|file| *file != "-")
            .and_then(|file| Path::new(file).extension())
            .map(|ext| ext.to_string_lossy().to_string())
    });

    let style = if cli.padding.is_some() || cli.border_radius.is_some() {
        Some(PartialStyle {
            padding: cli.padding.as_deref().and_then(config::lenient_number),
            border_radius: cli
                .border_radius
                .as_deref()
                .and_then(config::lenient_number),
        })
    } else {
        None
    };

    let line_numbers = if cli.line_numbers || cli.start_from.is_some() {
        Some(PartialLineNumbers {
            enabled: cli.line_numbers.then_some(true),
            start_from: cli.start_from.as_deref().and_then(config::lenient_number),
            ..Default::default()
        })
    } else {
        None
    };

    let highlight = cli
        .highlight_at
        .as_deref()
        .and_then(config::lenient_number)
        .map(|at| PartialHighlight {
            enabled: Some(true),
            at: Some(at),
            ..Default::default()
        });

    PartialConfig {
        lang,
        theme: cli.theme.clone(),
        font: cli.font.clone().map(FontSetting::Source),
        font_ratio: cli.font_ratio.as_deref().and_then(config::lenient_number),
        format: cli.format.clone(),
        quality: cli.quality.as_deref().and_then(config::lenient_number),
        bg: cli.bg.clone(),
        gap: cli.gap.as_deref().and_then(config::lenient_number),
        style,
        line_numbers,
        highlight,
        width: cli.width.as_deref().and_then(config::lenient_number),
        height: cli.height.as_deref().and_then(config::lenient_number),
    }
}

/// Initialize default configuration file
fn init_config() -> Result<()> {
    let config = codeshot::ResolvedConfig::default().as_partial();
    let config_path = PartialConfig::default_config_path();

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| miette::miette!("Failed to create config directory: {}", e))?;
    }

    if config_path.exists() {
        eprintln!("Config file already exists at: {}", config_path.display());
        eprintln!("Remove it first or edit it manually.");
        return Ok(());
    }

    config.save_to_file(&config_path)?;
    println!(
        "Created default config file at: {}\n\n\
         Every option in it can also be passed as a flag; flags win over the\n\
         config file.",
        config_path.display()
    );

    Ok(())
}

/// List available syntax highlighting themes
fn list_themes() -> Result<()> {
    let engine = SyntectEngine::new();
    let theme_list = engine
        .theme_names()
        .iter()
        .enumerate()
        .map(|(i, theme)| format!("  {}. {}", i + 1, theme))
        .join("\n");

    println!(
        "Available syntax highlighting themes:\n\n\
         {}\n\n\
         To use a theme, pass --theme or add this to your config file:\n\
         theme = \"dracula\"\n\n\
         Config file location: {}",
        theme_list,
        PartialConfig::default_config_path().display()
    );

    Ok(())
}

/// List available language grammars
fn list_languages() -> Result<()> {
    let engine = SyntectEngine::new();
    let language_list = engine
        .language_names()
        .iter()
        .enumerate()
        .map(|(i, language)| format!("  {}. {}", i + 1, language))
        .join("\n");

    println!(
        "Available language grammars:\n\n\
         {}\n\n\
         Pass --lang with a grammar name or file extension token.",
        language_list
    );

    Ok(())
}
