//! Folio - personal portfolio page in the terminal
//!
//! Browse the portfolio interactively, or export it as a static HTML page.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio::branding::{APP_BINARY_NAME, APP_DISPLAY_NAME};
use folio::config::{Config, ThemeMode};
use folio::page::PortfolioPage;
use folio::{content, html, logging, tui};
use std::path::PathBuf;

/// Folio - personal portfolio page in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Content file (TOML); defaults to the configured file or the built-in page
    #[arg(long, value_name = "FILE", global = true)]
    content: Option<PathBuf>,

    /// Theme override: auto, dark or light
    #[arg(long, value_name = "MODE", global = true)]
    theme: Option<ThemeMode>,

    /// Write a log file to the config directory
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the page in the terminal (default)
    Tui,
    /// Write the page as a standalone HTML file
    Export {
        /// Output file
        #[arg(value_name = "FILE", default_value = "index.html")]
        output: PathBuf,
    },
    /// Validate a content file and print a summary
    Check,
    /// Show the config file location and effective settings
    Config {
        /// Save a theme mode (auto, dark or light) to the config file
        #[arg(long, value_name = "MODE")]
        set_theme: Option<ThemeMode>,

        /// Save a default content file to the config file
        #[arg(long, value_name = "FILE")]
        set_content: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log {
        logging::init_file_logging(&logging::default_log_path()?)?;
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            eprintln!("Continuing with defaults.");
            eprintln!();
            Config::default()
        }
    };
    if let Some(mode) = cli.theme {
        config.ui.theme_mode = mode;
    }
    let content_path = cli.content.clone().or_else(|| config.content.path.clone());

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let content = content::load(content_path.as_deref())?;
            let page = PortfolioPage::new(content)?;

            let mut terminal = tui::setup_terminal()?;
            let mut app_state = tui::AppState::new(page, config);
            let result = tui::run_tui(&mut app_state, &mut terminal);
            tui::restore_terminal(terminal)?;
            result?;
        }
        Command::Export { output } => {
            let content = content::load(content_path.as_deref())?;
            let page = PortfolioPage::new(content)?;
            html::export(&page, &output)
                .with_context(|| format!("Failed to export page to {}", output.display()))?;
            println!("Wrote {}", output.display());
        }
        Command::Check => {
            let content = content::load(content_path.as_deref())?;
            match &content_path {
                Some(path) => println!("{}: OK", path.display()),
                None => println!("Built-in content: OK"),
            }
            for line in content::summary(&content) {
                println!("  {line}");
            }
        }
        Command::Config {
            set_theme,
            set_content,
        } => {
            if set_theme.is_some() || set_content.is_some() {
                let saved = update_config(set_theme, set_content)?;
                if cli.theme.is_none() {
                    config.ui.theme_mode = saved.ui.theme_mode;
                }
                config.content = saved.content;
            }
            println!("{} v{}", APP_DISPLAY_NAME, env!("CARGO_PKG_VERSION"));
            match Config::config_file_path() {
                Ok(path) if path.exists() => println!("Config file: {}", path.display()),
                Ok(path) => println!("Config file: {} (not created)", path.display()),
                Err(e) => println!("Config file: unavailable ({e})"),
            }
            print!(
                "{}",
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?
            );
            println!();
            println!("Run `{APP_BINARY_NAME} --help` for usage.");
        }
    }

    Ok(())
}

/// Applies `config --set-*` flags to the saved config file.
fn update_config(theme: Option<ThemeMode>, content: Option<PathBuf>) -> Result<Config> {
    let mut saved = Config::load()?;
    if let Some(mode) = theme {
        saved.ui.theme_mode = mode;
    }
    if let Some(path) = content {
        let path = path
            .canonicalize()
            .with_context(|| format!("Content file not found: {}", path.display()))?;
        content::load(Some(path.as_path()))?;
        saved.content.path = Some(path);
    }
    saved.save()?;
    println!("Saved {}", Config::config_file_path()?.display());
    Ok(saved)
}
