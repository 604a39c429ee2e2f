#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use bentobio_core::{defaults::default_page, logging, Breakpoint, GridLayout, PageConfig};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Page being shown, set once at startup
static PAGE: OnceLock<PageConfig> = OnceLock::new();

/// Get the page config (loaded from disk or the built-in default)
pub fn get_page() -> PageConfig {
    PAGE.get().cloned().unwrap_or_else(default_page)
}

/// Bento Bio - link-in-bio card grid
#[derive(Parser, Debug)]
#[command(name = "bentobio-desktop")]
#[command(about = "Bento-style link-in-bio page as a desktop window")]
struct Args {
    /// Page definition (.toml or .json). Defaults to <config dir>/bentobio/profile.toml
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Tracing filter, overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,

    /// Validate the page, print its grid layout and exit
    #[arg(long)]
    check: bool,

    /// Window width in logical pixels; also picks the layout printed by --check
    #[arg(short, long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Page file used when `--profile` is not given.
fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bentobio").join("profile.toml"))
}

/// Load an explicit profile, else the default profile file if present,
/// else the built-in page.
fn resolve_page(explicit: Option<&Path>) -> Result<PageConfig> {
    if let Some(path) = explicit {
        return PageConfig::load(path)
            .with_context(|| format!("Failed to load page from {}", path.display()));
    }

    match default_profile_path() {
        Some(path) if path.exists() => PageConfig::load(&path)
            .with_context(|| format!("Failed to load page from {}", path.display())),
        _ => {
            tracing::info!("No profile file found, using the built-in page");
            Ok(default_page())
        }
    }
}

fn print_check(page: &PageConfig, width: f64) {
    let breakpoint = Breakpoint::for_width(width);
    let layout = GridLayout::for_cards(&page.cards, breakpoint);

    println!("Page OK: {}", page.profile.display_name);
    println!("{} cards", page.cards.len());
    for (index, card) in page.cards.iter().enumerate() {
        println!(
            "  {index}: {:<12} {:<24} {}",
            card.content.kind().as_str(),
            card.content.title(),
            card.destination.as_deref().unwrap_or("(no destination)"),
        );
    }
    println!(
        "Layout at {width}px ({breakpoint}, {} columns):",
        breakpoint.columns()
    );
    println!("{}", layout.ascii());
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_filter.as_deref());

    let page = resolve_page(args.profile.as_deref())?;

    if args.check {
        print_check(&page, args.width);
        return Ok(());
    }

    let title = format!("{} - Bento Bio", page.profile.display_name);
    tracing::info!(cards = page.cards.len(), "Starting '{}'", page.profile.display_name);

    // Store the page globally
    let _ = PAGE.set(page);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
