mod commands;
mod core;
mod notify;
mod utils;

use clap::{Parser, Subcommand};
use crate::core::error::{SyncError, print_error};
use std::path::PathBuf;

/// Sync the newest changelog entry into a release-notes document
#[derive(Parser)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Merge the newest changelog entry into the release notes document
  Sync {
    /// Path to the source changelog (default: ./CHANGELOG.md)
    #[arg(long, env = "RELNOTES_SOURCE")]
    source: Option<PathBuf>,
    /// Webhook URL for the post-sync summary notification
    #[arg(long, env = "RELNOTES_WEBHOOK")]
    notify_url: Option<String>,
    /// Show what would happen without writing the destination
    #[arg(long)]
    dry_run: bool,
    /// Output the sync outcome in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Print the newest version entry from the changelog
  Extract {
    /// Path to the source changelog (default: ./CHANGELOG.md)
    #[arg(long, env = "RELNOTES_SOURCE")]
    source: Option<PathBuf>,
    /// Output the entry in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Sync {
      source,
      notify_url,
      dry_run,
      json,
    } => commands::run_sync(source, notify_url, dry_run, json),
    Commands::Extract { source, json } => commands::run_extract(source, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: SyncError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
