use clap::{Args, Parser, Subcommand};
use release_status::commands::{self, update::UpdateMode};
use release_status::core::config::StatusConfig;
use release_status::core::error::{StatusError, print_error};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Regenerate the package status table in a README from release records
#[derive(Parser)]
#[command(name = "release-status")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(flatten)]
  inputs: InputArgs,

  /// Enable debug logging (RUST_LOG takes precedence)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Args)]
struct InputArgs {
  /// JSON array of release records
  #[arg(long, global = true, default_value = "releases.json")]
  releases: PathBuf,
  /// JSON object or array naming the active binaries
  #[arg(long, global = true, default_value = "current_packages.json")]
  current_packages: PathBuf,
  /// Document holding the status table
  #[arg(long, global = true, default_value = "README.md")]
  readme: PathBuf,
  /// `owner/repo` for download links (default: $GITHUB_REPOSITORY)
  #[arg(long, global = true)]
  repository: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
  /// Regenerate the status table inside the README (default)
  Update {
    /// Show what would change without writing
    #[arg(long, conflicts_with = "check")]
    dry_run: bool,
    /// Fail if the README is out of date (for CI)
    #[arg(long)]
    check: bool,
  },

  /// Print the status table without touching the README
  Render {
    /// Output rows in JSON format
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
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Logs go to stderr so `render` output stays clean on stdout
fn init_logging(verbose: bool) {
  let default_directive = if verbose { "release_status=debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false),
    )
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let config = StatusConfig::from_env()
    .with_releases(cli.inputs.releases)
    .with_current_packages(cli.inputs.current_packages)
    .with_readme(cli.inputs.readme)
    .with_repository(cli.inputs.repository);

  let result = match cli.command.unwrap_or(Commands::Update {
    dry_run: false,
    check: false,
  }) {
    Commands::Update { dry_run, check } => {
      let mode = if check {
        UpdateMode::Check
      } else if dry_run {
        UpdateMode::DryRun
      } else {
        UpdateMode::Write
      };
      commands::run_update(&config, mode)
    }
    Commands::Render { json } => commands::run_render(&config, json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: StatusError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
