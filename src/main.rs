use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordfinder::config::{default_config_path, find_config_file, load_config, Settings};
use wordfinder::models::{SearchOutcome, SearchRequest};
use wordfinder::search::SearchAggregator;
use wordfinder::ui::{self, Status};
use wordfinder::utils::{copy_to_clipboard, export_match};

/// wordfinder - Search Word documents and web pages for a word, phrase or pattern
#[derive(Parser, Debug)]
#[command(name = "wordfinder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search a folder of Word documents and a web page for a word or phrase", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Web request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format, one match per line
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search documents in a folder and/or a web page
    #[command(alias = "s")]
    Search {
        /// Word, phrase or regular expression (case-insensitive).
        ///
        /// Uses Rust `regex` syntax: no look-around and no backreferences.
        pattern: String,

        /// Folder whose documents are searched (not recursive)
        #[arg(long, short)]
        folder: Option<PathBuf>,

        /// Web page whose text is searched
        #[arg(long, short)]
        url: Option<String>,

        /// Treat the pattern as literal text instead of a regular expression
        #[arg(long, short)]
        literal: bool,

        /// Document extension to scan (default from config: docx)
        #[arg(long, short)]
        extension: Option<String>,

        /// Keep script and style text when searching a web page
        #[arg(long)]
        keep_hidden: bool,

        /// Result to copy or export (1-based, as listed)
        #[arg(long, short, default_value_t = 1)]
        select: usize,

        /// Copy the selected result to the clipboard
        #[arg(long, short)]
        copy: bool,

        /// Export the selected result to a text file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write (default: user config directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    let mut settings = load_config(config_path.as_deref())?;

    init_tracing(&cli, &settings);

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }
    if let Some(timeout) = cli.timeout {
        settings.web.timeout_seconds = timeout;
    }

    match cli.command {
        Some(Commands::Search {
            pattern,
            folder,
            url,
            literal,
            extension,
            keep_hidden,
            select,
            copy,
            export,
        }) => {
            if let Some(ext) = extension {
                settings.search.extension = ext;
            }
            if keep_hidden {
                settings.web.skip_hidden_elements = false;
            }

            let mut request = SearchRequest::new(pattern).literal(literal);
            if let Some(folder) = folder {
                request = request.folder(folder);
            }
            if let Some(url) = url {
                request = request.url(url);
            }

            let aggregator = SearchAggregator::from_settings(&settings)?;
            let started = Instant::now();
            let outcome = aggregator.run_search(&request).await?;

            if !cli.quiet {
                for failure in &outcome.failures {
                    ui::print_source_warning(&failure.source, &failure.to_string());
                }
            }

            if outcome.is_empty() {
                if !cli.quiet {
                    ui::print_status(Status::Info, "No matches found.");
                }
                if resolve_format(cli.output) == OutputFormat::Json {
                    output_matches(&outcome, cli.output)?;
                }
                return Ok(());
            }

            let format = resolve_format(cli.output);
            if format == OutputFormat::Table && !cli.quiet {
                ui::print_search_header(&request.pattern, outcome.len(), started.elapsed());
            }
            output_matches(&outcome, format)?;

            if copy || export.is_some() {
                let selected = outcome.selected(select).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Selection {} is out of range (1-{})",
                        select,
                        outcome.len()
                    )
                })?;

                if copy {
                    copy_to_clipboard(selected)?;
                    if !cli.quiet {
                        ui::print_status(Status::Success, "Selected result copied to clipboard.");
                    }
                }

                if let Some(path) = export {
                    export_match(&path, selected)?;
                    if !cli.quiet {
                        ui::print_status(
                            Status::Success,
                            &format!("Search result exported to {}", path.display()),
                        );
                    }
                }
            }
        }

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                print!("{}", settings.to_toml()?);
            }
            ConfigCommands::Init { path, force } => {
                let path = path
                    .or_else(default_config_path)
                    .ok_or_else(|| anyhow::anyhow!("No config directory found; use --path"))?;
                Settings::default().save(&path, force)?;
                if !cli.quiet {
                    ui::print_status(
                        Status::Success,
                        &format!("Wrote default configuration to {}", path.display()),
                    );
                }
            }
        },

        None => {
            println!("wordfinder v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help to see available commands.");
            println!();
            println!("Quick start:");
            println!("  search <pattern> --folder <dir>    - Search Word documents in a folder");
            println!("  search <pattern> --url <url>       - Search the text of a web page");
            println!("  config init                        - Write a default config file");
        }
    }

    Ok(())
}

/// Initialize tracing based on verbosity, config and `RUST_LOG`
fn init_tracing(cli: &Cli, settings: &Settings) {
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => settings.logging.level.as_str(),
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("wordfinder={}", log_level)),
    );

    let json = settings.logging.is_json();
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn resolve_format(format: OutputFormat) -> OutputFormat {
    if format == OutputFormat::Auto {
        if ui::is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    }
}

fn output_matches(outcome: &SearchOutcome, format: OutputFormat) -> Result<()> {
    match resolve_format(format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
        OutputFormat::Plain => {
            for m in &outcome.matches {
                println!("{}", m);
            }
        }
        OutputFormat::Table => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["#", "Match"]);

            for (i, m) in outcome.matches.iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(ui::single_line(m)).add_attribute(Attribute::Bold),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }
    Ok(())
}
