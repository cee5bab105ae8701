//! mdreport CLI - markdown to PDF report tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdreport::render::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use mdreport::{classify_document, convert_file, source, to_json, JsonFormat, RenderStats, ReportOptions};

#[derive(Parser)]
#[command(name = "mdreport")]
#[command(version)]
#[command(about = "Render markdown documents into paginated PDF reports", long_about = None)]
struct Cli {
    /// Input markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON options file (header title, title page, metadata)
    #[arg(short, long, value_name = "FILE", env = "MDREPORT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markdown to a PDF report
    Convert {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// JSON options file
        #[arg(short, long, value_name = "FILE", env = "MDREPORT_CONFIG")]
        config: Option<PathBuf>,

        /// Header text on every page after the first
        #[arg(long)]
        header_title: Option<String>,

        /// Print render statistics
        #[arg(long)]
        stats: bool,
    },

    /// Print the classified blocks as JSON
    Blocks {
        /// Input markdown file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// JSON options file
        #[arg(short, long, value_name = "FILE", env = "MDREPORT_CONFIG")]
        config: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the default options as JSON
    Options,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            config,
            header_title,
            stats,
        }) => cmd_convert(
            input.as_deref(),
            output.as_deref(),
            config.as_deref(),
            header_title,
            stats,
        ),
        Some(Commands::Blocks {
            input,
            output,
            config,
            compact,
        }) => cmd_blocks(input.as_deref(), output.as_deref(), config.as_deref(), compact),
        Some(Commands::Options) => cmd_options(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Without a subcommand, convert using the positional paths or defaults
        None => cmd_convert(
            cli.input.as_deref(),
            cli.output.as_deref(),
            cli.config.as_deref(),
            None,
            false,
        ),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Options from the config file (or defaults), with command-line paths on top.
fn load_options(
    input: Option<&Path>,
    output: Option<&Path>,
    config: Option<&Path>,
) -> mdreport::Result<ReportOptions> {
    let mut options = match config {
        Some(path) => ReportOptions::from_json_file(path)?,
        None => ReportOptions::default(),
    };
    if let Some(path) = input {
        options = options.with_input(path);
    }
    if let Some(path) = output {
        options = options.with_output(path);
    }
    Ok(options)
}

fn cmd_convert(
    input: Option<&Path>,
    output: Option<&Path>,
    config: Option<&Path>,
    header_title: Option<String>,
    show_stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = load_options(input, output, config)?;
    if let Some(title) = header_title {
        options = options.with_header_title(title);
    }

    let stats = convert_file(&options.input_path, &options.output_path, &options)?;

    println!("PDF created successfully: {}", options.output_path.display());

    if show_stats {
        print_stats(&stats);
    }

    Ok(())
}

fn print_stats(stats: &RenderStats) {
    println!();
    println!("{}", "Render Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Skipped".bold(), stats.skipped_lines);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Bold lines".bold(), stats.bold_line_count);
    println!("{}: {}", "Table rows".bold(), stats.table_row_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Pages".bold(), stats.page_count);
}

fn cmd_blocks(
    input: Option<&Path>,
    output: Option<&Path>,
    config: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = load_options(input, None, config)?;
    let data = fs::read(&options.input_path)?;
    let text = source::decode_text(&data)?;
    let blocks = classify_document(text, &options);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = to_json(&blocks, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_options() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&ReportOptions::default())?;
    println!("{}", json);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdreport".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to PDF report tool");
    println!();
    println!("Default input: {}", DEFAULT_INPUT_PATH.dimmed());
    println!("Default output: {}", DEFAULT_OUTPUT_PATH.dimmed());
    println!("License: MIT");
}
