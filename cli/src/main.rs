//! markdoc CLI - clean generated markdown and convert it to document JSON

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

use markdoc::{CleanOptions, CleanPipeline, JsonFormat, Markdoc};

#[derive(Parser)]
#[command(name = "markdoc")]
#[command(version)]
#[command(about = "Clean AI-generated markdown and convert it to a document model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean generated markdown (version markers, separators, duplicated halves)
    Clean {
        /// Input file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Keep a duplicated back half instead of collapsing it
        #[arg(long)]
        keep_duplicates: bool,

        /// Keep OneNote/Word version marker lines
        #[arg(long)]
        keep_version_markers: bool,

        /// Keep --- / === separator rules
        #[arg(long)]
        keep_separators: bool,
    },

    /// Clean and convert to document-model JSON
    Json {
        /// Input file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Convert the input as-is, without cleaning
        #[arg(long)]
        raw: bool,
    },

    /// Clean and render the loose plain-text view
    Plain {
        /// Input file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show a block-count summary of the converted document
    Info {
        /// Input file ("-" or omitted reads stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> markdoc::Result<()> {
    match cli.command {
        Commands::Clean {
            input,
            output,
            keep_duplicates,
            keep_version_markers,
            keep_separators,
        } => {
            let text = read_input(input.as_deref())?;
            let options = CleanOptions {
                strip_version_markers: !keep_version_markers,
                strip_separators: !keep_separators,
                preserve_title: true,
                collapse_duplicates: !keep_duplicates,
            };
            let cleaned = CleanPipeline::new(options).process(&text);
            write_output(output.as_deref(), &cleaned)
        }

        Commands::Json {
            input,
            output,
            compact,
            raw,
        } => {
            let text = read_input(input.as_deref())?;
            let mut builder = Markdoc::new();
            if raw {
                builder = builder.raw();
            }
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = builder.process(&text).to_json(format)?;
            write_output(output.as_deref(), &json)
        }

        Commands::Plain { input, output } => {
            let text = read_input(input.as_deref())?;
            let plain = Markdoc::new().process(&text).plain_text();
            write_output(output.as_deref(), &plain)
        }

        Commands::Info { input, json } => {
            let text = read_input(input.as_deref())?;
            let result = Markdoc::new().process(&text);
            let doc = result.document();

            if json {
                let summary = serde_json::json!({
                    "title": doc.title(),
                    "headings": doc.heading_count(),
                    "paragraphs": doc.paragraph_count(),
                    "list_items": doc.list_item_count(),
                    "tables": doc.table_count(),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", "Document summary".bold());
                println!(
                    "  {} {}",
                    "title:".cyan(),
                    doc.title().unwrap_or("(none)")
                );
                println!("  {} {}", "headings:".cyan(), doc.heading_count());
                println!("  {} {}", "paragraphs:".cyan(), doc.paragraph_count());
                println!("  {} {}", "list items:".cyan(), doc.list_item_count());
                println!("  {} {}", "tables:".cyan(), doc.table_count());
            }
            Ok(())
        }
    }
}

/// Read the input file, or stdin when the path is `-` or absent.
fn read_input(path: Option<&std::path::Path>) -> markdoc::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write to the output file, or stdout when no path was given.
fn write_output(path: Option<&std::path::Path>, content: &str) -> markdoc::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            log::info!("wrote {} bytes to {}", content.len(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
