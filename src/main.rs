use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use docpdf::batch;
use docpdf::config;
use docpdf::layout::PageSetup;
use docpdf::render::{self, DocumentHeader};
use docpdf::statement;
use docpdf::styles::StyleSheet;

const RULE_WIDTH: usize = 50;

/// Converts Markdown documentation into PDF files.
///
/// Fonts must be present under `assets/fonts` next to the binary or the
/// crate root, or provided via the `DOCPDF_FONTS_DIR` environment variable
/// before running the commands below.
#[derive(Parser)]
#[command(author, version, about = "Markdown documentation to PDF converter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the built-in documentation set (or a TOML manifest) to PDF.
    #[command(name = "docs")]
    Docs {
        /// TOML manifest with a `title` and `[[job]]` source/output pairs.
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Render the built-in project status statement.
    #[command(name = "statement", aliases = ["truth-statement"])]
    Statement {
        /// Output path for the generated PDF.
        #[arg(long, default_value = statement::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Docs { manifest } => run_docs(manifest),
        Commands::Statement { output } => run_statement(output),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

/// Converts every job in the list, printing one line per file and a final
/// tally.  Per-file failures are reported but never change the exit status.
fn run_docs(manifest: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let list = match manifest {
        Some(path) => config::load_manifest(&path)?,
        None => config::documentation_set(),
    };

    let styles = StyleSheet::documentation();
    let setup = PageSetup::default();
    let header = list
        .title
        .as_deref()
        .map(|title| DocumentHeader::dated_today(title));

    println!("Generating PDF documentation...");
    println!("{}", "=".repeat(RULE_WIDTH));

    let summary = batch::run(&list.jobs, &styles, &setup, header.as_ref());
    for outcome in summary.outcomes() {
        match &outcome.result {
            Ok(bytes) => println!(
                "Generated {} ({} bytes)",
                outcome.job.output.display(),
                bytes
            ),
            Err(err) => println!("Failed {}: {}", outcome.job.source.display(), err),
        }
    }

    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "Complete: {}/{} PDFs generated",
        summary.succeeded(),
        summary.total()
    );

    Ok(())
}

fn run_statement(output: PathBuf) -> Result<(), Box<dyn Error>> {
    let blocks = statement::blocks();
    let pdf = render::render_document(
        &blocks,
        &StyleSheet::documentation(),
        &PageSetup::default(),
        None,
    )?;
    fs::write(&output, &pdf.bytes)?;
    println!("Generated {} ({} bytes)", output.display(), pdf.bytes.len());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
