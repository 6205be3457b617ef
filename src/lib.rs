//! Iconkit: maintenance tooling for an icon catalog and its label files.
//!
//! An icon set is described by an XML catalog grouping icons into
//! categories, a folder of numbered SVG drawings, and one label file per
//! language translating the label names used by the catalog. Iconkit checks
//! that all of these agree with each other and automates the chores around
//! them.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog model, reader and writer
//! - [`labels`]: Label file model, reader and sorted writer
//! - [`graphics`]: Graphics folder scanning and SVG path extraction
//! - [`check`]: Consistency checks and their report
//! - [`allocate`]: Adding new icons with free IDs
//! - [`regen`]: Sorting and renumbering the whole catalog
//! - [`stats`]: Label usage statistics
//! - [`error`]: Error types for iconkit operations

pub mod allocate;
pub mod catalog;
pub mod check;
pub mod error;
pub mod graphics;
pub mod labels;
pub mod regen;
pub mod stats;
mod xml;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

pub use error::IconkitError;

use catalog::{read_catalog, to_catalog_xml_string, CatalogKind};
use check::{run_check, CheckConfig, DefaultLabels};
use labels::{read_label_file, to_label_xml_string, Language};

const DEFAULT_ICONS_FILE: &str = "src/main/res/xml/icd_icons.xml";
const DEFAULT_GRAPHICS_DIR: &str = "icons/svg";
const DEFAULT_LABELS_DIR: &str = "src/main/res/xml";
const DEFAULT_LABELS_FILE: &str = "icd_labels.xml";
const DEFAULT_LANGUAGES: &str = "fr,pt,de";

/// The iconkit CLI application.
#[derive(Parser)]
#[command(name = "iconkit")]
#[command(version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check the catalog, graphics and label files for consistency.
    Check(CheckArgs),
    /// Give IDs to new SVG files and generate their catalog entries.
    Add(AddArgs),
    /// Sort the catalog and renumber every icon and graphics file.
    RegenIds(RegenArgs),
    /// Sort a label file by label name.
    SortLabels(SortLabelsArgs),
    /// Show how often labels are used and how many labels icons have.
    Stats(StatsArgs),
}

/// Report format shared by the reporting subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    /// Icon catalog to check.
    #[arg(long, default_value = DEFAULT_ICONS_FILE)]
    icons: PathBuf,

    /// Folder holding the `<id>.svg` graphics files.
    #[arg(long, default_value = DEFAULT_GRAPHICS_DIR)]
    svg_dir: PathBuf,

    /// Primary label directory; translations live in `<dir>-<lang>`.
    #[arg(long, default_value = DEFAULT_LABELS_DIR)]
    labels_dir: PathBuf,

    /// Label file name inside each label directory.
    #[arg(long, default_value = DEFAULT_LABELS_FILE)]
    labels_file: String,

    /// Secondary languages to check, comma separated.
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_LANGUAGES)]
    langs: Vec<String>,

    /// Check an extra catalog layered on the default icon set.
    #[arg(long)]
    extra: bool,

    /// Label directory of the default icon set (with --extra).
    #[arg(long, default_value = DEFAULT_LABELS_DIR, requires = "extra")]
    default_labels_dir: PathBuf,

    /// Label file name of the default icon set (with --extra).
    #[arg(long, default_value = DEFAULT_LABELS_FILE, requires = "extra")]
    default_labels_file: String,

    /// Languages the default icon set is translated to (with --extra).
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_LANGUAGES, requires = "extra")]
    default_langs: Vec<String>,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

/// Arguments for the add subcommand.
#[derive(clap::Args)]
struct AddArgs {
    /// Icon catalog the new icons are added to.
    #[arg(long, default_value = DEFAULT_ICONS_FILE)]
    icons: PathBuf,

    /// Folder holding the new SVG files, searched recursively.
    #[arg(long, default_value = "new")]
    new_dir: PathBuf,

    /// File receiving the generated catalog entries.
    #[arg(long, default_value = "new.xml")]
    output: PathBuf,
}

/// Arguments for the regen-ids subcommand.
#[derive(clap::Args)]
struct RegenArgs {
    /// Icon catalog to regenerate.
    #[arg(long, default_value = DEFAULT_ICONS_FILE)]
    icons: PathBuf,

    /// Folder holding the `<id>.svg` graphics files.
    #[arg(long, default_value = DEFAULT_GRAPHICS_DIR)]
    svg_dir: PathBuf,

    /// Where to write the regenerated catalog (defaults to in place).
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Arguments for the sort-labels subcommand.
#[derive(clap::Args)]
struct SortLabelsArgs {
    /// Label file to sort.
    input: PathBuf,

    /// Where to write the sorted file (defaults to in place).
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Arguments for the stats subcommand.
#[derive(clap::Args)]
struct StatsArgs {
    /// Icon catalog to analyze.
    #[arg(long, default_value = DEFAULT_ICONS_FILE)]
    icons: PathBuf,

    /// Output format for the statistics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

impl Cli {
    /// Number of `-v` flags given.
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Run the iconkit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs` once the
/// arguments are parsed and logging is installed.
pub fn run(cli: Cli) -> Result<(), IconkitError> {
    match cli.command {
        Some(Commands::Check(args)) => run_check_command(args),
        Some(Commands::Add(args)) => run_add(args),
        Some(Commands::RegenIds(args)) => run_regen(args),
        Some(Commands::SortLabels(args)) => run_sort_labels(args),
        Some(Commands::Stats(args)) => run_stats(args),
        None => {
            println!("iconkit {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Maintenance tooling for icon catalogs and their labels.");
            println!();
            println!("Run 'iconkit --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the check subcommand.
fn run_check_command(args: CheckArgs) -> Result<(), IconkitError> {
    let extra = args.extra.then(|| DefaultLabels {
        labels_dir: args.default_labels_dir.clone(),
        labels_file: args.default_labels_file.clone(),
        languages: Language::with_secondaries(&args.default_langs),
    });
    let config = CheckConfig {
        icons_file: args.icons,
        graphics_dir: Some(args.svg_dir),
        labels_dir: args.labels_dir,
        labels_file: args.labels_file,
        languages: Language::with_secondaries(&args.langs),
        extra,
    };

    // Text sections are printed as soon as they are ready, so a label file
    // failing to load still leaves the earlier sections on screen.
    let report = match args.output {
        OutputFormat::Text => run_check(&config, |section| print!("{section}"))?,
        OutputFormat::Json => {
            let report = run_check(&config, |_| {})?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            report
        }
    };

    let passed = if args.strict {
        report.is_ok_strict()
    } else {
        report.is_ok()
    };
    if passed {
        Ok(())
    } else {
        Err(IconkitError::CheckFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
        })
    }
}

/// Execute the add subcommand.
fn run_add(args: AddArgs) -> Result<(), IconkitError> {
    let catalog = read_catalog(&args.icons, CatalogKind::Default)?;
    let report = allocate::add_new_icons(&catalog, &args.new_dir)?;

    write_file(&args.output, &report.to_entries_string())?;

    let replaced = report.added.iter().filter(|icon| icon.is_replacement()).count();
    println!(
        "Added {} new icon(s), replaced {}, skipped {}",
        report.added.len() - replaced,
        replaced,
        report.skipped.len()
    );
    for skipped in &report.skipped {
        println!("  skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    println!("Catalog entries written to {}", args.output.display());
    Ok(())
}

/// Execute the regen-ids subcommand.
fn run_regen(args: RegenArgs) -> Result<(), IconkitError> {
    let catalog = read_catalog(&args.icons, CatalogKind::Default)?;
    let regenerated = regen::regenerate(&catalog, &args.icons)?;

    // Conflicts are found before anything on disk changes.
    let plan = regen::plan_graphics_renames(&args.svg_dir, &regenerated.renumbered)?;

    let output = args.output.as_deref().unwrap_or(&args.icons);
    write_file(output, &to_catalog_xml_string(&regenerated.categories))?;
    let renamed = plan.apply()?;

    println!(
        "Renumbered {} icon(s), renamed {} graphics file(s)",
        regenerated.renumbered.len(),
        renamed
    );
    Ok(())
}

/// Execute the sort-labels subcommand.
fn run_sort_labels(args: SortLabelsArgs) -> Result<(), IconkitError> {
    let mut file = read_label_file(&args.input)?;
    file.sort_by_name();

    let output = args.output.as_deref().unwrap_or(&args.input);
    write_file(output, &to_label_xml_string(&file))?;
    println!("Sorted {} label(s) into {}", file.labels.len(), output.display());
    Ok(())
}

/// Execute the stats subcommand.
fn run_stats(args: StatsArgs) -> Result<(), IconkitError> {
    let catalog = read_catalog(&args.icons, CatalogKind::Default)?;
    let report = stats::label_stats(&catalog);

    match args.output {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), IconkitError> {
    fs::write(path, contents).map_err(|source| IconkitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote file");
    Ok(())
}
