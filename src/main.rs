use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use sheaf::collect::{collect, CollectOptions};
use sheaf::config::{SheafConfig, CONFIG_FILE_NAME};
use sheaf::error::SheafError;
use sheaf::format::OutputFormat;
use sheaf::telemetry;

/// Collect matching source files into one review file
///
/// sheaf walks a directory tree and writes every file whose name ends with
/// the configured extension into a single output file: relative path, a
/// `---content---` marker line, then the verbatim content, one record per
/// file in filesystem order.
///
/// Files that cannot be read (permissions, invalid UTF-8, vanished mid-run)
/// are skipped with a warning and leave a content-less record; the run still
/// succeeds. Only a destination that cannot be created aborts the run.
///
/// Defaults can be set in a `.sheaf.toml` next to where you invoke sheaf:
///
///   [collect]
///   output = "combined.php"
///   extension = ".php"
///
/// Command-line flags win over the config file.
#[derive(Parser)]
#[command(name = "sheaf")]
#[command(version, about)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Destination file; truncated if it already exists
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File-name suffix to match, case-sensitive (e.g. ".php")
    #[arg(short, long)]
    extension: Option<String>,

    /// Summary format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let config = SheafConfig::load(Path::new(CONFIG_FILE_NAME)).map_err(SheafError::Config)?;
    let options = CollectOptions {
        root: cli.dir,
        output: cli.output.unwrap_or(config.collect.output),
        extension: cli.extension.unwrap_or(config.collect.extension),
    };

    let report = collect(&options)?;

    let format = cli.format.unwrap_or_default();
    match format {
        OutputFormat::Text => {
            if report.skipped.is_empty() {
                println!(
                    "[OK] collected {} file(s) into '{}'",
                    report.collected,
                    report.output.display()
                );
            } else {
                println!(
                    "[OK] collected {} file(s) into '{}' ({} skipped as unreadable, see warnings)",
                    report.collected,
                    report.output.display(),
                    report.skipped.len()
                );
            }
        }
        OutputFormat::Json => println!("{}", format.serialize(&report)?),
    }

    Ok(())
}
