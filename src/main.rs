use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use balloonfinder::output::{FixOutput, OutputFormat, create_formatter};
use balloonfinder::{AprsDecoder, ExportSource, FinderConfig, FixReport, LinkPair, find_last_fix};

#[derive(Parser, Debug)]
#[command(name = "balloonfinder")]
#[command(about = "Find the last APRS position fix in SDRangel packet exports", long_about = None)]
struct Args {
    /// Exported CSV files; `-` reads an export from stdin
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format: text, json, csv
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// TOML configuration file (column names, map link base)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &args.config {
        Some(path) => FinderConfig::load(path).context("Failed to load config file")?,
        None => FinderConfig::default(),
    };

    let decoder = AprsDecoder::new();
    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }

    let mut failures = 0;
    for file in &args.files {
        let name = file.display().to_string();
        match process_file(file, &config, &decoder) {
            Ok((report, links)) => {
                println!(
                    "{}",
                    formatter.format(&FixOutput {
                        source: &name,
                        report: &report,
                        links: links.as_ref(),
                    })
                );
            }
            Err(e) => {
                eprintln!("Failed to process the file {}: {:#}", name, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} files failed", failures, args.files.len());
    }
    Ok(())
}

/// Run one independent pipeline invocation for a file (or stdin).
fn process_file(
    file: &Path,
    config: &FinderConfig,
    decoder: &AprsDecoder,
) -> anyhow::Result<(FixReport, Option<LinkPair>)> {
    let report = if file.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        find_last_fix(ExportSource::Bytes(&bytes), &config.columns, decoder)?
    } else {
        find_last_fix(ExportSource::Path(file), &config.columns, decoder)?
    };

    let links = report
        .fix
        .as_ref()
        .map(|fix| LinkPair::new(&fix.packet, &config.links))
        .transpose()?;

    Ok((report, links))
}
