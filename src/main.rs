use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use std::io::IsTerminal;
use std::path::PathBuf;
use vkinfo::config::ReportConfig;
use vkinfo::logging::setup_logging;
use vkinfo::search::{find_matches, highlight};
use vkinfo::vk::AshApi;

#[derive(Parser, Debug)]
#[command(version, about = "Print the Vulkan capabilities of this machine")]
struct Arguments {
    #[clap(short = 'c', long, help = "Path to the config file in JSON format")]
    config: Option<PathBuf>,
    #[clap(short = 'o', long, help = "Write the report to this file instead of stdout")]
    output: Option<PathBuf>,
    #[clap(short = 's', long, help = "Highlight case-insensitive matches of this text")]
    search: Option<String>,
    #[clap(long, help = "Also write logs to this file")]
    log_file: Option<PathBuf>,
    #[clap(short = 'v', long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    setup_logging(level, args.log_file.clone(), std::io::stderr().is_terminal())?;
    info!("Starting with args: {:?}", args);

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from file: {}", path.display());
            ReportConfig::from_file(path)?
        }
        None => {
            info!("No config file provided, using default config");
            ReportConfig::default()
        }
    };

    let report = vkinfo::generate_report(&mut AshApi::new(), &config);

    if let Some(path) = &args.output {
        std::fs::write(path, &report)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    match &args.search {
        Some(query) => {
            let spans = find_matches(&report, query);
            if spans.is_empty() {
                if args.output.is_none() {
                    print!("{}", report);
                }
                println!("No Match found");
            } else {
                if args.output.is_none() {
                    print!("{}", highlight(&report, &spans));
                }
                println!("Matches found {}", spans.len());
            }
        }
        None if args.output.is_none() => print!("{}", report),
        None => {}
    }

    Ok(())
}
