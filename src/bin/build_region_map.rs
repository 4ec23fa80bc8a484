use std::collections::BTreeMap;

use anyhow::Context;
use clap::Parser;
use phone_zip_api::adapters::county_map::CountyRegionMap;
use phone_zip_api::config::LogFormat;
use phone_zip_api::domain::ports::RegionLookup;
use phone_zip_api::utils::logger;

#[derive(Parser)]
#[command(name = "build_region_map")]
#[command(about = "Invert a council -> counties JSON file into the county -> region map served by the API")]
struct Args {
    /// JSON object of region name -> list of county names
    #[arg(short, long, default_value = "./data/councils.json")]
    councils: String,

    /// Where to write the flat county -> region JSON object
    #[arg(short, long, default_value = "./data/counties.json")]
    output: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(if args.verbose { "debug" } else { "info" }, LogFormat::Compact);

    tracing::info!("📁 Reading councils from {}", args.councils);
    let content = std::fs::read_to_string(&args.councils)
        .with_context(|| format!("failed to read {}", args.councils))?;
    let councils: BTreeMap<String, Vec<String>> =
        serde_json::from_str(&content).context("councils file must map region -> [county]")?;

    let map = match CountyRegionMap::from_councils(&councils) {
        Ok(map) => map,
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let json = serde_json::to_string_pretty(&map.to_sorted())?;
    std::fs::write(&args.output, json).with_context(|| format!("failed to write {}", args.output))?;

    tracing::info!(
        "✅ Wrote {} county mappings for {} regions to {}",
        map.len(),
        councils.len(),
        args.output
    );
    Ok(())
}
