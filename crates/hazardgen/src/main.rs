use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hazard_core::io::csv::write_csv;
use hazard_core::{generate, GeneratorConfig, DEFAULT_SAMPLES, DEFAULT_SEED};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "hazardgen",
    about = "Batch generator for synthetic disaster observation CSVs"
)]
struct Args {
    /// Number of records to generate.
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: u64,

    /// Seed for the paired random streams.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Output CSV file path.
    #[arg(long, default_value = "disaster_observations.csv")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();

    info!(samples = args.samples, seed = args.seed, "generating dataset");
    let config = GeneratorConfig {
        samples: args.samples,
        seed: args.seed,
    };
    let records = generate(&config)?;

    let file =
        File::create(&args.out).with_context(|| format!("failed to create {:?}", args.out))?;
    write_csv(&records, BufWriter::new(file))
        .with_context(|| format!("failed to write {:?}", args.out))?;

    let mut label_counts: BTreeMap<&'static str, u64> = BTreeMap::new();
    for record in &records {
        *label_counts.entry(record.disaster.as_str()).or_insert(0) += 1;
    }
    for (label, count) in &label_counts {
        info!(label, count, "label tally");
    }
    info!(records = records.len(), out = ?args.out, "dataset written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn defaults_match_the_documented_run() {
        let args = Args::try_parse_from(["hazardgen"]).unwrap();
        assert_eq!(args.samples, 10_000);
        assert_eq!(args.seed, 42);
        assert_eq!(args.out.to_str(), Some("disaster_observations.csv"));
    }

    #[test]
    fn rejects_negative_sample_counts_at_parse_time() {
        assert!(Args::try_parse_from(["hazardgen", "--samples", "-5"]).is_err());
    }

    #[test]
    fn accepts_explicit_overrides() {
        let args =
            Args::try_parse_from(["hazardgen", "--samples", "500", "--seed", "7", "--out", "x.csv"])
                .unwrap();
        assert_eq!(args.samples, 500);
        assert_eq!(args.seed, 7);
    }
}
