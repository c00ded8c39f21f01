//! Compare SymNMF and K-means on one dataset by silhouette score.
//!
//! Usage: `analysis <k> <file>`. Prints one score per algorithm at 4 decimal
//! places; any failure maps to the uniform error message and exit status 1.

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use symclust::loader::load_points;
use symclust::pipeline::{run_analysis, AnalysisConfig};
use symclust::ClusterError;

fn main() {
    if SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .is_err()
    {
        fail();
    }

    if run(env::args()).is_err() {
        fail();
    }
}

fn run(mut args: impl Iterator<Item = String>) -> Result<(), Box<dyn Error>> {
    args.next();
    let k: usize = args
        .next()
        .ok_or_else(|| ClusterError::InvalidInput("missing cluster count".to_string()))?
        .parse()
        .map_err(|_| ClusterError::InvalidInput("non-numeric cluster count".to_string()))?;
    let path = PathBuf::from(
        args.next()
            .ok_or_else(|| ClusterError::InvalidInput("missing input file path".to_string()))?,
    );
    if args.next().is_some() {
        return Err(ClusterError::InvalidInput("unexpected extra argument".to_string()).into());
    }

    let points = load_points(&path)?;
    let report = run_analysis(
        &points,
        &AnalysisConfig {
            k,
            ..Default::default()
        },
    )?;

    println!("nmf: {:.4}", report.symnmf_silhouette);
    println!("kmeans: {:.4}", report.kmeans_silhouette);
    Ok(())
}

fn fail() -> ! {
    println!("An Error Has Occurred");
    process::exit(1);
}
