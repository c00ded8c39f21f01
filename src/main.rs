use std::env;
use std::error::Error;
use std::io;
use std::process;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use symclust::config::{Config, Goal};
use symclust::kmeans;
use symclust::loader::{load_points, write_matrix};
use symclust::similarity::{diagonal_degree, normalized_similarity, similarity};
use symclust::symnmf::{self, initialize_h};

fn main() {
    // quiet by default; RUST_LOG raises the level for diagnostics
    if SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .is_err()
    {
        fail();
    }

    let config = match Config::new(env::args()) {
        Ok(config) => config,
        Err(_) => fail(),
    };
    if run(&config).is_err() {
        fail();
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let points = load_points(&config.path)?;

    let result = match config.goal {
        Goal::Sym => similarity(&points)?,
        Goal::Ddg => diagonal_degree(&points)?,
        Goal::Norm => normalized_similarity(&points)?,
        Goal::Symnmf => {
            let w = normalized_similarity(&points)?;
            let h0 = initialize_h(&w, config.k, symnmf::DEFAULT_SEED)?;
            symnmf::symnmf(h0, &w)?
        }
        Goal::Kmeans => kmeans::fit(&points, config.k, kmeans::DEFAULT_MAX_ITER)?.centroids,
    };

    write_matrix(&mut io::stdout().lock(), &result)?;
    Ok(())
}

fn fail() -> ! {
    println!("An Error Has Occurred");
    process::exit(1);
}
