use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

use randselect::{select_with_rng, sort_with_rng, Error, Result};

const USAGE: &str = "usage: select_and_sort [--seed N] [RANK [VALUE...]]";

/// Inputs for one select-then-sort run
#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    /// 1-based rank to select
    rank: usize,
    /// Sequence to work on
    values: Vec<i64>,
    /// Fixed seed for the pivot generator, `None` draws one from the OS
    seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rank: 4,
            values: vec![1, 4, 53, 6, 2, 533, 6, 4, 6],
            seed: None,
        }
    }
}

impl RunConfig {
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut config = RunConfig::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--seed" {
                let raw = args
                    .next()
                    .ok_or_else(|| Error::invalid_argument("--seed needs a value"))?;
                let seed = raw
                    .parse()
                    .map_err(|_| Error::invalid_argument(format!("bad seed '{}'", raw)))?;
                config.seed = Some(seed);
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        if let Some(raw) = positional.next() {
            config.rank = raw
                .parse()
                .map_err(|_| Error::invalid_argument(format!("bad rank '{}'", raw)))?;
        }
        let values = positional
            .map(|raw| {
                raw.parse()
                    .map_err(|_| Error::invalid_argument(format!("bad value '{}'", raw)))
            })
            .collect::<Result<Vec<i64>>>()?;
        if !values.is_empty() {
            config.values = values;
        }
        Ok(config)
    }
}

/// Selects the configured rank, then sorts and reads the same position back.
fn run(config: &RunConfig) -> Result<(i64, i64)> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "selecting rank {} from {} values (seed {:?})",
        config.rank,
        config.values.len(),
        config.seed
    );

    // select reorders its input, keep the original for the sort
    let selected = select_with_rng(&mut config.values.clone(), config.rank, &mut rng)?;

    let mut sorted = config.values.clone();
    sort_with_rng(&mut sorted, &mut rng)?;
    Ok((selected, sorted[config.rank - 1]))
}

fn main() {
    env_logger::init();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            process::exit(2);
        }
    };

    match run(&config) {
        Ok((selected, from_sort)) => {
            println!("{}", selected);
            println!("{}", from_sort);
            if selected != from_sort {
                error!("select returned {} but sorting gives {}", selected, from_sort);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}
