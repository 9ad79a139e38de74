use aliaspick::WeightedSampler;
use clap::{Arg, Command, value_parser};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::BTreeMap;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("frequencies")
        .about("Draw from a fixed weight table and report observed shares")
        .arg(
            Arg::new("trials")
                .short('n')
                .long("trials")
                .value_name("COUNT")
                .value_parser(value_parser!(u32))
                .default_value("10000")
                .help("number of picks to make"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("seed the generator for a reproducible run"),
        )
        .get_matches();

    let trials = *matches.get_one::<u32>("trials").unwrap_or(&10_000);
    let table = [('A', 4), ('B', 1), ('C', 3), ('D', 2)];

    let mut frequency: BTreeMap<char, u32> = BTreeMap::new();
    match matches.get_one::<u64>("seed") {
        Some(&seed) => {
            let entries = table.map(aliaspick::Entry::from);
            let mut picker = WeightedSampler::with_rng(entries, StdRng::seed_from_u64(seed))?;
            for _ in 0..trials {
                *frequency.entry(picker.pick()?).or_default() += 1;
            }
        }
        None => {
            let mut picker = WeightedSampler::from_pairs(table)?;
            for _ in 0..trials {
                *frequency.entry(picker.pick()?).or_default() += 1;
            }
        }
    }

    for (label, count) in frequency {
        println!(
            "{label} was selected {count} times ({}%)",
            100.0 * count as f64 / trials as f64
        );
    }

    Ok(())
}
