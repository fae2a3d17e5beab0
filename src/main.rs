use balanced_sets::{AvlSet, OpenHashSet, Set};
use log::{info, warn, LevelFilter};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{Config, TermLogger};
use std::env;
use std::error;
use std::str::FromStr;

const DEFAULT_COUNT: usize = 1000;

// Inserts `count` random values into `set`, then removes every other one of them.
fn churn<S: Set<u32>>(set: &mut S, count: usize) -> usize {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let bound = (count as u32).max(1) * 4;
    let values = (0..count).map(|_| rng.gen_range(0, bound)).collect::<Vec<u32>>();

    let inserted = values.iter().filter(|value| set.insert(**value)).count();
    let removed = values.iter().step_by(2).filter(|value| set.remove(*value)).count();
    inserted - removed
}

fn main() -> Result<(), Box<dyn error::Error>> {
    let mut args = env::args().skip(1);
    let count = match args.next() {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_COUNT,
    };
    let level = match args.next() {
        Some(arg) => {
            LevelFilter::from_str(&arg).map_err(|_| format!("invalid log level: {}", arg))?
        },
        None => LevelFilter::Info,
    };
    if let Err(err) = TermLogger::init(level, Config::default()) {
        eprintln!("failed to initialize logger: {:?}", err);
    }

    let mut tree = AvlSet::new();
    let expected = churn(&mut tree, count);
    info!(
        "avl tree: {} values, height {}, expected {}",
        tree.len(),
        tree.height(),
        expected,
    );
    match (tree.first(), tree.last()) {
        (Ok(first), Ok(last)) => info!("avl tree: values range from {} to {}", first, last),
        (Err(err), _) | (_, Err(err)) => warn!("avl tree: {}", err),
    }
    let traversal = tree.inorder_traverse();
    info!(
        "avl tree: in-order traversal is ascending: {}",
        traversal.windows(2).all(|pair| pair[0] < pair[1]),
    );

    let mut table = OpenHashSet::new();
    let expected = churn(&mut table, count);
    info!(
        "open hash set: {} values in {} slots, expected {}",
        table.len(),
        table.capacity(),
        expected,
    );

    Ok(())
}
