//! Dice Roll Binary
//!
//! Prints the sample distributions, then the distribution of each
//! requested roll, optionally compared against a constant.

use clap::Parser;
use dicedist::dice;
use dicedist::*;

#[derive(Parser)]
#[command(author, version, about = "Print outcome distributions of dice rolls", long_about = None)]
struct Args {
    /// Rolls in dice notation, e.g. 3d6 or d20
    dice: Vec<Dice>,
    /// Operation applied to each roll: add, sub, mul, div, lt, le, gt, ge, eq, ne
    #[arg(long, value_parser = |s: &str| Op::try_from(s), requires = "against")]
    op: Option<Op>,
    /// Integer right-hand side of --op
    #[arg(long, allow_hyphen_values = true)]
    against: Option<i64>,
    /// Log combinator activity
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;
    let ref d6 = dice::d6();
    println!("D6 (6-sided die): {}", d6);
    println!("D6 > 3: {}", d6.gt(3));
    println!("D6 + D6 (sum of two dice): {}", d6 + d6);
    println!("D6 * 2 (double the die roll result): {}", d6 * 2);
    for roll in args.dice.iter() {
        let distribution = roll.roll();
        distribution.ensure()?;
        log::info!("{} has {} outcomes", roll, distribution.len());
        match (args.op, args.against) {
            (Some(op), Some(k)) => {
                println!("{} {} {}: {}", roll, op, k, distribution.dispatch(op, k))
            }
            _ => println!("{}: {}", roll, distribution),
        }
    }
    Ok(())
}
