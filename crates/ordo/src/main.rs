use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ordo::{format_sequence, parse_sequence, SearchAlgo, SortAlgo};
use std::io::Read;

/// ordo — classic sort and search routines over integer sequences.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort a sequence ascending and print it
    Sort {
        /// Sorting routine to use
        #[arg(long, value_enum, default_value = "heap")]
        algo: SortAlgo,

        /// Integers to sort; read from stdin when omitted
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Look up a value in an ascending-sorted sequence
    Search {
        /// Search routine to use
        #[arg(long, value_enum, default_value = "fibonacci")]
        algo: SearchAlgo,

        /// Value to look for
        #[arg(long, short)]
        target: i64,

        /// Sorted integers to search; read from stdin when omitted
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sort { algo, values } => {
            let mut values = values_or_stdin(values)?;
            eprintln!("ordo: sorting {} values ({algo:?})", values.len());
            println!("input:  {}", format_sequence(&values));
            algo.run(&mut values);
            println!("sorted: {}", format_sequence(&values));
        }
        Command::Search {
            algo,
            target,
            values,
        } => {
            let values = values_or_stdin(values)?;
            eprintln!("ordo: searching {} values ({algo:?})", values.len());
            // Absence is a result, not an error: exit 0 either way.
            match algo.run(&values, target) {
                Some(index) => println!("found {target} at index {index}"),
                None => println!("{target} not found"),
            }
        }
    }

    Ok(())
}

/// Positional values if any were given, otherwise a whitespace-separated
/// sequence read from stdin.
fn values_or_stdin(values: Vec<i64>) -> Result<Vec<i64>> {
    if !values.is_empty() {
        return Ok(values);
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    parse_sequence(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_sort_defaults() {
        let cli = Cli::parse_from(["ordo", "sort", "3", "1", "2"]);
        match cli.command {
            Command::Sort { algo, values } => {
                assert_eq!(algo, SortAlgo::Heap);
                assert_eq!(values, [3, 1, 2]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_search() {
        let cli = Cli::parse_from(["ordo", "search", "--algo", "jump", "-t", "85", "10", "85"]);
        match cli.command {
            Command::Search {
                algo,
                target,
                values,
            } => {
                assert_eq!(algo, SearchAlgo::Jump);
                assert_eq!(target, 85);
                assert_eq!(values, [10, 85]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_negative_target() {
        let cli = Cli::parse_from(["ordo", "search", "--target=-5", "-3", "-1"]);
        match cli.command {
            Command::Search { target, .. } => assert_eq!(target, -5),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
