use clap::{Parser, Subcommand};

use crate::bits::parse_byte;

/// Compare signed bytes using only masks and shifts.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Dump timing information after running.
    #[clap(long, global = true)]
    pub profile: bool,

    /// Trace each step of the bit scan.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the larger of two signed bytes. Ties go to the first.
    Bigger {
        #[arg(allow_negative_numbers = true)]
        a: i8,
        #[arg(allow_negative_numbers = true)]
        b: i8,
    },
    /// Print the eight bits of a byte, MSB first. Accepts -128 to 255.
    Binary {
        #[arg(allow_negative_numbers = true, value_parser = parse_byte)]
        byte: i8,
    },
    /// Run the fixed list of demonstration cases.
    Demo,
    /// Check every byte pair against native max.
    Check,
}
