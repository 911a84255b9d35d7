mod bits;
mod check;
mod cli;
mod compare;
mod demo;
mod profiler;
mod trace;

use std::process;

use clap::Parser;

use crate::{cli::Command, profiler::Profiler, trace::Trace};

fn main() {
    set_panic_handler();

    let args = cli::CliArgs::parse();
    let trace = Trace::new(args.verbose);
    let mut profiler = Profiler::new();

    let ok = profiler.profile("top", || match args.command {
        Command::Check => check::run(&trace),
        ref command => {
            println!("{}", render(command, &trace));
            true
        }
    });

    if args.profile {
        for line in profiler.log_lines() {
            println!("{}", line);
        }
    }

    if !ok {
        process::exit(1);
    }
}

/// Output of the commands that finish with a single block of text.
fn render(command: &Command, trace: &Trace) -> String {
    use colored::Colorize;

    match *command {
        Command::Bigger { a, b } => {
            if trace.is_verbose {
                let decision = compare::compare(a, b, trace);
                let winner = decision.pick(a, b).to_string();
                format!("bigger({}, {}): {} [{}]", a, b, winner.green(), decision.reason)
            } else {
                compare::bigger(a, b, trace).to_string()
            }
        }
        Command::Binary { byte } => bits::binary_string(byte, trace),
        Command::Demo => demo::render(trace),
        // streamed by check::run
        Command::Check => String::new(),
    }
}

/// When any thread panics, close the process.
fn set_panic_handler() {
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        process::exit(1);
    }));
}

#[cfg(test)]
mod test {
    use super::*;

    fn render_args(args: &[&str]) -> String {
        let argv = std::iter::once("bytecmp").chain(args.iter().copied());
        let args = cli::CliArgs::try_parse_from(argv).unwrap();
        render(&args.command, &Trace::new(args.verbose))
    }

    #[test]
    fn bigger_prints_winner() {
        assert_eq!(render_args(&["bigger", "10", "0"]), "10");
        assert_eq!(render_args(&["bigger", "0", "-10"]), "0");
        assert_eq!(render_args(&["bigger", "-10", "-5"]), "-5");
        assert_eq!(render_args(&["bigger", "-8", "-9"]), "-8");
        assert_eq!(render_args(&["bigger", "-128", "0"]), "0");
        assert_eq!(render_args(&["bigger", "15", "15"]), "15");
    }

    #[test]
    fn bigger_verbose_prints_reason() {
        let out = render_args(&["-v", "bigger", "-8", "-9"]);
        assert!(out.starts_with("bigger(-8, -9): "));
        assert!(out.contains("-8"));
        assert!(out.ends_with(" [bit 8]"));
    }

    #[test]
    fn binary_prints_bits() {
        assert_eq!(render_args(&["binary", "127"]), "01111111");
        assert_eq!(render_args(&["binary", "-128"]), "10000000");
        assert_eq!(render_args(&["binary", "255"]), "11111111");
    }

    #[test]
    fn demo_prints_both_tables() {
        let out = render_args(&["demo"]);
        assert!(out.starts_with("bigger(0, 0): 0  [equal]\n"));
        assert!(out.contains("\n\n"));
        assert!(out.ends_with(" 00000000"));
    }
}
