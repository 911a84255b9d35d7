/// Controls how chatty the byte routines are.
///
/// Passed by reference into every operation instead of living in a global, so
/// tests and the self-check can run quietly while the CLI traces on request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trace {
    pub is_verbose: bool,
}

impl Trace {
    pub fn new(is_verbose: bool) -> Self {
        Trace { is_verbose }
    }

    pub fn quiet() -> Self {
        Trace { is_verbose: false }
    }

    /// Print a dimmed trace line, only when verbose.
    pub fn log(&self, msg: impl std::fmt::Display) {
        if self.is_verbose {
            use colored::Colorize;

            println!("{}", format!("  | {}", msg).dimmed());
        }
    }
}
