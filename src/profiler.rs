use ahash::AHashMap;

use std::time::{Duration, Instant};

/// Wall-clock totals per tag. Owned by the caller and handed to whatever
/// should be timed, so nothing here is process-wide.
#[derive(Debug, Default)]
pub struct Profiler {
    table: AHashMap<&'static str, Duration>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time `f` and add the elapsed time to the running total for `tag`.
    pub fn profile<T: FnOnce() -> X, X>(&mut self, tag: &'static str, f: T) -> X {
        let start = Instant::now();
        let res = f();
        *self.table.entry(tag).or_default() += start.elapsed();
        res
    }

    /// Report lines, slowest tag first.
    pub fn log_lines(&self) -> Vec<String> {
        let mut pairs: Vec<_> = self.table.iter().collect();
        pairs.sort_by(|(name_a, a), (name_b, b)| b.cmp(a).then(name_a.cmp(name_b)));

        std::iter::once("PROFILE RESULTS:".to_owned())
            .chain(
                pairs
                    .into_iter()
                    .map(|(name, t)| format!("    {:20} {:?}", name, t)),
            )
            .collect()
    }
}
