use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use crate::compare::{compare, Winner};
use crate::trace::Trace;

struct SharedCheckState {
    count_checked: usize,
    mismatches: Vec<Mismatch>,
    rows: VecDeque<i8>,
}

/// A pair where the bit scan disagreed with native `max`, or broke a tie the
/// wrong way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Mismatch {
    pub a: i8,
    pub b: i8,
    pub expected: i8,
    pub got: i8,
}

#[derive(Debug)]
pub struct CheckReport {
    pub count_checked: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

const MAX_REPORTED: usize = 20;

/// Compare every `(a, b)` byte pair against native `max`, one row of `a` at a
/// time, spread over `worker_count` threads.
pub fn check_all(worker_count: usize, trace: &Trace) -> CheckReport {
    use colored::Colorize;

    let shared = Arc::new(Mutex::new(SharedCheckState {
        count_checked: 0,
        mismatches: Vec::new(),
        rows: (i8::MIN..=i8::MAX).collect(),
    }));

    let workers: Vec<_> = (0..worker_count.max(1))
        .map(|_| {
            let shared = shared.clone();
            let trace = *trace;

            std::thread::spawn(move || loop {
                let a = {
                    let mut state = shared.lock().expect("check state poisoned");
                    state.rows.pop_front()
                };

                let Some(a) = a else {
                    break;
                };

                let bad = check_row(a);
                if trace.is_verbose {
                    let status = if bad.is_empty() {
                        "GOOD".green()
                    } else {
                        "FAIL".red()
                    };
                    println!("row {:4} {}", a, status);
                }

                let mut state = shared.lock().expect("check state poisoned");
                state.count_checked += 256;
                state.mismatches.extend(bad);
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("check worker panicked");
    }

    let mut state = shared.lock().expect("check state poisoned");
    let mut mismatches = std::mem::take(&mut state.mismatches);
    mismatches.sort();

    CheckReport {
        count_checked: state.count_checked,
        mismatches,
    }
}

fn check_row(a: i8) -> Vec<Mismatch> {
    let quiet = Trace::quiet();

    (i8::MIN..=i8::MAX)
        .filter_map(|b| {
            let decision = compare(a, b, &quiet);
            let got = decision.pick(a, b);
            let expected = a.max(b);
            let tie_ok = a != b || decision.winner == Winner::First;

            if got != expected || !tie_ok {
                Some(Mismatch { a, b, expected, got })
            } else {
                None
            }
        })
        .collect()
}

/// Summary of a sweep: the first few mismatches, then a GOOD/FAIL total.
pub fn report_lines(report: &CheckReport) -> Vec<String> {
    use colored::Colorize;

    let mut lines: Vec<String> = report
        .mismatches
        .iter()
        .take(MAX_REPORTED)
        .map(|m| {
            format!(
                "{} bigger({}, {}) = {}, expected {}",
                "FAIL:".red(),
                m.a,
                m.b,
                m.got,
                m.expected
            )
        })
        .collect();
    if report.mismatches.len() > MAX_REPORTED {
        lines.push(format!(
            "... and {} more",
            report.mismatches.len() - MAX_REPORTED
        ));
    }

    let count_good = report.count_checked - report.mismatches.len();
    let summary = format!("{} / {} pairs agree", count_good, report.count_checked);

    lines.push(String::new());
    if report.passed() {
        lines.push(format!("{} {}", "GOOD:".green(), summary));
    } else {
        lines.push(format!("{} {}", "FAIL:".red(), summary));
    }
    lines
}

/// Run the full sweep and print a summary. Returns false on any mismatch.
pub fn run(trace: &Trace) -> bool {
    let worker_count = get_worker_count();
    println!("using {} workers", worker_count);
    println!();

    let report = check_all(worker_count, trace);
    for line in report_lines(&report) {
        println!("{}", line);
    }

    report.passed()
}

fn get_worker_count() -> usize {
    if let Ok(val) = std::env::var("CHECK_WORKERS") {
        if let Ok(res) = val.parse::<usize>() {
            return res.max(1);
        }
    }

    if let Ok(n) = std::thread::available_parallelism() {
        n.get()
    } else {
        1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_pair_agrees() {
        let report = check_all(4, &Trace::quiet());
        assert_eq!(report.count_checked, 256 * 256);
        assert!(report.mismatches.is_empty());
        assert!(report.passed());
    }

    #[test]
    fn single_worker_covers_everything() {
        let report = check_all(1, &Trace::quiet());
        assert_eq!(report.count_checked, 65536);
        assert!(report.passed());
    }

    #[test]
    fn zero_workers_still_runs() {
        let report = check_all(0, &Trace::quiet());
        assert_eq!(report.count_checked, 65536);
    }

    #[test]
    fn report_lines_on_success() {
        let report = check_all(2, &Trace::quiet());
        let lines = report_lines(&report);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("65536 / 65536 pairs agree"));
    }

    #[test]
    fn report_lines_cap_mismatches() {
        let mismatches: Vec<Mismatch> = (0..25)
            .map(|a| Mismatch {
                a,
                b: 0,
                expected: a,
                got: 0,
            })
            .collect();
        let report = CheckReport {
            count_checked: 100,
            mismatches,
        };
        assert!(!report.passed());

        let lines = report_lines(&report);
        assert_eq!(lines.len(), MAX_REPORTED + 3);
        assert!(lines[0].ends_with("bigger(0, 0) = 0, expected 0"));
        assert_eq!(lines[MAX_REPORTED], "... and 5 more");
        assert!(lines[MAX_REPORTED + 2].ends_with("75 / 100 pairs agree"));
    }

    #[test]
    fn rows_are_clean() {
        assert!(check_row(i8::MIN).is_empty());
        assert!(check_row(0).is_empty());
        assert!(check_row(i8::MAX).is_empty());
    }
}
