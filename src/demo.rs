use crate::bits::binary_string;
use crate::compare::compare;
use crate::trace::Trace;

// Literals are wider than a byte on purpose: 255 and 256 show what happens
// when a value is squeezed into eight bits.
const COMPARE_CASES: &[(i16, i16)] = &[
    (0, 0),
    (10, 0),
    (0, 10),
    (-10, 0),
    (0, -10),
    (-5, -10),
    (-10, -5),
    (-10, -9),
    (-8, -9),
    (127, 0),
    (0, 127),
    (-128, 0),
    (0, -128),
    (256, 0),
    (255, 0),
];

const BINARY_CASES: &[i16] = &[0, 1, 2, 3, 4, 8, -1, 127, -128, 255, 256];

/// Keep the low eight bits, the way storing into a byte does.
pub fn wrap_byte(value: i16) -> i8 {
    value as u8 as i8
}

fn show_literal(value: i16) -> String {
    let byte = wrap_byte(value);
    if byte as i16 == value {
        format!("{}", value)
    } else {
        format!("{} (as {})", value, byte)
    }
}

pub fn compare_lines(trace: &Trace) -> Vec<String> {
    COMPARE_CASES
        .iter()
        .map(|&(x, y)| {
            let (a, b) = (wrap_byte(x), wrap_byte(y));
            let decision = compare(a, b, trace);
            format!(
                "bigger({}, {}): {}  [{}]",
                show_literal(x),
                show_literal(y),
                decision.pick(a, b),
                decision.reason
            )
        })
        .collect()
}

pub fn binary_lines(trace: &Trace) -> Vec<String> {
    BINARY_CASES
        .iter()
        .map(|&x| {
            let label = format!("binary({}):", show_literal(x));
            format!("{:22} {}", label, binary_string(wrap_byte(x), trace))
        })
        .collect()
}

pub fn render(trace: &Trace) -> String {
    format!(
        "{}\n\n{}",
        compare_lines(trace).join("\n"),
        binary_lines(trace).join("\n")
    )
}
