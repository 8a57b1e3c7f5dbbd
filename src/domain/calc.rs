use serde::{Deserialize, Serialize};

/// Binary operator of the four-function calculator.
///
/// `Equals` can be recorded as a pending operation like any other
/// operator; its binary function simply passes the second operand
/// through, which is also the fallback for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl CalcOp {
    /// Apply the operator as a left-to-right binary function.
    ///
    /// Division by zero is not guarded; it yields `inf`/`-inf`/`NaN`
    /// following IEEE 754 semantics.
    pub fn apply(self, first: f64, second: f64) -> f64 {
        match self {
            CalcOp::Add => first + second,
            CalcOp::Subtract => first - second,
            CalcOp::Multiply => first * second,
            CalcOp::Divide => first / second,
            CalcOp::Equals => second,
        }
    }

    /// The glyph shown on the key pad and next to the display.
    pub fn symbol(self) -> &'static str {
        match self {
            CalcOp::Add => "+",
            CalcOp::Subtract => "-",
            CalcOp::Multiply => "×",
            CalcOp::Divide => "÷",
            CalcOp::Equals => "=",
        }
    }

    /// Map a typed character to an operator, if it is one.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(CalcOp::Add),
            '-' => Some(CalcOp::Subtract),
            '*' | '×' | 'x' => Some(CalcOp::Multiply),
            '/' | '÷' => Some(CalcOp::Divide),
            _ => None,
        }
    }
}

/// Parse the calculator display the way a lenient float parser would:
/// the longest leading numeric prefix wins, and a display with no such
/// prefix parses as `NaN`.
///
/// The digit/dot input path can produce strings like `"3.1.4"` or a
/// bare `"."`, so a strict `str::parse` is not enough here.
pub fn parse_display(display: &str) -> f64 {
    if let Ok(value) = display.parse::<f64>() {
        return value;
    }

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in display.char_indices() {
        match c {
            '0'..='9' => end = i + c.len_utf8(),
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if i == 0 => {}
            _ => break,
        }
    }

    display[..end].parse::<f64>().unwrap_or(f64::NAN)
}
