use crate::core::{cmd::Cmd, msg::calculator::CalculatorMsg};
use crate::domain::calc::{self, CalcOp};

/// Four-function calculator state
///
/// `display` is the user-visible value and doubles as the operand
/// entry buffer, so it stays a string to preserve exactly what was
/// typed. Evaluation is chained strictly left to right; there is no
/// operator precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub display: String,
    pub previous_value: Option<f64>,
    pub pending_op: Option<CalcOp>,
    pub awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: String::from("0"),
            previous_value: None,
            pending_op: None,
            awaiting_operand: false,
        }
    }
}

impl CalculatorState {
    /// Calculator-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CalculatorMsg) -> Vec<Cmd> {
        match msg {
            CalculatorMsg::InputToken(token) => {
                self.input_token(token);
                vec![]
            }

            CalculatorMsg::ChooseOperation(op) => {
                self.choose_operation(op);
                vec![]
            }

            CalculatorMsg::Evaluate => {
                self.evaluate();
                vec![]
            }

            CalculatorMsg::Clear => {
                *self = Self::default();
                vec![]
            }
        }
    }

    /// A digit or dot entered on the pad.
    ///
    /// Right after an operator the token starts a fresh number; a
    /// pristine `"0"` display is replaced rather than appended to.
    fn input_token(&mut self, token: char) {
        if self.awaiting_operand {
            self.display = token.to_string();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display = token.to_string();
        } else {
            self.display.push(token);
        }
    }

    /// Record `op` as pending, folding in any previously pending
    /// operation first (chained left-to-right evaluation).
    fn choose_operation(&mut self, op: CalcOp) {
        let input_value = calc::parse_display(&self.display);

        match (self.previous_value, self.pending_op) {
            (None, _) => {
                self.previous_value = Some(input_value);
            }
            (Some(previous), Some(pending)) => {
                let result = pending.apply(previous, input_value);
                self.display = result.to_string();
                self.previous_value = Some(result);
            }
            (Some(_), None) => {}
        }

        self.awaiting_operand = true;
        self.pending_op = Some(op);
    }

    /// Apply the pending operation to the stored and current values.
    /// No-op unless both a previous value and an operation exist.
    fn evaluate(&mut self) {
        let input_value = calc::parse_display(&self.display);

        if let (Some(previous), Some(pending)) = (self.previous_value, self.pending_op) {
            let result = pending.apply(previous, input_value);
            self.display = result.to_string();
            self.previous_value = None;
            self.pending_op = None;
            self.awaiting_operand = true;
        }
    }
}
