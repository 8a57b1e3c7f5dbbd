use serde::{Deserialize, Serialize};

use crate::domain::calc::CalcOp;

/// Messages specific to CalculatorState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalculatorMsg {
    /// A digit or a decimal point entered on the pad.
    InputToken(char),
    /// An operator chosen; applies any pending operation first.
    ChooseOperation(CalcOp),
    /// The `=` key.
    Evaluate,
    /// Reset to the initial state.
    Clear,
}
