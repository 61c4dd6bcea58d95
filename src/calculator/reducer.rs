//! Calculator state, actions and reducer.

use super::display::fix_float;
use super::expr::evaluate;
use crate::core::{Action, Reducer};
use serde::{Deserialize, Serialize};

/// Text shown when the expression cannot be evaluated.
pub const ERROR_DISPLAY: &str = "Error :(";

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Display state of the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Previously evaluated expression, shown for context
    pub last: String,
    /// Expression being typed; never empty
    pub current: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            last: String::new(),
            current: "0".to_string(),
        }
    }
}

/// Button presses understood by the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "number", rename_all = "UPPERCASE")]
pub enum CalculatorAction {
    Seed,
    Clear,
    Back,
    Add,
    Minus,
    Multi,
    Divide,
    Dot,
    Number(String),
    Equal,
}

impl Action for CalculatorAction {
    fn name(&self) -> &str {
        match self {
            Self::Seed => "SEED",
            Self::Clear => "CLEAR",
            Self::Back => "BACK",
            Self::Add => "ADD",
            Self::Minus => "MINUS",
            Self::Multi => "MULTI",
            Self::Divide => "DIVIDE",
            Self::Dot => "DOT",
            Self::Number(_) => "NUMBER",
            Self::Equal => "EQUAL",
        }
    }

    fn seed() -> Self {
        Self::Seed
    }
}

/// Reducer implementing the calculator's transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorReducer;

impl CalculatorReducer {
    /// Append `op`, replacing a trailing operator instead of stacking.
    fn push_operator(state: &CalculatorState, op: char) -> CalculatorState {
        let mut current = state.current.clone();
        if current.ends_with(OPERATORS) {
            current.pop();
        }
        current.push(op);
        CalculatorState {
            current,
            ..state.clone()
        }
    }

    fn back(state: &CalculatorState) -> CalculatorState {
        if state.current == "0" {
            return state.clone();
        }
        let mut current = state.current.clone();
        current.pop();
        if current.is_empty() {
            current.push('0');
        }
        CalculatorState {
            current,
            ..state.clone()
        }
    }

    fn dot(state: &CalculatorState) -> CalculatorState {
        if state.current.ends_with('.') {
            return state.clone();
        }
        CalculatorState {
            current: format!("{}.", state.current),
            ..state.clone()
        }
    }

    fn number(state: &CalculatorState, digits: &str) -> CalculatorState {
        let current = if state.current == "0" {
            digits.to_string()
        } else {
            format!("{}{}", state.current, digits)
        };
        // Dispatching an empty number must not empty the display.
        let current = if current.is_empty() {
            "0".to_string()
        } else {
            current
        };
        CalculatorState {
            current,
            ..state.clone()
        }
    }

    fn equal(state: &CalculatorState) -> CalculatorState {
        let current = match evaluate(&state.current) {
            Ok(value) => fix_float(value),
            Err(error) => {
                tracing::debug!(expression = %state.current, %error, "evaluation failed");
                ERROR_DISPLAY.to_string()
            }
        };
        CalculatorState {
            last: state.current.clone(),
            current,
        }
    }
}

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Action = CalculatorAction;

    fn initial_state(&self) -> CalculatorState {
        CalculatorState::default()
    }

    fn reduce(&self, state: &CalculatorState, action: &CalculatorAction) -> CalculatorState {
        match action {
            CalculatorAction::Clear => self.initial_state(),
            CalculatorAction::Back => Self::back(state),
            CalculatorAction::Add => Self::push_operator(state, '+'),
            CalculatorAction::Minus => Self::push_operator(state, '-'),
            CalculatorAction::Multi => Self::push_operator(state, '*'),
            CalculatorAction::Divide => Self::push_operator(state, '/'),
            CalculatorAction::Dot => Self::dot(state),
            CalculatorAction::Number(digits) => Self::number(state, digits),
            CalculatorAction::Equal => Self::equal(state),
            CalculatorAction::Seed => state.clone(),
        }
    }
}
