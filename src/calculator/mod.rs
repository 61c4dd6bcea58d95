//! Calculator reducer over `{ last, current }` display state.
//!
//! Button presses are dispatched as [`CalculatorAction`]s. `EQUAL` runs
//! the accumulated expression through a small explicit evaluator; a
//! malformed expression turns the display into [`ERROR_DISPLAY`] instead
//! of failing.

mod display;
mod expr;
mod reducer;

pub use display::{fix_float, prettify_display};
pub use expr::{evaluate, EvalError};
pub use reducer::{CalculatorAction, CalculatorReducer, CalculatorState, ERROR_DISPLAY};
