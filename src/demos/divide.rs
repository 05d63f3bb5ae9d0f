//! # Error Returns
//!
//! Division that reports a zero divisor as an error value instead of
//! producing `inf`/`NaN`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DivideError {
    DivisionByZero { dividend: f64 },
}

impl fmt::Display for DivideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivideError::DivisionByZero { dividend } => {
                write!(f, "cannot divide {dividend} by zero")
            }
        }
    }
}

impl std::error::Error for DivideError {}

pub fn divide(a: f64, b: f64) -> Result<f64, DivideError> {
    if b == 0.0 {
        return Err(DivideError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// Either the quotient or the error, never both.
pub fn report(a: f64, b: f64) -> String {
    match divide(a, b) {
        Ok(result) => format!("{a} / {b} = {result}"),
        Err(e) => format!("error: {e}"),
    }
}
