use std::fmt;

/// Every way an evaluation can fail. None of them are retryable: the same
/// input always fails the same way.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum EvalError {
    /// A memory token was used but no memory value was supplied.
    MemoryUninitialized,
    /// Token text that is not a number, operator or parenthesis of its kind.
    InvalidToken(String),
    /// A parenthesis was left unmatched.
    MismatchedParentheses,
    /// The value stack did not end with exactly one value.
    InvalidExpression,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalError::MemoryUninitialized => write!(f, "memory not initialized"),
            EvalError::InvalidToken(text) => write!(f, "invalid token: {}", text),
            EvalError::MismatchedParentheses => write!(f, "mismatched parentheses"),
            EvalError::InvalidExpression => write!(f, "invalid expression"),
        }
    }
}

impl std::error::Error for EvalError {}
