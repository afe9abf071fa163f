/// How a `)` with no matching `(` on the operator stack is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParenMode {
    /// Fail with `MismatchedParentheses`, the same as a leftover `(`.
    #[default]
    Strict,
    /// Ignore the stray `)` and keep scanning.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    pub parens: ParenMode,
}

impl EvalConfig {
    pub fn lenient() -> Self {
        Self {
            parens: ParenMode::Lenient,
        }
    }
}
