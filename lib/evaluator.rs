use crate::{
    compiler::{Compiler, Instructions, VirtualMachine},
    config::EvalConfig,
    error::EvalError,
    token::Token,
};

/// Evaluates a token sequence, substituting `memory` for memory tokens.
///
/// Pure: the same tokens and memory always give the same result. Division
/// by zero follows IEEE-754 and yields an infinity or NaN rather than an error.
pub fn evaluate(tokens: &[Token], memory: Option<f64>) -> Result<f64, EvalError> {
    Evaluator::default().evaluate(tokens, memory)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(&self, tokens: &[Token], memory: Option<f64>) -> Result<f64, EvalError> {
        let instructions = self.compile(tokens, memory)?;
        VirtualMachine::new().run(&instructions)
    }

    pub fn compile(
        &self,
        tokens: &[Token],
        memory: Option<f64>,
    ) -> Result<Instructions, EvalError> {
        Compiler::new(self.config).compile(tokens, memory)
    }
}
