use crate::error::EvalError;

use super::code::{Instruction, Instructions, Opcode};

/// Reduces a postfix program with a single value stack.
pub struct VirtualMachine {
    stack: Vec<f64>,
}

impl VirtualMachine {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
        }
    }

    pub fn run(&mut self, instructions: &Instructions) -> Result<f64, EvalError> {
        if instructions.is_empty() {
            return Err(EvalError::InvalidExpression);
        }

        self.stack.clear();
        self.stack.reserve(instructions.len());

        for instruction in instructions.inner() {
            match instruction {
                Instruction::Constant(value) => self.push(*value),
                Instruction::Operation(opcode) => self.execute_binary_operation(*opcode)?,
            }
        }

        if self.stack.len() != 1 {
            return Err(EvalError::InvalidExpression);
        }
        self.pop()
    }

    fn execute_binary_operation(&mut self, opcode: Opcode) -> Result<(), EvalError> {
        let right = self.pop()?;
        let left = self.pop()?;
        self.push(opcode.apply(left, right));
        Ok(())
    }

    fn push(&mut self, value: f64) {
        self.stack.push(value);
    }

    fn pop(&mut self) -> Result<f64, EvalError> {
        self.stack.pop().ok_or(EvalError::InvalidExpression)
    }
}

impl Default for VirtualMachine {
    fn default() -> Self {
        Self::new()
    }
}
