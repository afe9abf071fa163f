use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
}

impl Opcode {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Opcode::Add),
            "-" => Some(Opcode::Sub),
            "*" => Some(Opcode::Mul),
            "/" => Some(Opcode::Div),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Opcode::Add => "Add",
            Opcode::Sub => "Sub",
            Opcode::Mul => "Mul",
            Opcode::Div => "Div",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Opcode::Add => "+",
            Opcode::Sub => "-",
            Opcode::Mul => "*",
            Opcode::Div => "/",
        }
    }

    /// Higher binds tighter. Operators of equal precedence associate to the left.
    pub fn precedence(&self) -> u8 {
        match self {
            Opcode::Add | Opcode::Sub => 1,
            Opcode::Mul | Opcode::Div => 2,
        }
    }

    /// `left` is the operand that was pushed first.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Opcode::Add => left + right,
            Opcode::Sub => left - right,
            Opcode::Mul => left * right,
            Opcode::Div => left / right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Constant(f64),
    Operation(Opcode),
}

/// A postfix program: constants and operators in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Instructions(Vec<Instruction>);

impl Instructions {
    pub fn new() -> Self {
        Self(vec![])
    }

    #[cfg(test)]
    pub fn from(instructions: Vec<Instruction>) -> Self {
        Self(instructions)
    }

    pub fn inner(&self) -> &Vec<Instruction> {
        &self.0
    }

    pub fn push(&mut self, instruction: Instruction) {
        self.0.push(instruction);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The program in reverse Polish notation, e.g. `2 3 4 * +`.
    pub fn postfix(&self) -> String {
        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Constant(value) => value.to_string(),
                Instruction::Operation(opcode) => opcode.symbol().to_string(),
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl Default for Instructions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Instructions {
    /// Print the instructions in a human-readable format
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (position, instruction) in self.0.iter().enumerate() {
            write!(f, "{:04} ", position)?;
            match instruction {
                Instruction::Constant(value) => write!(f, "Constant {}", value)?,
                Instruction::Operation(opcode) => write!(f, "{}", opcode.name())?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        let tests = vec![
            ("+", Some(Opcode::Add)),
            ("-", Some(Opcode::Sub)),
            ("*", Some(Opcode::Mul)),
            ("/", Some(Opcode::Div)),
            ("^", None),
            ("", None),
        ];

        for (symbol, expected) in tests {
            assert_eq!(Opcode::from_symbol(symbol), expected);
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Opcode::Sub.apply(7.0, 2.0), 5.0);
        assert_eq!(Opcode::Div.apply(9.0, 3.0), 3.0);
        assert_eq!(Opcode::Div.apply(5.0, 0.0), f64::INFINITY);
        assert!(Opcode::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_instructions_string() {
        let instructions = Instructions::from(vec![
            Instruction::Constant(2.0),
            Instruction::Constant(3.5),
            Instruction::Constant(4.0),
            Instruction::Operation(Opcode::Mul),
            Instruction::Operation(Opcode::Add),
            Instruction::Constant(1.0),
            Instruction::Operation(Opcode::Sub),
            Instruction::Operation(Opcode::Div),
        ]);

        let expected = r#"0000 Constant 2
0001 Constant 3.5
0002 Constant 4
0003 Mul
0004 Add
0005 Constant 1
0006 Sub
0007 Div
"#;

        assert_eq!(instructions.to_string(), expected);
        assert_eq!(instructions.postfix(), "2 3.5 4 * + 1 - /");
    }
}
