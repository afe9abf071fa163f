use crate::{
    config::{EvalConfig, ParenMode},
    error::EvalError,
    token::Token,
};

use super::code::{Instruction, Instructions, Opcode};

/// A token after memory references have been replaced by their value.
#[derive(Debug, Clone, PartialEq)]
enum Resolved<'a> {
    Value(f64),
    Token(&'a Token),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    LeftParen,
    Operation(Opcode),
}

/// Converts an infix token sequence into a postfix program using the
/// shunting-yard algorithm.
pub struct Compiler {
    config: EvalConfig,
}

impl Compiler {
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    pub fn compile(
        &self,
        tokens: &[Token],
        memory: Option<f64>,
    ) -> Result<Instructions, EvalError> {
        let resolved = resolve(tokens, memory)?;

        let mut output = Instructions::new();
        let mut operators: Vec<StackEntry> = Vec::new();

        for item in resolved {
            let token = match item {
                Resolved::Value(value) => {
                    output.push(Instruction::Constant(value));
                    continue;
                }
                Resolved::Token(token) => token,
            };

            // The kind tag only matters for memory; everything else is read by its text.
            let text = token.text();
            match text {
                "(" => operators.push(StackEntry::LeftParen),
                ")" => self.close_paren(&mut operators, &mut output)?,
                _ if is_number_literal(text) => {
                    output.push(Instruction::Constant(parse_number(text)?))
                }
                _ => {
                    let opcode = Opcode::from_symbol(text)
                        .ok_or_else(|| EvalError::InvalidToken(text.to_string()))?;
                    while let Some(StackEntry::Operation(top)) = operators.last() {
                        if top.precedence() < opcode.precedence() {
                            break;
                        }
                        output.push(Instruction::Operation(*top));
                        operators.pop();
                    }
                    operators.push(StackEntry::Operation(opcode));
                }
            }
        }

        while let Some(entry) = operators.pop() {
            match entry {
                StackEntry::Operation(opcode) => output.push(Instruction::Operation(opcode)),
                StackEntry::LeftParen => return Err(EvalError::MismatchedParentheses),
            }
        }

        Ok(output)
    }

    fn close_paren(
        &self,
        operators: &mut Vec<StackEntry>,
        output: &mut Instructions,
    ) -> Result<(), EvalError> {
        while let Some(entry) = operators.pop() {
            match entry {
                StackEntry::LeftParen => return Ok(()),
                StackEntry::Operation(opcode) => output.push(Instruction::Operation(opcode)),
            }
        }

        match self.config.parens {
            ParenMode::Strict => Err(EvalError::MismatchedParentheses),
            ParenMode::Lenient => Ok(()),
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

// Every memory reference is checked before any other token is looked at, so a
// missing memory value wins over an invalid token further along.
fn resolve(tokens: &[Token], memory: Option<f64>) -> Result<Vec<Resolved<'_>>, EvalError> {
    tokens
        .iter()
        .map(|token| match token {
            Token::Memory(_) => memory
                .map(Resolved::Value)
                .ok_or(EvalError::MemoryUninitialized),
            token => Ok(Resolved::Token(token)),
        })
        .collect()
}

/// Accepts unsigned integer or decimal literals only: `12`, `0.5`, but not
/// `.5`, `5.`, `-1` or `1e3`.
pub fn is_number_literal(text: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    }
}

fn parse_number(text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>()
        .map_err(|_| EvalError::InvalidToken(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &[&str]) -> Vec<Token> {
        input
            .iter()
            .map(|text| match *text {
                "+" | "-" | "*" | "/" => Token::operator(text),
                "(" | ")" => Token::paren(text),
                "M" => Token::memory(),
                _ => Token::number(text),
            })
            .collect()
    }

    #[test]
    fn test_postfix_order() {
        let tests = vec![
            (vec!["2", "+", "3"], "2 3 +"),
            (vec!["2", "+", "3", "*", "4"], "2 3 4 * +"),
            (vec!["(", "2", "+", "3", ")", "*", "4"], "2 3 + 4 *"),
            (vec!["8", "-", "3", "-", "2"], "8 3 - 2 -"),
            (vec!["8", "/", "4", "*", "2"], "8 4 / 2 *"),
            (vec!["1", "*", "2", "+", "3", "*", "4"], "1 2 * 3 4 * +"),
            (vec!["(", "(", "1", ")", ")"], "1"),
            (vec!["2", "+"], "2 +"),
            (vec![], ""),
        ];

        let compiler = Compiler::default();
        for (input, expected) in tests {
            let instructions = compiler.compile(&tokens(&input), None).unwrap();
            assert_eq!(instructions.postfix(), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_memory_resolution() {
        let compiler = Compiler::default();
        let instructions = compiler
            .compile(&tokens(&["M", "*", "M"]), Some(1.5))
            .unwrap();
        assert_eq!(instructions.postfix(), "1.5 1.5 *");

        assert_eq!(
            compiler.compile(&tokens(&["M", "+", "1"]), None),
            Err(EvalError::MemoryUninitialized)
        );
        assert_eq!(
            compiler.compile(&tokens(&["abc", "+", "M"]), None),
            Err(EvalError::MemoryUninitialized)
        );
    }

    #[test]
    fn test_invalid_tokens() {
        let tests = vec![
            (vec![Token::number("abc")], "abc"),
            (vec![Token::number(".5")], ".5"),
            (vec![Token::number("5.")], "5."),
            (vec![Token::number("-1")], "-1"),
            (vec![Token::number("1e3")], "1e3"),
            (vec![Token::number("")], ""),
            (vec![Token::number("1"), Token::operator("^"), Token::number("2")], "^"),
            (vec![Token::paren("[")], "["),
            (vec![Token::operator("M")], "M"),
        ];

        let compiler = Compiler::default();
        for (input, text) in tests {
            assert_eq!(
                compiler.compile(&input, None),
                Err(EvalError::InvalidToken(text.to_string()))
            );
        }
    }

    #[test]
    fn test_text_decides_role() {
        let tests = vec![
            (
                vec![
                    Token::new("operator", "(").unwrap(),
                    Token::number("2"),
                    Token::operator("+"),
                    Token::number("3"),
                    Token::paren(")"),
                    Token::operator("*"),
                    Token::number("4"),
                ],
                "2 3 + 4 *",
            ),
            (
                vec![
                    Token::number("2"),
                    Token::new("number", "+").unwrap(),
                    Token::number("3"),
                ],
                "2 3 +",
            ),
            (vec![Token::new("paren", "7").unwrap()], "7"),
        ];

        let compiler = Compiler::default();
        for (input, expected) in tests {
            let instructions = compiler.compile(&input, None).unwrap();
            assert_eq!(instructions.postfix(), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_mismatched_parentheses() {
        let strict = Compiler::default();
        let lenient = Compiler::new(EvalConfig::lenient());

        let unclosed = tokens(&["(", "2", "+", "3"]);
        for compiler in [&strict, &lenient] {
            assert_eq!(
                compiler.compile(&unclosed, None),
                Err(EvalError::MismatchedParentheses)
            );
        }

        let stray = tokens(&["2", "+", "3", ")", "*", "4"]);
        assert_eq!(
            strict.compile(&stray, None),
            Err(EvalError::MismatchedParentheses)
        );
        assert_eq!(lenient.compile(&stray, None).unwrap().postfix(), "2 3 + 4 *");
    }

    #[test]
    fn test_number_literal() {
        let tests = vec![
            ("0", true),
            ("42", true),
            ("3.14", true),
            ("007.50", true),
            ("1.2.3", false),
            (".", false),
            ("١", false),
            (" 1", false),
        ];

        for (text, expected) in tests {
            assert_eq!(is_number_literal(text), expected, "text: {:?}", text);
        }
    }
}
