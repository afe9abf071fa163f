use crate::{error::EvalError, token::Token};

/// Turns typed text such as `(2 + 3) * M` into palette tokens.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    char: Option<char>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let char = chars.first().copied();
        Self {
            chars,
            position: 0,
            char,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, EvalError> {
        while self.char.is_some_and(|char| char.is_whitespace()) {
            self.read_char();
        }

        let token = match self.char {
            Some(char) => match char {
                '+' | '-' | '*' | '/' => Some(Token::Operator(char.to_string())),
                '(' | ')' => Some(Token::Paren(char.to_string())),
                // Number text is validated when the expression is compiled.
                _ if char.is_ascii_digit() || char == '.' => {
                    let literal = self.read_until(|char| !char.is_ascii_digit() && char != '.');
                    Some(Token::Number(literal))
                }
                _ if char.is_alphabetic() => {
                    let literal = self.read_until(|char| !char.is_alphanumeric());
                    match literal.as_str() {
                        "M" | "m" => Some(Token::Memory("M".to_string())),
                        _ => return Err(EvalError::InvalidToken(literal)),
                    }
                }
                _ => return Err(EvalError::InvalidToken(char.to_string())),
            },
            None => None,
        };

        self.read_char();

        Ok(token)
    }

    fn read_char(&mut self) {
        self.position += 1;
        self.char = self.chars.get(self.position).copied();
    }

    fn read_until(&mut self, condition: impl Fn(char) -> bool) -> String {
        let mut literal = String::new();
        while let Some(char) = self.char {
            if condition(char) {
                self.position -= 1;
                break;
            }
            literal.push(char);
            self.read_char();
        }
        literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer() {
        let input = "(12 + 3.5) * M - 4/m";

        let expected = vec![
            Token::paren("("),
            Token::number("12"),
            Token::operator("+"),
            Token::number("3.5"),
            Token::paren(")"),
            Token::operator("*"),
            Token::memory(),
            Token::operator("-"),
            Token::number("4"),
            Token::operator("/"),
            Token::memory(),
        ];

        assert_eq!(Lexer::new(input).tokenize().unwrap(), expected);
    }

    #[test]
    fn test_lexer_without_spaces() {
        let tokens = Lexer::new("2+3*4").tokenize().unwrap();
        let texts: Vec<&str> = tokens.iter().map(|token| token.text()).collect();
        assert_eq!(texts, vec!["2", "+", "3", "*", "4"]);
    }

    #[test]
    fn test_lexer_empty() {
        assert_eq!(Lexer::new("").tokenize().unwrap(), vec![]);
        assert_eq!(Lexer::new("   \t ").tokenize().unwrap(), vec![]);
    }

    #[test]
    fn test_lexer_keeps_malformed_numbers() {
        let tokens = Lexer::new("1.2.3 .5").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::number("1.2.3"), Token::number(".5")]);
    }

    #[test]
    fn test_lexer_invalid() {
        let tests = vec![
            ("2 + abc", "abc"),
            ("2 ^ 3", "^"),
            ("Mem + 1", "Mem"),
            ("[1]", "["),
        ];

        for (input, text) in tests {
            assert_eq!(
                Lexer::new(input).tokenize(),
                Err(EvalError::InvalidToken(text.to_string()))
            );
        }
    }
}
