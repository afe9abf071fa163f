use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Number,
    Operator,
    Paren,
    Memory,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Paren => "paren",
            TokenKind::Memory => "memory",
        }
    }
}

impl TryFrom<&str> for TokenKind {
    type Error = TokenError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "number" => Ok(TokenKind::Number),
            "operator" => Ok(TokenKind::Operator),
            "paren" => Ok(TokenKind::Paren),
            "memory" => Ok(TokenKind::Memory),
            _ => Err(TokenError::UnknownKind(name.to_string())),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    UnknownKind(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenError::UnknownKind(kind) => write!(f, "unknown token kind: {}", kind),
        }
    }
}

impl std::error::Error for TokenError {}

/// A single element of an expression as entered from the palette.
///
/// The kind is fixed when the token is built; the text is kept verbatim and
/// only checked against its kind when the expression is evaluated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token {
    Number(String),
    Operator(String),
    Paren(String),
    Memory(String),
}

impl Token {
    pub fn new(kind: &str, text: &str) -> Result<Self, TokenError> {
        Ok(Self::of_kind(TokenKind::try_from(kind)?, text))
    }

    pub fn of_kind(kind: TokenKind, text: &str) -> Self {
        let text = text.to_string();
        match kind {
            TokenKind::Number => Token::Number(text),
            TokenKind::Operator => Token::Operator(text),
            TokenKind::Paren => Token::Paren(text),
            TokenKind::Memory => Token::Memory(text),
        }
    }

    pub fn number(text: &str) -> Self {
        Token::Number(text.to_string())
    }

    pub fn operator(text: &str) -> Self {
        Token::Operator(text.to_string())
    }

    pub fn paren(text: &str) -> Self {
        Token::Paren(text.to_string())
    }

    pub fn memory() -> Self {
        Token::Memory("M".to_string())
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::Paren(_) => TokenKind::Paren,
            Token::Memory(_) => TokenKind::Memory,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Token::Number(text)
            | Token::Operator(text)
            | Token::Paren(text)
            | Token::Memory(text) => text,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Renders a token sequence the way the builder canvas shows it.
pub fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.text())
        .collect::<Vec<&str>>()
        .join(" ")
}
