use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub id: &'static str,
    pub kind: TokenKind,
    pub value: &'static str,
}

impl PaletteItem {
    const fn new(id: &'static str, kind: TokenKind, value: &'static str) -> Self {
        Self { id, kind, value }
    }

    pub fn token(&self) -> Token {
        Token::of_kind(self.kind, self.value)
    }
}

pub static ITEMS: [PaletteItem; 17] = [
    PaletteItem::new("n0", TokenKind::Number, "0"),
    PaletteItem::new("n1", TokenKind::Number, "1"),
    PaletteItem::new("n2", TokenKind::Number, "2"),
    PaletteItem::new("n3", TokenKind::Number, "3"),
    PaletteItem::new("n4", TokenKind::Number, "4"),
    PaletteItem::new("n5", TokenKind::Number, "5"),
    PaletteItem::new("n6", TokenKind::Number, "6"),
    PaletteItem::new("n7", TokenKind::Number, "7"),
    PaletteItem::new("n8", TokenKind::Number, "8"),
    PaletteItem::new("n9", TokenKind::Number, "9"),
    PaletteItem::new("op+", TokenKind::Operator, "+"),
    PaletteItem::new("op-", TokenKind::Operator, "-"),
    PaletteItem::new("op*", TokenKind::Operator, "*"),
    PaletteItem::new("op/", TokenKind::Operator, "/"),
    PaletteItem::new("lp", TokenKind::Paren, "("),
    PaletteItem::new("rp", TokenKind::Paren, ")"),
    PaletteItem::new("mem", TokenKind::Memory, "M"),
];

pub fn find(id: &str) -> Option<&'static PaletteItem> {
    ITEMS.iter().find(|item| item.id == id)
}
