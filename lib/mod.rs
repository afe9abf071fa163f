pub mod audit;
pub mod compiler;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod palette;
pub mod session;
pub mod token;

pub use config::{EvalConfig, ParenMode};
pub use engine::{new_engine, Engine};
pub use error::EvalError;
pub use evaluator::{evaluate, Evaluator};
pub use lexer::Lexer;
pub use session::Session;
pub use token::{Token, TokenKind};
