use std::time::SystemTime;

use crate::{
    audit::{AuditLog, AuditSink, Level},
    config::EvalConfig,
    error::EvalError,
    evaluator::Evaluator,
    token::{self, Token},
};

pub const HISTORY_LIMIT: usize = 100;

const SELF_TEST_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub value: f64,
    pub timestamp: SystemTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateVersion {
    pub id: u64,
    pub name: String,
    pub timestamp: SystemTime,
    pub tokens: Vec<Token>,
}

/// Everything the builder keeps between evaluations: the expression being
/// assembled, the memory slot, past results and saved templates.
pub struct Session<A: AuditSink = AuditLog> {
    evaluator: Evaluator,
    tokens: Vec<Token>,
    memory: Option<f64>,
    result: Option<f64>,
    history: Vec<HistoryEntry>,
    templates: Vec<TemplateVersion>,
    audit: A,
}

impl Session<AuditLog> {
    pub fn new() -> Self {
        Self::with_audit(EvalConfig::default(), AuditLog::new())
    }
}

impl Default for Session<AuditLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AuditSink> Session<A> {
    pub fn with_audit(config: EvalConfig, audit: A) -> Self {
        Self {
            evaluator: Evaluator::new(config),
            tokens: vec![],
            memory: None,
            result: None,
            history: vec![],
            templates: vec![],
            audit,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory
    }

    pub fn result(&self) -> Option<f64> {
        self.result
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn templates(&self) -> &[TemplateVersion] {
        &self.templates
    }

    pub fn audit(&self) -> &A {
        &self.audit
    }

    pub fn expression(&self) -> String {
        token::join(&self.tokens)
    }

    pub fn push(&mut self, token: Token) {
        self.audit.record(
            Level::Info,
            format!("Added token {} to expression", token.text()),
        );
        self.tokens.push(token);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    pub fn clear_tokens(&mut self) {
        self.tokens.clear();
    }

    pub fn clear_all(&mut self) {
        self.tokens.clear();
        self.memory = None;
        self.result = None;
    }

    pub fn set_memory(&mut self, value: f64) {
        self.memory = Some(value);
    }

    pub fn clear_memory(&mut self) {
        self.memory = None;
    }

    /// Sets memory to zero when it is empty, clears it otherwise.
    pub fn toggle_memory(&mut self) {
        self.memory = match self.memory {
            Some(_) => None,
            None => Some(0.0),
        };
    }

    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        match self.evaluator.evaluate(&self.tokens, self.memory) {
            Ok(value) => {
                self.result = Some(value);
                self.history.insert(
                    0,
                    HistoryEntry {
                        expression: self.expression(),
                        value,
                        timestamp: SystemTime::now(),
                    },
                );
                self.history.truncate(HISTORY_LIMIT);
                self.audit
                    .record(Level::Info, format!("Evaluated expression. Result={}", value));
                Ok(value)
            }
            Err(err) => {
                self.result = None;
                self.audit
                    .record(Level::Error, format!("Evaluation error: {}", err));
                Err(err)
            }
        }
    }

    /// Snapshots the current expression under `name`. Blank names are ignored.
    pub fn save_template(&mut self, name: &str) -> Option<&TemplateVersion> {
        let name = name.trim();
        if name.is_empty() {
            self.audit.record(
                Level::Warn,
                "Template save skipped: name is required".to_string(),
            );
            return None;
        }

        let id = self.templates.last().map_or(1, |version| version.id + 1);
        self.templates.push(TemplateVersion {
            id,
            name: name.to_string(),
            timestamp: SystemTime::now(),
            tokens: self.tokens.clone(),
        });
        self.audit
            .record(Level::Info, format!("Saved template version: {}", name));
        self.templates.last()
    }

    pub fn load_template(&mut self, id: u64) -> Option<&[Token]> {
        let version = self.templates.iter().find(|version| version.id == id)?;
        self.tokens = version.tokens.clone();
        Some(&self.tokens)
    }

    /// Runs the built-in sanity cases against the current memory value and
    /// returns a message per failing case.
    pub fn self_test(&mut self) -> Vec<String> {
        let cases = [("2", "+", "3", 5.0), ("10", "/", "2", 5.0), ("6", "*", "7", 42.0)];

        let mut failures = vec![];
        for (left, operator, right, expected) in cases {
            let tokens = [
                Token::number(left),
                Token::operator(operator),
                Token::number(right),
            ];
            match self.evaluator.evaluate(&tokens, self.memory) {
                Ok(value) if (value - expected).abs() <= SELF_TEST_TOLERANCE => {}
                Ok(value) => failures.push(format!("Expected {} got {}", expected, value)),
                Err(_) => failures.push("Eval error".to_string()),
            }
        }

        if failures.is_empty() {
            self.audit.record(Level::Info, "All tests passed".to_string());
        } else {
            self.audit.record(
                Level::Error,
                format!("Tests failed: {} failures", failures.len()),
            );
        }
        failures
    }
}
