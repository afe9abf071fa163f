use std::{fmt, time::SystemTime};

/// Oldest entries are dropped once a log holds this many.
pub const AUDIT_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: u64,
    pub timestamp: SystemTime,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.id, self.level, self.message)
    }
}

/// Receives application events. The evaluator never calls this; whoever
/// drives the evaluator reports what happened.
pub trait AuditSink {
    fn record(&mut self, level: Level, message: String);
}

#[derive(Debug)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    next_id: u64,
    limit: usize,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::with_limit(AUDIT_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: vec![],
            next_id: 0,
            limit,
        }
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn count(&self, level: Level) -> usize {
        self.entries.iter().filter(|entry| entry.level == level).count()
    }

    pub fn last(&self) -> Option<&AuditEntry> {
        self.entries.last()
    }
}

impl AuditSink for AuditLog {
    fn record(&mut self, level: Level, message: String) {
        self.next_id += 1;
        self.entries.push(AuditEntry {
            id: self.next_id,
            timestamp: SystemTime::now(),
            level,
            message,
        });

        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}
