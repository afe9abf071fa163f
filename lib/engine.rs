use anyhow::{anyhow, bail, Context, Result};

use crate::{config::EvalConfig, evaluator::Evaluator, lexer::Lexer, session::Session};

pub trait Engine {
    fn run(&mut self, input: &str) -> Result<String>;
}

pub fn new_engine(config: EvalConfig) -> Box<dyn Engine> {
    Box::new(EngineImpl {
        config,
        session: Session::with_audit(config, Default::default()),
    })
}

struct EngineImpl {
    config: EvalConfig,
    session: Session,
}

impl Engine for EngineImpl {
    fn run(&mut self, input: &str) -> Result<String> {
        let input = input.trim();
        match input.strip_prefix(':') {
            Some(command) => self.run_command(command),
            None => self.run_expression(input),
        }
    }
}

impl EngineImpl {
    fn run_expression(&mut self, input: &str) -> Result<String> {
        let tokens = Lexer::new(input).tokenize()?;

        self.session.clear_tokens();
        for token in tokens {
            self.session.push(token);
        }

        let value = self.session.evaluate()?;
        Ok(format_value(value))
    }

    fn run_command(&mut self, command: &str) -> Result<String> {
        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        let output = match (name, argument) {
            ("eval", "") => format_value(self.session.evaluate()?),
            ("clear", "") => {
                self.session.clear_all();
                "cleared".to_string()
            }
            ("undo", "") => {
                self.session
                    .pop()
                    .ok_or(anyhow!("expression is already empty"))?;
                self.session.expression()
            }
            ("mem", "") => match self.session.memory() {
                Some(value) => format_value(value),
                None => "n/a".to_string(),
            },
            ("mem", "clear") => {
                self.session.clear_memory();
                "n/a".to_string()
            }
            ("mem", "toggle") => {
                self.session.toggle_memory();
                self.session.memory().map_or("n/a".to_string(), format_value)
            }
            ("mem", value) => {
                let value: f64 = value
                    .parse()
                    .with_context(|| format!("invalid memory value: {}", value))?;
                self.session.set_memory(value);
                format_value(value)
            }
            ("history", "") => self
                .session
                .history()
                .iter()
                .map(|entry| format!("{} = {}", entry.expression, format_value(entry.value)))
                .collect::<Vec<String>>()
                .join("\n"),
            ("save", name) => {
                let version = self
                    .session
                    .save_template(name)
                    .ok_or(anyhow!("template name is required"))?;
                format!("saved {} as #{}", version.name, version.id)
            }
            ("templates", "") => self
                .session
                .templates()
                .iter()
                .map(|version| {
                    format!(
                        "#{} {}: {}",
                        version.id,
                        version.name,
                        crate::token::join(&version.tokens)
                    )
                })
                .collect::<Vec<String>>()
                .join("\n"),
            ("load", id) => {
                let id: u64 = id
                    .parse()
                    .with_context(|| format!("invalid template id: {}", id))?;
                self.session
                    .load_template(id)
                    .ok_or(anyhow!("no template with id {}", id))?;
                self.session.expression()
            }
            ("rpn", expression) => {
                let tokens = Lexer::new(expression).tokenize()?;
                Evaluator::new(self.config)
                    .compile(&tokens, self.session.memory())?
                    .postfix()
            }
            ("audit", "") => self
                .session
                .audit()
                .entries()
                .iter()
                .map(|entry| entry.to_string())
                .collect::<Vec<String>>()
                .join("\n"),
            ("test", "") => {
                let failures = self.session.self_test();
                if !failures.is_empty() {
                    bail!("tests failed: {}", failures.join("; "));
                }
                "all tests passed".to_string()
            }
            _ => bail!("unknown command: :{}", command),
        };

        Ok(output)
    }
}

/// Formats a result the way the builder displays it.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}
