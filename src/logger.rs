//! Line-oriented report output.
//!
//! Report lines are written through the [`Sink`] trait so the engine does
//! not care whether they end up on stdout or in a buffer. Process-level
//! diagnostics go through `tracing` instead and never reach a sink.

use std::fmt::Write as _;

use serde::Deserialize;

pub const LOG_PREFIX: &str = "[bundle-restrict]";

/// Minimum level a [`Logger`] lets through. Error lines are always emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Error,
}

/// Destination for report lines.
pub trait Sink {
    fn info(&mut self, msg: &str);
    fn debug(&mut self, msg: &str);
    fn error(&mut self, msg: &str);
}

#[derive(Debug)]
enum Output {
    Console,
    Capture(String),
}

#[derive(Debug)]
pub struct Logger {
    level: Level,
    output: Output,
}

impl Logger {
    /// Logger that prints to stdout.
    pub fn console(level: Level) -> Self {
        Self {
            level,
            output: Output::Console,
        }
    }

    /// Logger that buffers every line; read it back with [`Logger::captured`].
    pub fn capture(level: Level) -> Self {
        Self {
            level,
            output: Output::Capture(String::new()),
        }
    }

    /// Everything written so far. Empty for console loggers.
    pub fn captured(&self) -> &str {
        match &self.output {
            Output::Console => "",
            Output::Capture(buf) => buf,
        }
    }

    fn write(&mut self, msg: &str, label: Option<&str>) {
        let line = match label {
            Some(label) => format!("{LOG_PREFIX} {label}: {msg}"),
            None => format!("{LOG_PREFIX} {msg}"),
        };
        match &mut self.output {
            Output::Console => println!("{line}"),
            Output::Capture(buf) => {
                let _ = writeln!(buf, "{line}");
            }
        }
    }
}

impl Sink for Logger {
    fn info(&mut self, msg: &str) {
        if self.level == Level::Error {
            return;
        }
        self.write(msg, None);
    }

    fn debug(&mut self, msg: &str) {
        if self.level != Level::Debug {
            return;
        }
        self.write(msg, Some("Debug"));
    }

    fn error(&mut self, msg: &str) {
        self.write(msg, Some("Error"));
    }
}

/// Sink that collects bare lines without prefix or filtering.
impl Sink for Vec<String> {
    fn info(&mut self, msg: &str) {
        self.push(msg.to_owned());
    }

    fn debug(&mut self, _msg: &str) {}

    fn error(&mut self, msg: &str) {
        self.push(msg.to_owned());
    }
}
