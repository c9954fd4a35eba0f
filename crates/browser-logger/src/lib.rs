//! Browser Logger
//!
//! A `tracing` layer that formats records with a timestamp and forwards them
//! to the browser console.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// A single captured log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:>5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Receives every record that passes the level filter
pub type Sink = Box<dyn Fn(LogRecord) + Send + Sync>;

/// Layer that formats events and hands them to a [`Sink`]
pub struct BrowserLayer {
    sink: Sink,
    max_level: Level,
}

impl BrowserLayer {
    /// Layer writing to the browser console
    pub fn new(level: Level) -> Self {
        Self::with_sink(level, Box::new(|record| forward_to_console(&record)))
    }

    pub fn with_sink(level: Level, sink: Sink) -> Self {
        Self { sink, max_level: level }
    }
}

impl<S: Subscriber> Layer<S> for BrowserLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // More verbose levels compare greater
        if *metadata.level() > self.max_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        (self.sink)(LogRecord {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.join(" ")
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn forward_to_console(record: &LogRecord) {
    let line = wasm_bindgen::JsValue::from_str(&record.to_string());
    if record.level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if record.level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else if record.level == Level::INFO {
        web_sys::console::info_1(&line);
    } else if record.level == Level::DEBUG {
        web_sys::console::debug_1(&line);
    } else {
        web_sys::console::log_1(&line);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn forward_to_console(_record: &LogRecord) {}

/// Install the console layer as the global subscriber
pub fn init(level: Level) -> Result<(), SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(BrowserLayer::new(level)))
}
