//! Output format configuration for rendered records
//!
//! Provides different output formats for log records:
//! - Text: Human-readable format (default)
//! - Json: Machine-readable JSON format
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::hierarchy::ROOT_NAME;
use super::record::LogRecord;
use super::timestamp::TimestampFormat;

/// Output format for log records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO   ] [org.foo     ] Request processed`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","logger":"org.foo","message":"Request processed"}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `timestamp=2025-01-08T10:30:45.123Z level=INFO logger=org.foo message="Request processed"`
    Logfmt,
}

impl OutputFormat {
    /// Format a log record according to this output format
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(record, timestamp_format),
            OutputFormat::Json => self.format_json(record, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(record, timestamp_format),
        }
    }

    /// Render the logger name, substituting a marker for the root's empty name
    fn display_name(record: &LogRecord) -> &str {
        if record.logger_name == ROOT_NAME {
            "<root>"
        } else {
            &record.logger_name
        }
    }

    /// Format as human-readable text
    fn format_text(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        format!(
            "[{}] [{:7}] [{:12}] {}",
            timestamp_format.format(&record.timestamp),
            record.level.to_str(),
            Self::display_name(record),
            record.message
        )
    }

    /// Format as JSON
    fn format_json(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            self.format_timestamp_json(record, timestamp_format),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        json_obj.insert(
            "logger".to_string(),
            serde_json::Value::String(record.logger_name.clone()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format timestamp for JSON output
    fn format_timestamp_json(
        &self,
        record: &LogRecord,
        timestamp_format: &TimestampFormat,
    ) -> serde_json::Value {
        match timestamp_format {
            TimestampFormat::Unix => {
                serde_json::Value::Number(record.timestamp.timestamp().into())
            }
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(record.timestamp.timestamp_millis().into())
            }
            _ => serde_json::Value::String(timestamp_format.format(&record.timestamp)),
        }
    }

    /// Format as logfmt (key=value pairs)
    fn format_logfmt(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut parts = Vec::new();

        parts.push(format!(
            "timestamp={}",
            self.escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ));
        parts.push(format!("level={}", record.level.to_str()));
        parts.push(format!(
            "logger={}",
            self.escape_logfmt_value(Self::display_name(record))
        ));
        // Message is always quoted for safety
        parts.push(format!("message={}", self.quote_logfmt_value(&record.message)));

        parts.join(" ")
    }

    /// Escape a logfmt value (quote if contains spaces)
    fn escape_logfmt_value(&self, value: &str) -> String {
        if value.contains(' ') || value.contains('"') || value.contains('=') {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    /// Quote a logfmt value
    fn quote_logfmt_value(&self, value: &str) -> String {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
