use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub enum SdgError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Upload errors
    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },
    #[error("Could not decode '{source_name}' as UTF-8: {reason}")]
    DecodeError {
        source_name: String,
        reason: String,
    },

    // Network/API errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Report store errors
    #[error("No report stored for year {year}")]
    ReportNotFound {
        year: i32,
        available: Vec<i32>,
    },

    // User input errors
    #[error("Invalid input '{input}': expected {expected}")]
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl SdgError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode_error(source_name: &str, reason: &str) -> Self {
        Self::DecodeError {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(ToString::to_string),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
        }
    }

    pub fn input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn is_network(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. }
            | Self::UserInputError { .. }
            | Self::ConfigurationError { .. }
            | Self::ReportNotFound { .. } => true,
            Self::ConfigurationFileError { .. }
            | Self::FileOperationError { .. }
            | Self::DecodeError { .. }
            | Self::ParseError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. }
            | Self::DecodeError { .. }
            | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } | Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. }
            | Self::ReportNotFound { .. }
            | Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        let mut msg = self.to_string();
        match self {
            Self::ConfigurationError { field, suggestion, .. } => {
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
            }
            Self::ConfigurationFileError { .. } => {
                msg.push_str("\n💡 Check file permissions and syntax");
            }
            Self::FileOperationError { .. } => {
                msg.push_str("\n💡 Check file permissions and path");
            }
            Self::DecodeError { .. } => {
                msg.push_str("\n💡 Upload a plain UTF-8 text file, one statement per line");
            }
            Self::NetworkError { url, status_code, .. } => {
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
            }
            Self::ParseError { line_number, .. } => {
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
            }
            Self::ReportNotFound { available, .. } => {
                if available.is_empty() {
                    msg.push_str("\n💡 Upload a report first");
                } else {
                    let years: Vec<String> = available.iter().map(ToString::to_string).collect();
                    msg.push_str(&format!("\n💡 Available years: {}", years.join(", ")));
                }
            }
            Self::UserInputError { suggestion, .. } => {
                msg.push_str(&format!("\n💡 {suggestion}"));
            }
            Self::SystemError { .. } => {}
        }
        msg
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for classifier operations
pub type SdgResult<T> = Result<T, SdgError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &SdgError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for SdgError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SdgError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse_error("JSON", Some(error.line()), &error.to_string())
    }
}

impl From<toml::de::Error> for SdgError {
    fn from(error: toml::de::Error) -> Self {
        Self::parse_error("TOML", None, error.message())
    }
}

impl From<reqwest::Error> for SdgError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError {
            operation: "classification request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_are_recoverable_medium_severity() {
        let error = SdgError::network_error("classify", Some("http://localhost"), Some(503), "unavailable");
        assert!(error.is_network());
        assert!(error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::Medium);

        let msg = error.user_message();
        assert!(msg.contains("(Status: 503)"));
        assert!(msg.contains("(URL: http://localhost)"));
    }

    #[test]
    fn report_not_found_lists_available_years() {
        let error = SdgError::ReportNotFound { year: 2024, available: vec![2022, 2023] };
        assert!(error.user_message().contains("Available years: 2022, 2023"));
    }

    #[test]
    fn decode_errors_are_fatal() {
        let error = SdgError::decode_error("report.txt", "invalid utf-8 sequence");
        assert!(!error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::High);
    }
}
