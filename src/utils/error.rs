use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Overflow: {0}")]
    Overflow(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("System error: {0}")]
    System(String),
}

/// Result type alias for consistent error handling across the library
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Errors caused by the caller's input rather than the environment
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            AppError::InvalidArgument(_)
                | AppError::InvalidRange(_)
                | AppError::OutOfRange(_)
                | AppError::InvalidOperation(_)
        )
    }
}

pub enum FlowResult {
    NoResult {
        item_type: String,
    },
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::InvalidArgument(msg)
        | AppError::InvalidRange(msg)
        | AppError::OutOfRange(msg)
        | AppError::InvalidOperation(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(msg));
        }
        AppError::Overflow(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Overflow: {}", msg)));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::Io(e) => {
            eprintln!("❌ {}", OutputStyle::error(e));
        }
        AppError::System(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::NoResult { item_type } => {
            let msg = format!("No {} requested", item_type);
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("✅ {}", OutputStyle::success(&msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(AppError::InvalidRange("start".to_string()).is_usage());
        assert!(AppError::OutOfRange("length".to_string()).is_usage());
        assert!(!AppError::Io("disk".to_string()).is_usage());
        assert!(!AppError::Overflow("lcm".to_string()).is_usage());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidOperation("unknown operation 'bogus'".to_string());
        assert_eq!(err.to_string(), "Invalid operation: unknown operation 'bogus'");
    }
}
