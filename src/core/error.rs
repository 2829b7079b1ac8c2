//! Error types for release-status with contextual messages and exit codes
//!
//! Every failure that aborts a run is a [`StatusError`]. Best-effort cases
//! (tags that don't parse, an unset repository) are not errors and never
//! reach this module.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (missing or malformed files, bad timestamps)
  User = 1,
  /// System error (other I/O failures, e.g. permissions)
  System = 2,
  /// Validation failure (`--check` found a stale document)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-status
#[derive(Debug)]
pub enum StatusError {
  /// Reading or writing a file failed
  Io { path: PathBuf, source: io::Error },

  /// A JSON input could not be parsed or had the wrong shape
  Json { path: PathBuf, source: serde_json::Error },

  /// A JSON input parsed but isn't usable
  Input { path: PathBuf, message: String },

  /// A release has no usable publishedAt/createdAt timestamp
  Timestamp { tag: String, value: Option<String> },

  /// The document does not contain the current table
  Stale { path: PathBuf },

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl StatusError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    StatusError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Wrap an I/O error with the path it happened on
  pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    StatusError::Io {
      path: path.into(),
      source,
    }
  }

  /// Wrap a JSON error with the file it came from
  pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
    StatusError::Json {
      path: path.into(),
      source,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      StatusError::Message { message, context, help } => StatusError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      other => StatusError::Message {
        message: other.to_string(),
        context: Some(ctx_str),
        help: other.help_message(),
      },
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      StatusError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => ExitCode::User,
      StatusError::Io { .. } => ExitCode::System,
      StatusError::Stale { .. } => ExitCode::Validation,
      StatusError::Json { .. }
      | StatusError::Input { .. }
      | StatusError::Timestamp { .. }
      | StatusError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      StatusError::Io { path, source } if source.kind() == io::ErrorKind::NotFound => Some(format!(
        "Make sure {} exists, or point at it with the matching command-line flag.",
        path.display()
      )),
      StatusError::Json { .. } => {
        Some("Regenerate it, e.g. `gh release list --json tagName,name,publishedAt,createdAt`.".to_string())
      }
      StatusError::Input { .. } => {
        Some("Current packages must be a JSON object (keys are binaries) or an array of binary names.".to_string())
      }
      StatusError::Timestamp { .. } => {
        Some("Timestamps must be ISO-8601, e.g. 2024-01-15T00:00:00Z.".to_string())
      }
      StatusError::Stale { .. } => Some("Run `release-status update` and commit the result.".to_string()),
      StatusError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for StatusError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StatusError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
      StatusError::Json { path, source } => write!(f, "Invalid JSON in {}: {}", path.display(), source),
      StatusError::Input { path, message } => write!(f, "Unusable input in {}: {}", path.display(), message),
      StatusError::Timestamp { tag, value } => match value {
        Some(value) => write!(f, "Release '{}' has an unparseable timestamp: '{}'", tag, value),
        None => write!(f, "Release '{}' has neither publishedAt nor createdAt", tag),
      },
      StatusError::Stale { path } => write!(f, "{} is out of date", path.display()),
      StatusError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for StatusError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      StatusError::Io { source, .. } => Some(source),
      StatusError::Json { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<serde_json::Error> for StatusError {
  fn from(err: serde_json::Error) -> Self {
    StatusError::message(format!("JSON error: {}", err))
  }
}

/// Result type alias for release-status
pub type StatusResult<T> = Result<T, StatusError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> StatusResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<StatusError>,
{
  fn context(self, ctx: impl Into<String>) -> StatusResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }
}

/// Print an error to stderr with help text
pub fn print_error(error: &StatusError) {
  eprintln!("\n❌ {}\n", error);
  if let Some(help) = error.help_message() {
    eprintln!("💡 {}\n", help);
  }
}
