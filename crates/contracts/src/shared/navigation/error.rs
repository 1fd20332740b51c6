use thiserror::Error;

/// Ошибки навигационного слоя
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no page module registered for path '{0}'")]
    UnknownPath(String),

    #[error("path '{0}' is not a valid route")]
    InvalidPath(String),

    #[error("navigation config error: {0}")]
    Config(String),
}
