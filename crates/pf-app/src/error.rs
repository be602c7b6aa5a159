use pf_core::RouteError;
use pf_data::DataError;
use thiserror::Error;

/// Errors surfaced by the application controller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("{context} failed: {source}")]
    Data {
        context: &'static str,
        #[source]
        source: DataError,
    },

    #[error("no handler named '{0}'")]
    UnknownHandler(String),
}

impl AppError {
    pub(crate) fn data(context: &'static str, source: DataError) -> Self {
        AppError::Data { context, source }
    }

    /// Underlying data error, if this came from a fetch or parse
    pub fn data_error(&self) -> Option<&DataError> {
        match self {
            AppError::Data { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
