use locoroute_core::model::RouteError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading input: {0}")]
    InputError(String),
    #[error("failure reading or writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid route data: {source}")]
    RouteError {
        #[from]
        source: RouteError,
    },
    #[error("failure building worker pool: {source}")]
    ThreadPoolError {
        #[from]
        source: rayon::ThreadPoolBuildError,
    },
    #[error("progress bar error: {0}")]
    ProgressError(String),
    #[error("analysis cancelled")]
    Cancelled,
}
