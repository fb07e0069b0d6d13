use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
