//! Startup and serve errors
//!
//! Request-level failures are [`shared::AppError`]; this type only covers
//! what can stop the process.

use shared::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid bind address: {0}")]
    BindAddress(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("startup failed: {0}")]
    Startup(#[from] AppError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
