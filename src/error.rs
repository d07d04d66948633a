//! Application errors

use thiserror::Error;
use trellis_conf::ConfError;
use trellis_di::DiError;

/// Errors raised by [`Application`](crate::Application).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AppError {
	#[error(transparent)]
	Di(#[from] DiError),

	#[error(transparent)]
	Conf(#[from] ConfError),

	#[error("application is already bootstrapped")]
	AlreadyBootstrapped,
}

pub type AppResult<T> = Result<T, AppError>;
