use super::value::error::RuntimeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A module constructor failed. Modules installed before it stay installed.
    #[error("InstallError: module `{0}` failed to install: {1}")]
    InstallError(String, RuntimeError),
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The module whose constructor failed, if any.
    pub fn module(&self) -> Option<&str> {
        match self {
            Error::InstallError(module, _) => Some(module.as_str()),
            Error::RuntimeError(_) => None,
        }
    }
}
