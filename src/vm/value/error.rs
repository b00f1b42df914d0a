use super::function::Arity;
use super::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    #[error("ArityError: Function expected `{0:?}` arguments but received {1}")]
    ArityError(Arity, usize),
    #[error("ArgumentError: {0}")]
    ArgumentError(String),
    #[error("ApplicationError: `{0:?}` is not callable")]
    NoncallableError(Value),
    #[error("{0}")]
    ExplicitError(String),
    #[error("NameConflictError: `{0}` is not a table")]
    NameConflict(String),
    #[error("ModuleNotFoundError: module `{0}` not found")]
    ModuleNotFound(String),
}

pub fn arity_mismatch(arity: Arity, arg_count: usize) -> RuntimeError {
    RuntimeError::ArityError(arity, arg_count)
}

pub fn non_callable(v: Value) -> RuntimeError {
    RuntimeError::NoncallableError(v)
}

pub fn argument_error<I: Into<String>>(message: I) -> RuntimeError {
    RuntimeError::ArgumentError(message.into())
}

pub fn explicit<I: Into<String>>(message: I) -> RuntimeError {
    RuntimeError::ExplicitError(message.into())
}

pub fn name_conflict<I: Into<String>>(name: I) -> RuntimeError {
    RuntimeError::NameConflict(name.into())
}

pub fn module_not_found<I: Into<String>>(name: I) -> RuntimeError {
    RuntimeError::ModuleNotFound(name.into())
}
