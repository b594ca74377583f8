//! Shared error types for the protocol builder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown {field} option: {value}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
