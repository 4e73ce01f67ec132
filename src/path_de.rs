use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SoapGenError};

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(decode_error)
}

/// Same as [`from_str_with_path`] for an already parsed document.
pub fn from_value_with_path<'a, T: Deserialize<'a>>(value: &'a Value) -> Result<T> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(decode_error)
}

fn decode_error<E: std::fmt::Display>(err: serde_path_to_error::Error<E>) -> SoapGenError {
    SoapGenError::Decode {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    }
}
