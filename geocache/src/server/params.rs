//! Query parameter validation.

use std::collections::HashMap;

use super::error::ApiError;

/// Raw query parameters of one request.
pub type QueryParams = HashMap<String, String>;

/// The value of `name`, or 400 when absent.
pub fn required<'a>(params: &'a QueryParams, name: &str) -> Result<&'a str, ApiError> {
    params.get(name).map(String::as_str).ok_or_else(|| {
        ApiError::bad_request(format!("Required parameter '{}' is not present.", name))
    })
}

/// The value of `name`, or 400 when absent or only whitespace.
pub fn required_non_blank<'a>(params: &'a QueryParams, name: &str) -> Result<&'a str, ApiError> {
    let value = required(params, name)?;
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!(
            "Parameter '{}' must not be blank.",
            name
        )));
    }
    Ok(value)
}

/// The value of `name` as a finite double, or 400.
pub fn required_double(params: &QueryParams, name: &str) -> Result<f64, ApiError> {
    let raw = required(params, name)?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            ApiError::bad_request(format!(
                "Invalid value for parameter '{}'. Expected type: double",
                name
            ))
        })
}
