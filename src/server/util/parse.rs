use crate::server::error::AppError;

/// Parses a record id from a path segment
///
/// # Arguments
/// - `value` - The path segment to attempt to parse into a positive `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::BadRequest)` - The segment is not a positive integer
pub fn parse_record_id(value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!(
            "'{}' is not a valid record id",
            value
        ))),
    }
}
