use crate::error::AppError;

pub const MIN_PERCENTILE: f64 = 0.0;
pub const MAX_PERCENTILE: f64 = 100.0;
const MAX_QUERY_LEN: usize = 100;

pub fn validate_search_query(query: &str) -> Result<String, AppError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(AppError::BadInput("Game name cannot be empty".into()))
    } else {
        Ok(trimmed.chars().take(MAX_QUERY_LEN).collect())
    }
}

pub fn validate_percentile(percentile: f64) -> Result<(), AppError> {
    if !percentile.is_finite() || percentile < MIN_PERCENTILE || percentile > MAX_PERCENTILE {
        Err(AppError::BadInput(format!(
            "Percentile must be between {} and {}",
            MIN_PERCENTILE, MAX_PERCENTILE
        )))
    } else {
        Ok(())
    }
}

/// Converts a 0-100 percentile answer into the 0-1 fraction the selector takes.
pub fn percentile_fraction(percentile: f64) -> Result<f64, AppError> {
    validate_percentile(percentile)?;
    Ok(percentile / 100.0)
}
