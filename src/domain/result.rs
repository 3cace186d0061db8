//! Result type alias for Tabmask

use super::errors::MaskError;

/// Result type alias for Tabmask operations
///
/// # Examples
///
/// ```
/// use tabmask::domain::result::Result;
/// use tabmask::domain::errors::MaskError;
///
/// fn failing_function() -> Result<()> {
///     Err(MaskError::Validation("ragged record".to_string()))
/// }
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, MaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(3)
        }

        let value = inner()?;
        assert_eq!(value, 3);
        Ok(())
    }
}
