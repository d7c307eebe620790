//! Result type alias for Mailroom

use super::errors::MailroomError;

/// Result type alias for Mailroom operations
///
/// # Examples
///
/// ```
/// use mailroom::domain::result::Result;
/// use mailroom::domain::errors::MailroomError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(MailroomError::InvalidArgument("bad input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, MailroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(MailroomError::Other("test error".to_string()));
        assert!(result.is_err());
    }
}
