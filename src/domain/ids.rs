//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mail container number newtype wrapper
///
/// Identifies a mail container in a data store.
///
/// # Examples
///
/// ```
/// use mailroom::domain::ids::MailContainerNumber;
/// use std::str::FromStr;
///
/// let number = MailContainerNumber::from_str("MC-0042").unwrap();
/// assert_eq!(number.as_str(), "MC-0042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MailContainerNumber(String);

impl MailContainerNumber {
    /// Creates a new MailContainerNumber from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(MailContainerNumber)` if the number is valid, `Err` otherwise
    pub fn new(number: impl Into<String>) -> Result<Self, String> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err("Mail container number cannot be empty".to_string());
        }
        Ok(Self(number))
    }

    /// Returns the container number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MailContainerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MailContainerNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MailContainerNumber {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MailContainerNumber> for String {
    fn from(number: MailContainerNumber) -> Self {
        number.0
    }
}

impl AsRef<str> for MailContainerNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_number_valid() {
        let number = MailContainerNumber::new("MC-1").unwrap();
        assert_eq!(number.as_str(), "MC-1");
        assert_eq!(number.to_string(), "MC-1");
        assert_eq!(number.into_inner(), "MC-1");
    }

    #[test]
    fn test_container_number_empty() {
        assert!(MailContainerNumber::new("").is_err());
        assert!(MailContainerNumber::new("   ").is_err());
    }

    #[test]
    fn test_container_number_serde_rejects_empty() {
        let parsed: Result<MailContainerNumber, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());

        let parsed: MailContainerNumber = serde_json::from_str("\"MC-7\"").unwrap();
        assert_eq!(parsed.as_str(), "MC-7");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"MC-7\"");
    }
}
