//! Mail container domain model
//!
//! A mail container accepts a set of mail categories, has a number of free
//! item slots and an operational status.

use super::errors::MailroomError;
use super::ids::MailContainerNumber;
use super::result::Result as MailroomResult;
use bitflags::bitflags;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Set of mail categories a container accepts
    ///
    /// A container may accept several categories at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use mailroom::domain::AllowedMailType;
    ///
    /// let allowed = AllowedMailType::STANDARD_LETTER | AllowedMailType::SMALL_PARCEL;
    /// assert!(allowed.contains(AllowedMailType::SMALL_PARCEL));
    /// assert!(!allowed.contains(AllowedMailType::LARGE_LETTER));
    /// assert_eq!(allowed.to_string(), "StandardLetter | SmallParcel");
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AllowedMailType: u8 {
        const STANDARD_LETTER = 1;
        const LARGE_LETTER = 1 << 1;
        const SMALL_PARCEL = 1 << 2;
    }
}

impl AllowedMailType {
    const NAMED: [(Self, &'static str); 3] = [
        (Self::STANDARD_LETTER, "StandardLetter"),
        (Self::LARGE_LETTER, "LargeLetter"),
        (Self::SMALL_PARCEL, "SmallParcel"),
    ];

    /// Names of the accepted categories, in flag order
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }

    /// Parses a single category name
    ///
    /// Accepts `LargeLetter`, `large-letter` and `large_letter`, case-insensitively.
    pub fn parse_name(name: &str) -> MailroomResult<Self> {
        let wanted = canonical_name(name);
        Self::NAMED
            .iter()
            .find(|(_, known)| canonical_name(known) == wanted)
            .map(|(flag, _)| *flag)
            .ok_or_else(|| {
                MailroomError::InvalidArgument(format!("Unknown allowed mail type: '{name}'"))
            })
    }
}

impl Default for AllowedMailType {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds a set from raw flag bits, rejecting bits outside the known categories
impl TryFrom<u8> for AllowedMailType {
    type Error = MailroomError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| {
            MailroomError::InvalidArgument(format!("Unknown allowed mail type bits: {bits:#04x}"))
        })
    }
}

impl fmt::Display for AllowedMailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "None");
        }
        write!(f, "{}", self.names().join(" | "))
    }
}

// Stored as a list of category names rather than raw bits
impl Serialize for AllowedMailType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

impl<'de> Deserialize<'de> for AllowedMailType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names
            .iter()
            .try_fold(Self::empty(), |acc, name| -> Result<Self, D::Error> {
                Ok(acc | Self::parse_name(name).map_err(de::Error::custom)?)
            })
    }
}

/// Normalizes a category name for lenient matching
pub(crate) fn canonical_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Operational status of a mail container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MailContainerStatus {
    #[default]
    Operational,
    NoTransfersIn,
    OutOfService,
}

impl fmt::Display for MailContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Operational => "Operational",
            Self::NoTransfersIn => "NoTransfersIn",
            Self::OutOfService => "OutOfService",
        };
        write!(f, "{name}")
    }
}

/// A mail container as held by a data store
///
/// `capacity` is the number of free item slots. It is read before each
/// transfer and only mutated after a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailContainer {
    pub mail_container_number: MailContainerNumber,

    pub allowed_mail_type: AllowedMailType,

    /// Remaining item slots; may be negative (see `MailTransferService`)
    pub capacity: i32,

    #[serde(default)]
    pub status: MailContainerStatus,
}

impl MailContainer {
    /// Creates a new builder for constructing a MailContainer
    pub fn builder() -> MailContainerBuilder {
        MailContainerBuilder::default()
    }
}

/// Builder for constructing MailContainer instances
///
/// # Examples
///
/// ```
/// use mailroom::domain::{AllowedMailType, MailContainer, MailContainerStatus};
///
/// let container = MailContainer::builder()
///     .mail_container_number("MC-1")
///     .unwrap()
///     .allowed_mail_type(AllowedMailType::LARGE_LETTER)
///     .capacity(10)
///     .status(MailContainerStatus::Operational)
///     .build()
///     .unwrap();
/// assert_eq!(container.capacity, 10);
/// ```
#[derive(Debug, Default)]
pub struct MailContainerBuilder {
    mail_container_number: Option<MailContainerNumber>,
    allowed_mail_type: AllowedMailType,
    capacity: i32,
    status: MailContainerStatus,
}

impl MailContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the container number from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the number is blank
    pub fn mail_container_number(mut self, number: impl Into<String>) -> Result<Self, String> {
        self.mail_container_number = Some(MailContainerNumber::new(number)?);
        Ok(self)
    }

    pub fn number(mut self, number: MailContainerNumber) -> Self {
        self.mail_container_number = Some(number);
        self
    }

    pub fn allowed_mail_type(mut self, allowed: AllowedMailType) -> Self {
        self.allowed_mail_type = allowed;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn status(mut self, status: MailContainerStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the MailContainer
    ///
    /// # Errors
    ///
    /// Returns an error if the container number is missing
    pub fn build(self) -> Result<MailContainer, String> {
        Ok(MailContainer {
            mail_container_number: self
                .mail_container_number
                .ok_or("mail_container_number is required")?,
            allowed_mail_type: self.allowed_mail_type,
            capacity: self.capacity,
            status: self.status,
        })
    }
}
