//! Transfer request and result types

use super::container::canonical_name;
use super::errors::MailroomError;
use super::ids::MailContainerNumber;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of the mail items being transferred
///
/// Independent from a container's [`AllowedMailType`](super::AllowedMailType)
/// set. Raw codes follow the declaration order: `0` standard letter,
/// `1` large letter, `2` small parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MailType {
    StandardLetter,
    LargeLetter,
    SmallParcel,
}

impl MailType {
    pub const ALL: [MailType; 3] = [
        MailType::StandardLetter,
        MailType::LargeLetter,
        MailType::SmallParcel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MailType::StandardLetter => "StandardLetter",
            MailType::LargeLetter => "LargeLetter",
            MailType::SmallParcel => "SmallParcel",
        }
    }
}

impl fmt::Display for MailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<i32> for MailType {
    type Error = MailroomError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MailType::StandardLetter),
            1 => Ok(MailType::LargeLetter),
            2 => Ok(MailType::SmallParcel),
            other => Err(MailroomError::InvalidArgument(format!(
                "Unknown mail type code: {other}"
            ))),
        }
    }
}

impl FromStr for MailType {
    type Err = MailroomError;

    /// Parses `LargeLetter`, `large-letter`, `large_letter` or a raw code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<i32>() {
            return Self::try_from(code);
        }

        let wanted = canonical_name(s);
        Self::ALL
            .into_iter()
            .find(|mail_type| canonical_name(mail_type.as_str()) == wanted)
            .ok_or_else(|| MailroomError::InvalidArgument(format!("Unknown mail type: '{s}'")))
    }
}

/// Request to move mail items out of a source container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMailTransferRequest {
    pub source_mail_container_number: MailContainerNumber,
    pub number_of_mail_items: i32,
    pub mail_type: MailType,
}

impl MakeMailTransferRequest {
    pub fn new(
        source_mail_container_number: MailContainerNumber,
        number_of_mail_items: i32,
        mail_type: MailType,
    ) -> Self {
        Self {
            source_mail_container_number,
            number_of_mail_items,
            mail_type,
        }
    }
}

/// Outcome of a single transfer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MakeMailTransferResult {
    success: bool,
}

impl MakeMailTransferResult {
    pub fn new(success: bool) -> Self {
        Self { success }
    }

    pub fn success(&self) -> bool {
        self.success
    }
}
