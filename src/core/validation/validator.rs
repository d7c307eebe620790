//! Mail transfer validation rules

use crate::domain::{
    AllowedMailType, MailContainer, MailContainerStatus, MailType, MakeMailTransferRequest,
};

/// Decides whether a transfer out of a container is permitted
///
/// Implementations must be pure: identical inputs give identical answers
/// and nothing is mutated.
pub trait TransferValidator: Send + Sync {
    /// Returns `true` if `request` may be applied to `container`.
    /// A missing container is always denied.
    fn validate(&self, request: &MakeMailTransferRequest, container: Option<&MailContainer>)
        -> bool;
}

/// Default business rules
///
/// | Mail type        | Permitted when                                        |
/// |------------------|-------------------------------------------------------|
/// | `StandardLetter` | container accepts standard letters                    |
/// | `LargeLetter`    | container accepts large letters and `capacity >= items` |
/// | `SmallParcel`    | container accepts small parcels and is `Operational`   |
///
/// # Examples
///
/// ```
/// use mailroom::core::validation::{MailTransferValidator, TransferValidator};
/// use mailroom::domain::{
///     AllowedMailType, MailContainer, MailContainerNumber, MailType, MakeMailTransferRequest,
/// };
///
/// let container = MailContainer::builder()
///     .mail_container_number("MC-1")
///     .unwrap()
///     .allowed_mail_type(AllowedMailType::LARGE_LETTER)
///     .capacity(10)
///     .build()
///     .unwrap();
/// let request = MakeMailTransferRequest::new(
///     MailContainerNumber::new("MC-1").unwrap(),
///     10,
///     MailType::LargeLetter,
/// );
///
/// assert!(MailTransferValidator.validate(&request, Some(&container)));
/// assert!(!MailTransferValidator.validate(&request, None));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MailTransferValidator;

impl MailTransferValidator {
    pub fn new() -> Self {
        Self
    }
}

impl TransferValidator for MailTransferValidator {
    fn validate(
        &self,
        request: &MakeMailTransferRequest,
        container: Option<&MailContainer>,
    ) -> bool {
        let Some(container) = container else {
            tracing::debug!(
                mail_container_number = %request.source_mail_container_number,
                "Mail container not found, denying transfer"
            );
            return false;
        };

        let allowed = container.allowed_mail_type;
        let permitted = match request.mail_type {
            MailType::StandardLetter => allowed.contains(AllowedMailType::STANDARD_LETTER),
            MailType::LargeLetter => {
                allowed.contains(AllowedMailType::LARGE_LETTER)
                    && container.capacity >= request.number_of_mail_items
            }
            MailType::SmallParcel => {
                allowed.contains(AllowedMailType::SMALL_PARCEL)
                    && container.status == MailContainerStatus::Operational
            }
        };

        tracing::trace!(
            mail_container_number = %container.mail_container_number,
            mail_type = %request.mail_type,
            allowed_mail_type = %allowed,
            capacity = container.capacity,
            items = request.number_of_mail_items,
            status = %container.status,
            permitted,
            "Transfer validated"
        );

        permitted
    }
}
