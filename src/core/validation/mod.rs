//! Transfer validation
//!
//! Pure decision logic: given a request and the current state of the source
//! container, is the transfer permitted?

pub mod validator;

pub use validator::{MailTransferValidator, TransferValidator};
