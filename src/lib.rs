// Mailroom - Mail Container Transfer Tool
// Copyright (c) 2025 Mailroom Contributors
// Licensed under the MIT License

//! # Mailroom - mail container transfers
//!
//! Mailroom validates and executes transfers of mail items out of mail
//! containers. Each container lives in one of two interchangeable data stores
//! (primary and backup); a configuration value chooses which one serves a
//! transfer.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (validation rules, transfer orchestration)
//! - [`adapters`] - Data store implementations
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use mailroom::adapters::store::InMemoryMailContainerStore;
//! use mailroom::core::transfer::{DataStoreKind, MailTransferService, TransferSettings};
//! use mailroom::core::validation::MailTransferValidator;
//! use mailroom::domain::{
//!     AllowedMailType, MailContainer, MailContainerNumber, MailType, MakeMailTransferRequest,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let container = MailContainer::builder()
//!     .mail_container_number("MC-1")?
//!     .allowed_mail_type(AllowedMailType::LARGE_LETTER)
//!     .capacity(10)
//!     .build()?;
//!
//! let service = MailTransferService::with_settings(
//!     TransferSettings::new(DataStoreKind::Primary),
//!     Arc::new(InMemoryMailContainerStore::new("backup")),
//!     Arc::new(InMemoryMailContainerStore::with_containers("primary", [container])),
//!     Arc::new(MailTransferValidator),
//! );
//!
//! let request = MakeMailTransferRequest::new(
//!     MailContainerNumber::new("MC-1")?,
//!     10,
//!     MailType::LargeLetter,
//! );
//! assert!(service.make_mail_transfer(&request)?.success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! A denied transfer is a normal result, not an error. [`domain::MailroomError`]
//! covers configuration problems, invalid arguments (such as an unknown mail
//! type code) and store failures, which are propagated unchanged.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
