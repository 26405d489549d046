//! vcard2fritz - contact field models for converting vCard records into a
//! FRITZ!Box phonebook import file.
//!
//! # Architecture
//!
//! - **domain**: Field models with normalization and validation (email address)
//! - **phonebook**: XML binding of fields for the phonebook document
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod phonebook;

pub use config::Config;
pub use domain::{EmailClassifier, EmailField, ValidationError};
pub use error::{ConfigError, XmlError};
pub use phonebook::{email_to_xml, write_email_lines, EmailElement, LineStats, OutputOptions};
