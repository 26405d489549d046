//! Domain value objects and types.
//!
//! This module contains the field models that make up a phonebook contact.
//! Fields normalize and validate on every write so that invalid data is
//! never stored.

pub mod email;
pub mod errors;
pub mod syntax;

pub use email::{EmailClassifier, EmailField};
pub use errors::ValidationError;
