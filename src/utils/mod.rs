//! Utility functions for alias generation and input validation.
//!
//! - [`alias_generator`] - Random alias generation and alias validation
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - Database error classification

pub mod alias_generator;
pub mod db_error;
pub mod url_validator;
