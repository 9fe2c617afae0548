//! Common utilities and abstractions for the sharedvar crates.
//!
//! This module provides the error taxonomy and runtime type identity shared by
//! the variant container.

pub mod error;
pub mod type_info;

pub use error::{Result, VariantError};
pub use type_info::TypeInfo;
