//! # shroud
//!
//! Wraps sensitive in-memory values (tokens, passwords, keys) so that
//! printing, debug formatting, and serialization of anything containing them
//! reveal a type descriptor or the type's zero value instead of the secret.
//! Access is explicit through [`Secret::get`] and [`Secret::set`]; everything
//! implicit stays opaque.
//!
//! ```
//! use shroud::Secret;
//!
//! let token = Secret::new("hunter2".to_string());
//! assert_eq!(format!("{token:?}"), "Secret<alloc::string::String>");
//! assert_eq!(serde_json::to_string(&token).unwrap(), "\"\"");
//! assert_eq!(token.get(), "hunter2");
//! ```

pub mod error;
pub mod hook;
pub mod secret;

pub use error::Error;
pub use secret::Secret;
