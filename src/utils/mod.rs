// Utility functions
pub mod crypto;
pub mod error;
pub mod jwt;

pub use crypto::*;
pub use error::*;
pub use jwt::*;
