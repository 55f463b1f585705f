pub mod response;
pub mod serde_helpers;

pub use response::{ErrorResponse, FieldError};
