//! Shared domain types for the waitlist client: the user profile, the
//! server wire shapes, validation and pagination rules. Everything in
//! here is browser-free so it can be unit tested on the host.

pub mod error;
pub mod paging;
pub mod user;
pub mod validate;
pub mod wire;

pub use error::ApiError;
pub use user::User;
