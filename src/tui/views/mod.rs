//! Screen views, one module per navigation target.

pub mod about;
pub mod contact;
pub mod detail;
pub mod landing;
pub mod projects;

pub use landing::TypewriterState;
