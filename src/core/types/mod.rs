//! Core type definition module
//!
//! Request and result shapes shared by every provider adapter

pub mod common;
pub mod requests;
pub mod responses;

// Re-export all public types
pub use common::*;
pub use requests::*;
pub use responses::*;
