//! Core traits module
//!
//! Contains the abstract interfaces every provider adapter implements

pub mod error_mapper;
pub mod provider;

pub use error_mapper::*;
pub use provider::*;
