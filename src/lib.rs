//! BACGuard Library
//!
//! Advisory blood alcohol estimation and risk tier classification.

pub mod bac;
pub mod build_info;
pub mod mcp;
pub mod models;
pub mod tools;
