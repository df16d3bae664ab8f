//! BACGuard Tools module
//!
//! MCP tool implementations for BACGuard.

pub mod estimate;
pub mod status;
