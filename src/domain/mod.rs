//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — App-owned state containers with SDK-provided update logic
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod chart;
pub mod company;
pub mod dashboard;
pub mod deposit;
