//! Shared types for Khata.
//!
//! This crate provides common types used across all other crates:
//! - Fixed-point money with a minor-unit wire representation
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::{Money, PartyId, RecordId};
