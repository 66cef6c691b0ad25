//! # case-core
//!
//! Core types shared across all casedesk crates:
//! - Entity structs for the claims domain (case rows, saved filters,
//!   notifications, analytics aggregates)
//! - Status enums with the backend's exact wire labels
//! - The case filter draft → wire-payload normalization (the one mapping
//!   function every call site goes through)
//! - Onboarding step normalization for the intake funnel
//! - The staff permissions bitmap and cross-crate identity
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod identity;
pub mod onboarding;
pub mod permissions;
