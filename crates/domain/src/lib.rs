//! # flueview-domain
//!
//! Pure domain model for the flueview furnace monitor.
//!
//! ## Responsibilities
//! - Define the **StatusSnapshot** — the wire entity served by the furnace
//!   controller's status endpoint, received fresh on every poll
//! - Define the **StatusView** — the deterministic projection of a snapshot
//!   onto the display regions (formatted temperatures, status labels and
//!   color, boolean-flag labels)
//! - Define the **Region** identifiers the display contract is keyed by
//! - Define the error conventions (`PollError`, `DisplayError`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod snapshot;
pub mod view;
