//! # flueview-app
//!
//! Application layer — the polling use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - [`StatusSource`](ports::StatusSource) — fetch one status snapshot
//!   - [`StatusDisplay`](ports::StatusDisplay) — apply one rendered view
//! - Provide the [`Poller`](poller::Poller):
//!   - `refresh()` — one poll cycle: fetch → project → apply
//!   - `run()` — one cycle immediately, then one per tick, forever
//! - Contain the failure policy: a cycle's error is logged and dropped; the
//!   schedule never stops
//!
//! ## Dependency rule
//! Depends on `flueview-domain` only (plus `tokio` for the schedule).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod poller;
pub mod ports;
