// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! conduit-api: HTTP surface for the pipeline orchestration service.
//!
//! Out of the core's hard-engineering scope (spec.md §1) but required for a
//! runnable service: a thin Axum layer that validates nothing itself and
//! only calls into [`conduit_service::Service`]. Grounded on the teacher's
//! closest analogue in the pack, `buildit-api`'s `lib.rs`/`state.rs`/
//! `error.rs`/`routes` split.

pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;
