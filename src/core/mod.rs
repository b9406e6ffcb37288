//! # Core Application Logic
//!
//! This module contains mark's client state pipeline.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • AppState (data)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Store (fold + notify)│
//!                    │                         │
//!                    │  Reducer: no I/O. Pure. │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │    Web     │      │    HTTP    │
//!     │  Adapter   │      │  Adapter   │      │  Adapter   │
//!     │ (main.rs)  │      │  (future)  │      │   (api)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the `AppState` tree — all client state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`store`]: the `Store` — applies actions in order, notifies views
//! - [`debounce`]: throttled title lookup with explicit state
//! - [`validate`]: web-URI well-formedness check
//! - [`config`]: settings with defaults → file → env → CLI resolution

pub mod action;
pub mod config;
pub mod debounce;
pub mod state;
pub mod store;
pub mod validate;
