//! State management and synchronization core for a local-first
//! project/task board.
//!
//! Work is organized into projects, each project into ordered phases, each
//! phase into tasks. The crate owns the normalized in-memory model
//! ([`model`]), the pure state-transition function over it
//! ([`store::reducer`]), and the orchestration layer ([`store::AppStore`])
//! that hydrates the model from local or remote persistence and writes it
//! back under a debounced, best-effort save policy ([`io`]).
//!
//! Everything here is single-threaded and tick-driven: the embedding
//! application dispatches actions and calls [`store::AppStore::tick`] from
//! its event loop; time is injected through [`clock::Clock`] so the debounce
//! behavior is testable without real time passing.

pub mod clock;
pub mod config;
pub mod io;
pub mod model;
pub mod stats;
pub mod store;
pub mod templates;
pub mod util;
