pub mod action;
pub mod app_store;
pub mod reducer;
pub mod saver;

pub use action::*;
pub use app_store::AppStore;
pub use reducer::{ReduceCx, reduce};
pub use saver::{SavePhase, SaveScheduler};
