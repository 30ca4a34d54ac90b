pub mod phase;
pub mod project;
pub mod state;
pub mod task;

pub use phase::*;
pub use project::*;
pub use state::*;
pub use task::*;
