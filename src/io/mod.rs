pub mod local;
pub mod memory;
pub mod remote;
pub mod session;

pub use local::{FileLocal, LocalStore};
pub use memory::{MemoryLocal, MemoryRemote};
pub use remote::{RemoteDir, RemoteError, RemoteStore};
pub use session::SessionTracker;
