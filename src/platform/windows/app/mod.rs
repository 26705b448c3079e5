//! Windows application plumbing: runtime context and single-instance lock.

pub mod instance;
pub mod state;

pub use instance::SingleInstance;
pub use state::AppContext;
