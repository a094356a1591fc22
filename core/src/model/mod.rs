pub mod entry;
pub mod outline;
pub mod task;
