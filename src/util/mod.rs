pub mod id;
pub mod listeners;
