pub mod client;
pub mod types;

pub use client::{BackendError, HttpBackend, JourneyBackend};
