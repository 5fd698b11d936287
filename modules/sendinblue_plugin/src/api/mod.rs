//! API layer - native client for the host

pub mod native;
