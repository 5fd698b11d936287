//! Infrastructure layer - host store implementations

pub mod storage;
