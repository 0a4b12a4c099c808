#![forbid(unsafe_code)]

pub mod batch;
pub mod discover;
pub mod error;
pub mod pandoc;
pub mod paths;
