//! Library exports for wayguard, shared between the binary and tests.

pub mod config;
pub mod guard;
pub mod models;
pub mod session;
pub mod startup;
pub mod state;
pub mod storage;
pub mod utils;
