//! Integration test modules.

mod session_persistence_test;
mod storage_fallback_test;
