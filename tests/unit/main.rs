//! Unit tests for hostsync
//!
//! These tests use a scripted in-memory gateway and run fast without any
//! network I/O.

mod mocks;
mod property_tests;
