//! Unit tests for rigup
//!
//! These tests use scripted channel mocks and run fast without network I/O.

mod helpers;

mod detect;
mod property_tests;
