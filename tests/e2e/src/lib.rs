//! Skiff End-to-End Test Support
//!
//! Shared fixtures for scenario tests that drive the install controller
//! and the offline worker together the way the host shell would.

#![no_std]

extern crate alloc;

pub mod fixtures;
