//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles input scanning and test-case file operations.

pub mod case_files;
pub mod scanner;
