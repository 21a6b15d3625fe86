//! This module contains the removal engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `RemovalEngine` trait.
//!
//! # License
//! MIT OR Apache-2.0

pub mod range_engine;
