//! Core business logic layer
//!
//! This module contains the prime engine, the transforms and samplers built
//! on it, the shared data structures, and the capability traits.

pub mod data;
pub mod engine;
pub mod operations;
pub mod sampling;
pub mod traits;
pub mod transform;
