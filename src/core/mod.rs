// File: src/core/mod.rs
pub mod analysis;
pub mod chars;
pub mod engine;
pub mod morphology;
pub mod store;
pub mod types;
