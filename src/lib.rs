// src/lib.rs

pub mod chain;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod linking;
pub mod persistence;

pub use crate::config::LexiconConfig;
pub use crate::core::engine::LexiconEngine;
pub use crate::core::store::WordStore;
pub use crate::core::types::{Bucket, Links, Relation, Statistics, WordId, WordRecord};
pub use crate::error::{LexiconError, Result};
pub use crate::linking::relink_all;
