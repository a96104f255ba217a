#![doc = include_str!("../../../README.md")]
//!

//! This crate is the public face of refmeta; everything lives in
//! `refmeta-core` and is re-exported here.

pub use refmeta_core::*;
