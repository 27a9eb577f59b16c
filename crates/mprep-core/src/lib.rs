//! Core library for mprep: fetch, extract and verify the model asset bundle
//! (quantized weights, tokenizer, config) shared through a single assets
//! directory convention.

pub mod config;
pub mod error;
pub mod logging;

pub mod checksum;
pub mod extract;
pub mod fetch;
pub mod manifest;
pub mod store;
pub mod verify;
