//! Unit tests for the content module.
//!
//! Tests are organised by operation: decoding, persistence, merging,
//! queries and secret media loading. Shared sample values live in
//! `fixtures`.

mod decoder_tests;
mod fixtures;
mod input_tests;
mod merge_tests;
mod secret_media_tests;
