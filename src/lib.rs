//! Missive: the message content model of a chat client.
//!
//! This crate provides the typed content carried by chat messages, from
//! decoding protocol payloads through persistence, merging and projection
//! to the public client API.
//!
//! # Architecture
//!
//! Missive follows hexagonal architecture principles:
//!
//! - **Domain**: Pure content types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the file manager, secret
//!   payload loading and entity caches
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`content`]: Message content kinds, decoding, persistence, merging and queries

pub mod content;
