// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Introduction
//!
//! A mutable character sequence that is stored as a singly linked chain of fixed
//! capacity [`Block`]s (an unrolled linked list of [`char`]s), rather than a single
//! contiguous buffer.
//!
//! ```text
//! head
//!  │
//!  ▼
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │ H e l l o W o r l│──▶│ d ! ! ! . . . . .│──▶│ ? . . . . . . . .│──▶ None
//! │ count: 16 (full) │   │ count: 16 (full) │   │ count: 1         │
//! └──────────────────┘   └──────────────────┘   └──────────────────┘
//! ```
//!
//! The trade off:
//! - Growth at the tail never moves existing characters, it only fills the tail block or
//!   links a fresh one.
//! - Large spans are grafted in by relinking a single `next` pointer ("splicing"), see
//!   [`ChunkedStringN::append_chunked`] and [`ChunkedStringN::insert_chunked`].
//! - Indexed access walks the chain, so it costs `O(len / N)` block hops.
//!
//! # Usage
//!
//! ```
//! use chunked_string::ChunkedString;
//!
//! let mut text = ChunkedString::from("HelloWorld");
//! assert_eq!(text.len(), 10);
//! assert_eq!(text.char_at(4).unwrap(), 'o');
//! assert_eq!(text.substring(0, 5).unwrap().to_string(), "Hello");
//!
//! text.insert_str(5, " ").unwrap();
//! assert_eq!(text.to_string(), "Hello World");
//! ```
//!
//! # Block capacity
//!
//! [`ChunkedString`] uses [`DEFAULT_BLOCK_CAPACITY`] units per block. Any other capacity
//! is available through the const generic [`ChunkedStringN`], eg: `ChunkedStringN<4>`.
//!
//! # Ownership of spliced chains
//!
//! Splicing moves blocks from one sequence into another. The donor is always taken by
//! value, so two live sequences can never share a chain.
//!
//! # Logging
//!
//! Structural changes (new block, splice, split) are reported via [`tracing`] at the
//! `DEBUG` level when [`DEBUG_CHUNKED_STRING`] is `true`. Install a subscriber with
//! [`try_initialize_logging_global`] to see them.

// https://github.com/rust-lang/rust-clippy
// Enable the lint below only in production code, so tests are allowed to use .unwrap()
// (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enable or disable debug logging of structural changes to block chains.
pub const DEBUG_CHUNKED_STRING: bool = true;

// Attach sources.
pub mod block;
pub mod chunked_string;
pub mod error;
pub mod log_support;
pub mod sizes;

// Re-export.
pub use block::*;
pub use chunked_string::*;
pub use error::*;
pub use log_support::*;
pub use sizes::*;
