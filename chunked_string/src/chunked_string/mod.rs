// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`ChunkedStringN`] owns a chain of [`Block`]s and implements every sequence operation
//! by walking, and when needed relinking, that chain.
//!
//! The methods are organized into focused modules:
//! - `construct` - Constructors and conversions from text.
//! - `access` - Length, indexed reads and writes.
//! - `append` - Tail growth and splicing a whole sequence onto the end.
//! - `substring` - Extracting a range into a new, independently owned sequence.
//! - `insert` - Splitting the chain and splicing a sequence into the gap.
//! - `display` - Stringification and comparisons.
//! - `iterator` - Iterators over blocks and units.
//!
//! # Chain shape
//!
//! A sequence built only by appending characters is *packed*: every block except the
//! tail is full. Splicing (see [`ChunkedStringN::append_chunked`] and
//! [`ChunkedStringN::insert_chunked`]) links chains as they are, so partially filled
//! blocks can show up in the middle of a chain. Every traversal uses each block's own
//! length, so this never affects results. The one shape that is never produced is an
//! empty block anywhere other than the head of an empty sequence.

// Attach sources.
pub mod access;
pub mod append;
pub mod construct;
pub mod display;
pub mod insert;
pub mod iterator;
pub mod substring;

// Re-export.
pub use iterator::*;

use crate::{Block, DEFAULT_BLOCK_CAPACITY};

/// A chunked string w/ the default block capacity of [`DEFAULT_BLOCK_CAPACITY`] units.
pub type ChunkedString = ChunkedStringN<DEFAULT_BLOCK_CAPACITY>;

/// Mutable character sequence stored as a singly linked chain of blocks that hold up to
/// `N` units each.
///
/// The `head` block always exists. The empty sequence is a single block w/ no units.
pub struct ChunkedStringN<const N: usize> {
    head: Box<Block<N>>,
}

/// Chain walking helpers shared by the operation modules.
impl<const N: usize> ChunkedStringN<N> {
    /// Wrap an already built chain.
    pub(crate) fn from_chain(head: Box<Block<N>>) -> Self { Self { head } }

    /// Give up ownership of the chain, leaving nothing behind.
    pub(crate) fn into_chain(self) -> Box<Block<N>> { self.head }

    pub(crate) fn head(&self) -> &Block<N> { &self.head }

    /// The last block of the chain, which is the only place that tail growth writes to.
    pub(crate) fn tail_mut(&mut self) -> &mut Block<N> {
        let mut current: &mut Block<N> = &mut self.head;
        loop {
            match current.next {
                Some(ref mut next) => current = next.as_mut(),
                None => return current,
            }
        }
    }

    /// The unit at `index`, or [None] when `index >= len`.
    pub(crate) fn locate_mut(&mut self, index: usize) -> Option<&mut char> {
        let mut offset = 0;
        let mut current: &mut Block<N> = &mut self.head;
        loop {
            let count = current.len();
            if index < offset + count {
                return current.get_mut(index - offset);
            }
            offset += count;
            match current.next {
                Some(ref mut next) => current = next.as_mut(),
                None => return None,
            }
        }
    }

    /// Cut the chain so that `self` keeps `0..index` and the returned chain holds
    /// `index..len`. The caller guarantees that `index <= len`.
    ///
    /// The cut happens in the first block whose end is at or past `index`. When `index`
    /// lands on a block boundary the link between the two blocks is cut, otherwise the
    /// block is split in two. This never leaves an empty block in the middle of a chain.
    pub(crate) fn split_at(&mut self, index: usize) -> Option<Box<Block<N>>> {
        let mut offset = 0;
        let mut current: &mut Block<N> = &mut self.head;
        loop {
            let count = current.len();
            if index <= offset + count {
                return current.split_off(index - offset);
            }
            offset += count;
            match current.next {
                Some(ref mut next) => current = next.as_mut(),
                None => return None,
            }
        }
    }
}
