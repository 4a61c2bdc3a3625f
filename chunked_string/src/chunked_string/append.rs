// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Growth at the end of the sequence.
//!
//! There are two very different ways to add to the end:
//! 1. Unit by unit ([`ChunkedStringN::append_char`], [`Extend`], [`std::fmt::Write`]).
//!    Units are written into the tail block, and a new block is linked only when the
//!    tail is full.
//! 2. Splicing ([`ChunkedStringN::append_chunked`], [`ChunkedStringN::append_str`]). The
//!    donor's whole chain is linked after the current tail, w/out copying any units.

use std::fmt::{self, Write};

use super::ChunkedStringN;
use crate::DEBUG_CHUNKED_STRING;

impl<const N: usize> ChunkedStringN<N> {
    /// Write `ch` into the tail block, or into a new tail block when the current one is
    /// full.
    pub fn append_char(&mut self, ch: char) { self.tail_mut().push_or_grow(ch); }

    /// Splice `other`'s entire chain onto the end of this one. The blocks of `other` are
    /// moved, not copied, which is why `other` is taken by value.
    ///
    /// The tail of `self` is linked as is, so it stays partially filled if it was.
    ///
    /// ```
    /// use chunked_string::ChunkedString;
    ///
    /// let mut text = ChunkedString::from("Hello");
    /// text.append_chunked(ChunkedString::from("World"));
    /// assert_eq!(text.to_string(), "HelloWorld");
    /// assert_eq!(text.block_count(), 2);
    /// ```
    pub fn append_chunked(&mut self, other: ChunkedStringN<N>) {
        if other.is_empty() {
            return;
        }

        // Take over the donor's chain instead of linking it after an empty head.
        if self.is_empty() {
            *self = other;
            return;
        }

        let donor_chain = other.into_chain();

        DEBUG_CHUNKED_STRING.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🔗 Splicing chain onto tail",
                donor_head_len = donor_chain.len(),
            );
        });

        self.tail_mut().link(donor_chain);
    }

    /// Build a temporary sequence from `value` and splice it onto the end.
    pub fn append_str(&mut self, value: &str) { self.append_chunked(Self::from(value)); }
}

impl<const N: usize> Extend<char> for ChunkedStringN<N> {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        // Keep a cursor on the tail, so the chain is only walked once.
        let mut tail = self.tail_mut();
        for ch in iter {
            tail = tail.push_or_grow(ch);
        }
    }
}

impl<'a, const N: usize> Extend<&'a char> for ChunkedStringN<N> {
    fn extend<I: IntoIterator<Item = &'a char>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Allows `write!` into a chunked string. Units are appended in place, not spliced.
impl<const N: usize> Write for ChunkedStringN<N> {
    fn write_str(&mut self, value: &str) -> fmt::Result {
        self.extend(value.chars());
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> fmt::Result {
        self.append_char(ch);
        Ok(())
    }
}
