// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Length and indexed access. Nothing here changes the shape of the chain.

use super::ChunkedStringN;
use crate::{Block, ChunkedStringError, ChunkedStringResult, InlineVec};

impl<const N: usize> ChunkedStringN<N> {
    /// Total number of units, summed over the chain. This is not cached, so it costs one
    /// walk of the chain (`O(blocks)`).
    #[must_use]
    pub fn len(&self) -> usize { self.blocks().map(Block::len).sum() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.blocks().all(Block::is_empty) }

    /// Number of blocks in the chain, including the head.
    #[must_use]
    pub fn block_count(&self) -> usize { self.blocks().count() }

    /// The number of populated units in each block, in chain order.
    #[must_use]
    pub fn block_occupancy(&self) -> InlineVec<usize> {
        self.blocks().map(Block::len).collect()
    }

    /// Read the unit at `index`.
    ///
    /// # Errors
    ///
    /// [`ChunkedStringError::IndexOutOfRange`] if `index >= len`. Note that `index ==
    /// len` is rejected, there is no sentinel past the end.
    pub fn char_at(&self, index: usize) -> ChunkedStringResult<char> {
        let mut offset = 0;
        for block in self.blocks() {
            if let Some(ch) = index.checked_sub(offset).and_then(|local| block.get(local)) {
                return Ok(ch);
            }
            offset += block.len();
        }
        Err(ChunkedStringError::index_out_of_range(index, offset))
    }

    /// Overwrite the unit at `index` in place. The length and the shape of the chain
    /// don't change.
    ///
    /// # Errors
    ///
    /// [`ChunkedStringError::IndexOutOfRange`] if `index >= len`.
    pub fn set_char_at(&mut self, index: usize, value: char) -> ChunkedStringResult<()> {
        if let Some(slot) = self.locate_mut(index) {
            *slot = value;
            return Ok(());
        }
        Err(ChunkedStringError::index_out_of_range(index, self.len()))
    }
}
