// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter, Result, Write};

use super::ChunkedStringN;

/// Writes every unit, in order, by walking the blocks. There is no failure path, so the
/// output is never cut short.
impl<const N: usize> Display for ChunkedStringN<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for block in self.blocks() {
            for ch in block.as_slice() {
                f.write_char(*ch)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> Debug for ChunkedStringN<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ChunkedString")
            .field("text", &self.to_string())
            .field("block_capacity", &N)
            .field("block_occupancy", &self.block_occupancy().as_slice())
            .finish()
    }
}

/// Two sequences are equal when they hold the same units, regardless of how the units
/// are spread over blocks (or what the block capacity is).
impl<const N: usize, const M: usize> PartialEq<ChunkedStringN<M>> for ChunkedStringN<N> {
    fn eq(&self, other: &ChunkedStringN<M>) -> bool { self.chars().eq(other.chars()) }
}

impl<const N: usize> Eq for ChunkedStringN<N> {}

impl<const N: usize> PartialEq<str> for ChunkedStringN<N> {
    fn eq(&self, other: &str) -> bool { self.chars().eq(other.chars()) }
}

impl<const N: usize> PartialEq<&str> for ChunkedStringN<N> {
    fn eq(&self, other: &&str) -> bool { self.chars().eq(other.chars()) }
}
