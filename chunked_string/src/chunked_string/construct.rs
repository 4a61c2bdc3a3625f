// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{convert::Infallible, str::FromStr};

use super::ChunkedStringN;
use crate::Block;

impl<const N: usize> Default for ChunkedStringN<N> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize> ChunkedStringN<N> {
    /// Create an empty sequence, which is a chain of one empty block.
    #[must_use]
    pub fn new() -> Self { Self::from_chain(Box::new(Block::new())) }

    /// The number of units each block of this sequence holds.
    #[must_use]
    pub const fn capacity(&self) -> usize { N }
}

/// Append each unit of `value`, in order. The result is packed: every block except the
/// tail is full.
impl<const N: usize> From<&str> for ChunkedStringN<N> {
    fn from(value: &str) -> Self { value.chars().collect() }
}

impl<const N: usize> From<String> for ChunkedStringN<N> {
    fn from(value: String) -> Self { Self::from(value.as_str()) }
}

impl<const N: usize> FromStr for ChunkedStringN<N> {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> { Ok(Self::from(value)) }
}

impl<const N: usize> FromIterator<char> for ChunkedStringN<N> {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut it = Self::new();
        it.extend(iter);
        it
    }
}

/// Deep copy into freshly allocated (and packed) blocks.
impl<const N: usize> Clone for ChunkedStringN<N> {
    fn clone(&self) -> Self { self.chars().collect() }
}
