// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{iter::FusedIterator, slice};

use super::ChunkedStringN;
use crate::Block;

impl<const N: usize> ChunkedStringN<N> {
    /// Iterate the blocks of the chain, starting w/ the head.
    #[must_use]
    pub fn blocks(&self) -> Blocks<'_, N> {
        Blocks {
            current: Some(self.head()),
        }
    }

    /// Iterate the units of the sequence, in order.
    #[must_use]
    pub fn chars(&self) -> Chars<'_, N> { Chars::new(self.blocks(), &[]) }

    /// Iterate the units starting at `start`. Whole blocks before `start` are skipped w/out
    /// visiting their units.
    pub(crate) fn chars_from(&self, start: usize) -> Chars<'_, N> {
        let mut blocks = self.blocks();
        let mut offset = 0;
        loop {
            let Some(block) = blocks.next() else {
                return Chars::new(blocks, &[]);
            };
            let count = block.len();
            if start < offset + count {
                return Chars::new(blocks, &block.as_slice()[start - offset..]);
            }
            offset += count;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Blocks<'a, const N: usize> {
    current: Option<&'a Block<N>>,
}

impl<'a, const N: usize> Iterator for Blocks<'a, N> {
    type Item = &'a Block<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.current?;
        self.current = block.next();
        Some(block)
    }
}

impl<const N: usize> FusedIterator for Blocks<'_, N> {}

#[derive(Debug, Clone)]
pub struct Chars<'a, const N: usize> {
    blocks: Blocks<'a, N>,
    units: slice::Iter<'a, char>,
}

impl<'a, const N: usize> Chars<'a, N> {
    fn new(blocks: Blocks<'a, N>, units: &'a [char]) -> Self {
        Self {
            blocks,
            units: units.iter(),
        }
    }
}

impl<const N: usize> Iterator for Chars<'_, N> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ch) = self.units.next() {
                return Some(*ch);
            }
            self.units = self.blocks.next()?.as_slice().iter();
        }
    }
}

impl<const N: usize> FusedIterator for Chars<'_, N> {}

/// This implementation allows the sequence to be used in a for loop directly.
impl<'a, const N: usize> IntoIterator for &'a ChunkedStringN<N> {
    type Item = char;
    type IntoIter = Chars<'a, N>;

    fn into_iter(self) -> Self::IntoIter { self.chars() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spliced() -> ChunkedStringN<3> {
        let mut it = ChunkedStringN::<3>::from("abcd");
        it.append_str("ef");
        it.append_str("ghij");
        it
    }

    #[test]
    fn test_blocks_in_chain_order() {
        let it = spliced();
        let blocks: Vec<Vec<char>> =
            it.blocks().map(|block| block.as_slice().to_vec()).collect();
        assert_eq!(
            blocks,
            vec![
                vec!['a', 'b', 'c'],
                vec!['d'],
                vec!['e', 'f'],
                vec!['g', 'h', 'i'],
                vec!['j'],
            ]
        );
    }

    #[test]
    fn test_chars_and_for_loop() {
        let it = spliced();
        assert_eq!(it.chars().collect::<String>(), "abcdefghij");

        let mut acc = String::new();
        for ch in &it {
            acc.push(ch);
        }
        assert_eq!(acc, "abcdefghij");
    }

    #[test]
    fn test_chars_from() {
        let it = spliced();
        for start in 0..=it.len() {
            let expected: String = "abcdefghij".chars().skip(start).collect();
            assert_eq!(it.chars_from(start).collect::<String>(), expected);
        }
        assert_eq!(it.chars_from(100).next(), None);
    }

    #[test]
    fn test_chars_on_empty() {
        let it = ChunkedStringN::<3>::new();
        assert_eq!(it.chars().next(), None);
        assert_eq!(it.blocks().count(), 1);
    }
}
