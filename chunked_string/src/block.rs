// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A fixed capacity run of character units with an owned link to the next block. This is
//! the node type of the chain owned by [`crate::ChunkedStringN`].

use std::fmt::{Debug, Formatter, Result};

use crate::DEBUG_CHUNKED_STRING;

/// A fixed size buffer of `N` character units, plus a link to the following block.
///
/// # Fields
///
/// * `units`: Stack allocated storage. Only the first `count` slots hold content; slots
///   past `count` may hold stale data, which is never observable through the API.
/// * `count`: Number of populated units, `0 <= count <= N`.
/// * `next`: The rest of the chain. A block exclusively owns everything after it.
///
/// # Examples
///
/// ```
/// use chunked_string::Block;
///
/// let block = Block::<4>::new();
/// assert_eq!(block.len(), 0);
/// assert_eq!(block.capacity(), 4);
/// assert!(block.next().is_none());
/// ```
pub struct Block<const N: usize> {
    units: [char; N],
    count: usize,
    pub(crate) next: Option<Box<Block<N>>>,
}

mod constructor {
    use super::*;

    impl<const N: usize> Default for Block<N> {
        fn default() -> Self { Self::new() }
    }

    impl<const N: usize> Block<N> {
        #[must_use]
        pub fn new() -> Self {
            const { assert!(N > 0, "a block must hold at least one unit") };
            Self {
                units: ['\0'; N],
                count: 0,
                next: None,
            }
        }

        /// Create a block w/ `units` already in it. The caller guarantees that
        /// `units.len() <= N`.
        pub(crate) fn from_slice(units: &[char]) -> Self {
            debug_assert!(units.len() <= N);
            let mut it = Self::new();
            it.units[..units.len()].copy_from_slice(units);
            it.count = units.len();
            it
        }
    }
}

mod size {
    use super::*;

    impl<const N: usize> Block<N> {
        #[must_use]
        pub fn len(&self) -> usize { self.count }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.count == 0 }

        #[must_use]
        pub fn is_full(&self) -> bool { self.count == N }

        #[must_use]
        pub const fn capacity(&self) -> usize { N }
    }
}

mod access {
    use super::*;

    impl<const N: usize> Block<N> {
        /// The populated units, in order.
        #[must_use]
        pub fn as_slice(&self) -> &[char] { &self.units[..self.count] }

        #[must_use]
        pub fn get(&self, index: usize) -> Option<char> {
            self.as_slice().get(index).copied()
        }

        pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut char> {
            self.units[..self.count].get_mut(index)
        }

        /// The following block in the chain, if any.
        #[must_use]
        pub fn next(&self) -> Option<&Block<N>> { self.next.as_deref() }
    }
}

mod mutator {
    use super::*;

    impl<const N: usize> Block<N> {
        /// Write `ch` into the next free slot of this block. When this block is full, a
        /// new block holding just `ch` is linked after it instead.
        ///
        /// Returns the block that received `ch`, which is the new tail of the chain. Must
        /// only be called on the tail block.
        pub(crate) fn push_or_grow(&mut self, ch: char) -> &mut Block<N> {
            debug_assert!(self.next.is_none());

            // Room in this block.
            if !self.is_full() {
                self.units[self.count] = ch;
                self.count += 1;
                return self;
            }

            // Full, so allocate a new tail.
            DEBUG_CHUNKED_STRING.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🧱 Tail block is full, allocating a new block",
                    capacity = N,
                    first_unit = ?ch,
                );
            });
            let new_tail = self.next.insert(Box::new(Block::from_slice(&[ch])));
            new_tail.as_mut()
        }

        /// Link `chain` after this block. Must only be called on the tail block.
        pub(crate) fn link(&mut self, chain: Box<Block<N>>) {
            debug_assert!(self.next.is_none());
            self.next = Some(chain);
        }

        /// Detach everything at and after the local offset `at` (where `at <= len`).
        ///
        /// - `at == len`: this block is untouched, and the rest of the chain is detached.
        /// - `at < len`: the units in `at..len` move into a new block that heads the
        ///   detached chain, and this block is truncated to `at` units.
        ///
        /// ```text
        /// split_off(2) on [a b c d] -> [e f]
        ///
        /// this block:     [a b]
        /// detached chain: [c d] -> [e f]
        /// ```
        pub(crate) fn split_off(&mut self, at: usize) -> Option<Box<Block<N>>> {
            debug_assert!(at <= self.count);

            if at >= self.count {
                return self.next.take();
            }

            let mut detached = Box::new(Block::from_slice(&self.units[at..self.count]));
            detached.next = self.next.take();
            self.count = at;

            DEBUG_CHUNKED_STRING.then(|| {
                tracing::debug!(
                    message = "✂️ Split block",
                    kept = self.count,
                    moved = detached.count,
                );
            });

            Some(detached)
        }
    }
}

/// Drop the rest of the chain one block at a time. The default (recursive) drop glue of
/// `Option<Box<Block>>` would use one stack frame per block, which overflows the stack for
/// long chains.
impl<const N: usize> Drop for Block<N> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut block) = next {
            next = block.next.take();
        }
    }
}

impl<const N: usize> Debug for Block<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Block")
            .field("units", &self.as_slice())
            .field("count", &self.count)
            .field("capacity", &N)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_block() {
        let block = Block::<4>::new();
        assert_eq!(block.len(), 0);
        assert!(block.is_empty());
        assert!(!block.is_full());
        assert_eq!(block.capacity(), 4);
        assert_eq!(block.as_slice(), &[] as &[char]);
        assert_eq!(block.get(0), None);
        assert!(block.next().is_none());
    }

    #[test]
    fn test_push_until_full() {
        let mut block = Block::<3>::new();
        block.push_or_grow('a');
        block.push_or_grow('b');
        block.push_or_grow('c');
        assert_eq!(block.len(), 3);
        assert!(block.is_full());
        assert_eq!(block.as_slice(), &['a', 'b', 'c']);
        assert!(block.next().is_none());
    }

    #[test]
    fn test_push_on_full_block_grows_chain() {
        let mut block = Block::<2>::new();
        block.push_or_grow('a');
        block.push_or_grow('b');
        let new_tail = block.push_or_grow('c');
        assert_eq!(new_tail.as_slice(), &['c']);

        let next = block.next().unwrap();
        assert_eq!(next.as_slice(), &['c']);
        assert_eq!(block.as_slice(), &['a', 'b']);
    }

    #[test]
    fn test_get_mut_only_reaches_populated_units() {
        let mut block = Block::<4>::from_slice(&['x', 'y']);
        *block.get_mut(1).unwrap() = 'z';
        assert_eq!(block.as_slice(), &['x', 'z']);
        assert!(block.get_mut(2).is_none());
    }

    #[test]
    fn test_split_off_in_the_middle() {
        let mut block = Block::<4>::from_slice(&['a', 'b', 'c', 'd']);
        block.link(Box::new(Block::from_slice(&['e', 'f'])));

        let detached = block.split_off(2).unwrap();
        assert_eq!(block.as_slice(), &['a', 'b']);
        assert!(block.next().is_none());

        assert_eq!(detached.as_slice(), &['c', 'd']);
        assert_eq!(detached.next().unwrap().as_slice(), &['e', 'f']);
    }

    #[test]
    fn test_split_off_at_the_end_detaches_next() {
        let mut block = Block::<4>::from_slice(&['a', 'b']);
        block.link(Box::new(Block::from_slice(&['c'])));

        let detached = block.split_off(2).unwrap();
        assert_eq!(block.as_slice(), &['a', 'b']);
        assert!(block.next().is_none());
        assert_eq!(detached.as_slice(), &['c']);

        assert!(block.split_off(2).is_none());
    }

    #[test]
    fn test_split_off_at_zero_empties_block() {
        let mut block = Block::<4>::from_slice(&['a', 'b']);
        let detached = block.split_off(0).unwrap();
        assert!(block.is_empty());
        assert_eq!(detached.as_slice(), &['a', 'b']);
    }

    #[test]
    fn test_drop_long_chain_does_not_overflow_stack() {
        let mut head = Block::<1>::new();
        let mut tail = &mut head;
        for _ in 0..200_000 {
            tail = tail.push_or_grow('x');
        }
        drop(head);
    }

    #[test]
    fn test_debug_shows_populated_units_only() {
        let block = Block::<4>::from_slice(&['h', 'i']);
        assert_eq!(
            format!("{block:?}"),
            "Block { units: ['h', 'i'], count: 2, capacity: 4, has_next: false }"
        );
    }
}
