// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Insertion by splicing.
//!
//! Inserting `value` at `index` rebuilds the sequence as `before ++ value ++ after`. No
//! units are copied except for the tail part of the one block that contains `index`:
//!
//! ```text
//! insert_chunked(6, [X Y]) on [a b c d] -> [e f g h] -> [i]
//!
//! 1. split_at(6):  [a b c d] -> [e f]           after: [g h] -> [i]
//! 2. splice value: [a b c d] -> [e f] -> [X Y]
//! 3. splice after: [a b c d] -> [e f] -> [X Y] -> [g h] -> [i]
//! ```

use super::ChunkedStringN;
use crate::{ChunkedStringError, ChunkedStringResult, DEBUG_CHUNKED_STRING};

impl<const N: usize> ChunkedStringN<N> {
    /// Insert `value` so that its first unit ends up at `index`. The blocks of `value`
    /// are moved into this sequence, which is why it is taken by value.
    ///
    /// # Errors
    ///
    /// [`ChunkedStringError::IndexOutOfRange`] if `index > len`. The sequence is left
    /// unchanged in this case.
    pub fn insert_chunked(
        &mut self,
        index: usize,
        value: ChunkedStringN<N>,
    ) -> ChunkedStringResult<()> {
        let length = self.len();
        if index > length {
            return Err(ChunkedStringError::index_out_of_range(index, length));
        }

        DEBUG_CHUNKED_STRING.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🪡 Insert by splicing",
                index,
                length,
                inserted_len = value.len(),
            );
        });

        let after = self.split_at(index);
        self.append_chunked(value);
        if let Some(after) = after {
            self.append_chunked(ChunkedStringN::from_chain(after));
        }

        Ok(())
    }

    /// Insert the units of `value` at `index`.
    ///
    /// ```
    /// use chunked_string::ChunkedString;
    ///
    /// let mut text = ChunkedString::from("HelloWorld");
    /// text.insert_str(5, " ").unwrap();
    /// assert_eq!(text.to_string(), "Hello World");
    /// ```
    ///
    /// # Errors
    ///
    /// [`ChunkedStringError::IndexOutOfRange`] if `index > len`.
    pub fn insert_str(&mut self, index: usize, value: &str) -> ChunkedStringResult<()> {
        let length = self.len();
        if index > length {
            return Err(ChunkedStringError::index_out_of_range(index, length));
        }
        self.insert_chunked(index, Self::from(value))
    }

    /// Cut the sequence in two at `index`. `self` keeps `0..index` and the returned
    /// sequence owns `index..len`. At most one block is split, everything after it is
    /// handed over as is.
    ///
    /// ```
    /// use chunked_string::ChunkedString;
    ///
    /// let mut text = ChunkedString::from("HelloWorld");
    /// let world = text.split_off(5).unwrap();
    /// assert_eq!(text, "Hello");
    /// assert_eq!(world, "World");
    /// ```
    ///
    /// # Errors
    ///
    /// [`ChunkedStringError::IndexOutOfRange`] if `index > len`.
    pub fn split_off(&mut self, index: usize) -> ChunkedStringResult<Self> {
        let length = self.len();
        if index > length {
            return Err(ChunkedStringError::index_out_of_range(index, length));
        }
        Ok(self
            .split_at(index)
            .map_or_else(Self::new, ChunkedStringN::from_chain))
    }
}
