// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range extraction. The result is always a new sequence w/ its own freshly allocated
//! blocks, it never shares blocks w/ the source.

use super::ChunkedStringN;
use crate::{ChunkedStringError, ChunkedStringResult};

impl<const N: usize> ChunkedStringN<N> {
    /// Copy the units in `start..end` into a new sequence.
    ///
    /// When `end > len` the range is clamped to `start..len`, so asking for a little too
    /// much returns whatever is available. Use [`Self::substring_exact`] to treat that as
    /// an error instead.
    ///
    /// ```
    /// use chunked_string::ChunkedString;
    ///
    /// let text = ChunkedString::from("HelloWorld");
    /// assert_eq!(text.substring(0, 5).unwrap(), "Hello");
    /// assert_eq!(text.substring(5, 100).unwrap(), "World");
    /// ```
    ///
    /// # Errors
    ///
    /// [`ChunkedStringError::IndexOutOfRange`] if `start > len` (reports `start`), or if
    /// `end < start` (reports `end`).
    pub fn substring(&self, start: usize, end: usize) -> ChunkedStringResult<Self> {
        let length = self.len();
        check_range(start, end, length)?;
        let end = end.min(length);
        Ok(self.chars_from(start).take(end - start).collect())
    }

    /// Same as [`Self::substring`], but w/out clamping.
    ///
    /// # Errors
    ///
    /// [`ChunkedStringError::IndexOutOfRange`] if `start > len`, `end < start`, or
    /// `end > len`.
    pub fn substring_exact(&self, start: usize, end: usize) -> ChunkedStringResult<Self> {
        let length = self.len();
        check_range(start, end, length)?;
        if end > length {
            return Err(ChunkedStringError::index_out_of_range(end, length));
        }
        Ok(self.chars_from(start).take(end - start).collect())
    }
}

fn check_range(start: usize, end: usize, length: usize) -> ChunkedStringResult<()> {
    if start > length {
        return Err(ChunkedStringError::index_out_of_range(start, length));
    }
    if end < start {
        return Err(ChunkedStringError::index_out_of_range(end, length));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::ChunkedString;

    #[test_case(0, 5, "Hello" ; "prefix")]
    #[test_case(5, 10, "World" ; "suffix")]
    #[test_case(3, 7, "loWo" ; "across a block boundary")]
    #[test_case(4, 4, "" ; "empty range")]
    #[test_case(10, 10, "" ; "empty range at the end")]
    #[test_case(0, 10, "HelloWorld" ; "everything")]
    fn test_substring(start: usize, end: usize, expected: &str) {
        let it = ChunkedStringN::<4>::from("HelloWorld");
        assert_eq!(it.substring(start, end).unwrap(), expected);
        assert_eq!(it.substring_exact(start, end).unwrap(), expected);
    }

    #[test_case(7, 11, "rld" ; "one past the end")]
    #[test_case(0, 1_000, "HelloWorld" ; "far past the end")]
    #[test_case(10, 20, "" ; "start at the end")]
    fn test_substring_clamps_end(start: usize, end: usize, expected: &str) {
        let it = ChunkedStringN::<4>::from("HelloWorld");
        assert_eq!(it.substring(start, end).unwrap(), expected);
        assert_eq!(
            it.substring_exact(start, end),
            Err(ChunkedStringError::index_out_of_range(end, 10))
        );
    }

    #[test_case(11, 12, 11 ; "start past the end")]
    #[test_case(5, 4, 4 ; "end before start")]
    fn test_substring_rejects(start: usize, end: usize, reported: usize) {
        let it = ChunkedString::from("HelloWorld");
        assert_eq!(
            it.substring(start, end),
            Err(ChunkedStringError::index_out_of_range(reported, 10))
        );
    }

    #[test]
    fn test_substring_of_whole_reproduces_text() {
        let mut it = ChunkedStringN::<3>::from("The quick ");
        it.append_str("brown fox");
        let copy = it.substring(0, it.len()).unwrap();
        assert_eq!(copy.to_string(), it.to_string());
    }

    #[test]
    fn test_substring_is_independent_of_source() {
        let mut source = ChunkedStringN::<4>::from("abcdefgh");
        let slice = source.substring(2, 6).unwrap();
        assert_eq!(slice.block_occupancy().as_slice(), &[4]);

        source.set_char_at(3, '#').unwrap();
        assert_eq!(slice, "cdef");
        assert_eq!(source, "abc#efgh");
    }
}
