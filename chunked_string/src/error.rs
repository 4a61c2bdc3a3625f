// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias for results returned by the fallible operations on
/// [`crate::ChunkedStringN`].
pub type ChunkedStringResult<T> = Result<T, ChunkedStringError>;

/// Errors from the indexed operations on [`crate::ChunkedStringN`].
///
/// There is a single failure mode: an index or a range bound that falls outside the
/// sequence. The valid domain depends on the operation:
///
/// | Operation                         | Valid                                 |
/// | :-------------------------------- | :------------------------------------ |
/// | `char_at`, `set_char_at`          | `index < len`                         |
/// | `insert_chunked`, `split_off`     | `index <= len`                        |
/// | `substring`                       | `start <= len` and `start <= end`     |
/// | `substring_exact`                 | `start <= end <= len`                 |
///
/// These are local, recoverable conditions. Since this type implements
/// [`miette::Diagnostic`] it can be propagated with `?` into a [`miette::Result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ChunkedStringError {
    /// `index` is the offending index or range bound, `length` is the length of the
    /// sequence at the time of the call.
    #[error("Index {index} is out of range for a sequence of length {length}")]
    #[diagnostic(
        code(chunked_string::index_out_of_range),
        help(
            "Reads and writes accept 0..length. \
             Insertion points and range starts accept 0..=length."
        )
    )]
    IndexOutOfRange { index: usize, length: usize },
}

impl ChunkedStringError {
    #[must_use]
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_message() {
        let error = ChunkedStringError::index_out_of_range(10, 3);
        assert_eq!(
            error.to_string(),
            "Index 10 is out of range for a sequence of length 3"
        );
    }

    #[test]
    fn test_diagnostic_code_and_help() {
        let error = ChunkedStringError::index_out_of_range(0, 0);
        assert_eq!(
            error.code().map(|it| it.to_string()),
            Some("chunked_string::index_out_of_range".to_string())
        );
        assert!(error.help().is_some());
    }

    #[test]
    fn test_propagates_into_miette_report() {
        fn fails() -> miette::Result<()> {
            let result: ChunkedStringResult<()> =
                Err(ChunkedStringError::index_out_of_range(5, 4));
            result?;
            Ok(())
        }

        let report = fails().unwrap_err();
        let inner = report.downcast_ref::<ChunkedStringError>();
        assert_eq!(
            inner,
            Some(&ChunkedStringError::IndexOutOfRange {
                index: 5,
                length: 4
            })
        );
    }
}
