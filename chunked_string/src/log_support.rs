// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Install a [`tracing`] subscriber so the `DEBUG` events that are emitted when
//! [`crate::DEBUG_CHUNKED_STRING`] is `true` end up somewhere. This is only needed by
//! binaries and tests, the library itself never installs a subscriber.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

/// This erases the concrete type of the writer, and returns a boxed layer that only lets
/// events at or above `level_filter` through.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
#[must_use]
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

/// Set the global default subscriber to one that writes to stderr.
///
/// # Errors
///
/// If a global default subscriber has already been set (by this function or anything
/// else in the process).
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(create_display_layer(level_filter, DisplayPreference::default()))
        .try_init()
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(LevelFilter::DEBUG, DisplayPreference::Stdout ; "debug to stdout")]
    #[test_case(LevelFilter::DEBUG, DisplayPreference::Stderr ; "debug to stderr")]
    #[test_case(LevelFilter::OFF, DisplayPreference::Stderr ; "filtered out")]
    fn test_scoped_subscriber_w_display_layer(
        level_filter: LevelFilter,
        display_preference: DisplayPreference,
    ) {
        let subscriber = tracing_subscriber::registry()
            .with(create_display_layer(level_filter, display_preference));

        tracing::subscriber::with_default(subscriber, || {
            let mut it = crate::ChunkedStringN::<2>::from("abc");
            it.insert_str(1, "xyz").unwrap();
            assert_eq!(it.to_string(), "axyzbc");
        });
    }
}
