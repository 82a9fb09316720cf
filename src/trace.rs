//! Diagnostic events.
//!
//! With the `tracing` feature these forward to the `tracing` crate.
//! Without it they expand to nothing, so the parser stays free of any logging
//! dependency.

/// Emits a `TRACE` level event.
macro_rules! trace_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)+);
        }
    }};
}
