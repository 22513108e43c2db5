//! Tracing integration for error-list.
//!
//! Emits a whole [`ErrorList`] as a single `tracing` event, so a list built up
//! along a failing call chain ends up in the same place as the rest of the
//! application's logs.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-list = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Level;

use crate::types::error_formatter::from_fn;
use crate::types::ErrorList;

impl ErrorList {
    /// Emits the list as an `ERROR` event.
    ///
    /// # Example
    ///
    /// ```
    /// use error_list::ErrorList;
    ///
    /// let list = ErrorList::new("connection refused").with("while syncing");
    /// list.trace();
    /// // ERROR count=2 first="connection refused" last="while syncing": connection refused -> while syncing
    /// ```
    #[inline]
    pub fn trace(&self) {
        self.trace_at(Level::ERROR);
    }

    /// Emits the list as an event at `level`.
    ///
    /// The event carries `count`, `first` and `last` fields, and the messages
    /// joined with ` -> ` as its message.
    pub fn trace_at(&self, level: Level) {
        let chain = self.chain();
        let count = self.count();
        let first = self.first();
        let last = self.last();

        if level == Level::ERROR {
            tracing::error!(count, first, last, "{chain}");
        } else if level == Level::WARN {
            tracing::warn!(count, first, last, "{chain}");
        } else if level == Level::INFO {
            tracing::info!(count, first, last, "{chain}");
        } else if level == Level::DEBUG {
            tracing::debug!(count, first, last, "{chain}");
        } else {
            tracing::trace!(count, first, last, "{chain}");
        }
    }

    fn chain(&self) -> String {
        self.render_with(&from_fn(|messages, out| {
            for (i, message) in messages.iter().enumerate() {
                if i > 0 {
                    out.write_str(" -> ")?;
                }
                out.write_str(message)?;
            }
            Ok(())
        }))
    }
}
