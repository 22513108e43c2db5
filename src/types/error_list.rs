//! The error list itself.
//!
//! An [`ErrorList`] is created from one message and only ever grows. Each
//! layer of a failing call chain appends one more message, and whoever ends up
//! holding the list renders it once at the end.
//!
//! # Examples
//!
//! ```
//! use error_list::ErrorList;
//!
//! let mut list = ErrorList::new("missing field `port`");
//! list.append("while parsing server section").append("while loading config");
//!
//! assert_eq!(list.count(), 3);
//! assert_eq!(list.first(), "missing field `port`");
//! assert_eq!(list.last(), "while loading config");
//! assert_eq!(
//!     list.render(),
//!     "[error]\n   - missing field `port`\n   - while parsing server section\n   - while loading config\n"
//! );
//! ```
use core::fmt::{self, Display};
use core::ops::Index;

use smallvec::{smallvec, SmallVec};

use crate::types::alloc_error::AllocError;
use crate::types::alloc_type::{String, Vec};
use crate::types::error_formatter::{DefaultFormatter, MessageFormatter};
use crate::types::messages::{Iter, Messages};

/// SmallVec-backed message storage.
///
/// The first message lives inline, so a list that never grows past its
/// initial message does not allocate storage.
pub type MessageVec = SmallVec<[String; 1]>;

/// Capacity reserved the first time the storage spills to the heap.
const FIRST_SPILL_CAPACITY: usize = 8;

/// An ordered, append-only list of error messages.
///
/// A list always holds at least one message. Messages are owned by the list
/// and handed out as `&str` borrows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorList {
    messages: MessageVec,
}

impl ErrorList {
    /// Creates a list holding `message` as its only entry.
    ///
    /// Empty messages are accepted.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self { messages: smallvec![message] }
    }

    /// Creates a list, reporting allocation failure instead of aborting.
    pub fn try_new(message: &str) -> Result<Self, AllocError> {
        let owned = copy_message(message)?;
        Ok(Self { messages: smallvec![owned] })
    }

    /// Collects messages into a list, or returns `None` when there are none.
    pub fn from_messages<I, S>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: MessageVec = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// Appends `message` as the new last entry and returns the same list.
    ///
    /// The message is copied into the list, even when it is an owned
    /// `String`; use [`append_owned`](Self::append_owned) to hand one over.
    ///
    /// If the list cannot grow, the message is dropped, a diagnostic is
    /// emitted, and the list is left as it was.
    pub fn append(&mut self, message: impl AsRef<str>) -> &mut Self {
        if let Err(error) = self.push_message(message.as_ref()) {
            report_dropped_message(&error);
        }
        self
    }

    /// Appends an already-built `message` without copying it.
    ///
    /// Storage failures are handled as in [`append`](Self::append).
    ///
    /// # Examples
    ///
    /// ```
    /// use error_list::ErrorList;
    ///
    /// let mut list = ErrorList::new("request failed");
    /// list.append_owned(format!("status {}", 503));
    ///
    /// assert_eq!(list.last(), "status 503");
    /// ```
    pub fn append_owned(&mut self, message: String) -> &mut Self {
        match self.reserve_slot() {
            Ok(()) => self.messages.push(message),
            Err(error) => report_dropped_message(&error),
        }
        self
    }

    /// Appends `message`, returning the allocation failure instead of absorbing it.
    pub fn try_append(&mut self, message: &str) -> Result<&mut Self, AllocError> {
        self.push_message(message)?;
        Ok(self)
    }

    /// By-value form of [`append`](Self::append) for builder-style chains.
    #[inline]
    pub fn with(mut self, message: impl AsRef<str>) -> Self {
        self.append(message);
        self
    }

    fn push_message(&mut self, message: &str) -> Result<(), AllocError> {
        self.reserve_slot()?;
        let owned = copy_message(message)?;
        self.messages.push(owned);
        Ok(())
    }

    /// Makes room for one more message: inline first, then 8 slots, then doubling.
    fn reserve_slot(&mut self) -> Result<(), AllocError> {
        if self.messages.len() == self.messages.capacity() {
            let next_capacity = if self.messages.spilled() {
                self.messages
                    .capacity()
                    .checked_mul(2)
                    .ok_or(AllocError::Storage)?
            } else {
                FIRST_SPILL_CAPACITY
            };
            self.messages.try_grow(next_capacity)?;
        }
        Ok(())
    }

    /// Returns the number of messages, which is at least one.
    #[inline]
    pub fn count(&self) -> usize {
        self.messages.len()
    }

    /// Same as [`count`](Self::count).
    #[inline]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Always false: a list cannot exist without a message.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the message at `index`, or `None` past the last message.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index).map(String::as_str)
    }

    /// Returns the message the list was created with.
    #[inline]
    pub fn first(&self) -> &str {
        debug_assert!(!self.messages.is_empty(), "error list holds no messages");
        &self.messages[0]
    }

    /// Returns the most recently appended message.
    #[inline]
    pub fn last(&self) -> &str {
        debug_assert!(!self.messages.is_empty(), "error list holds no messages");
        &self.messages[self.messages.len() - 1]
    }

    /// Returns an iterator over the messages, oldest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.messages)
    }

    /// Returns the ordered view handed to formatters.
    #[inline]
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(&self.messages)
    }

    /// Consumes the list and returns its messages in insertion order.
    #[inline]
    pub fn into_messages(self) -> Vec<String> {
        self.messages.into_vec()
    }

    /// Renders the canonical dump: an `[error]` header line followed by one
    /// `   - <message>` line per message.
    #[inline]
    pub fn render(&self) -> String {
        DefaultFormatter.format_messages(self.messages())
    }

    /// Renders the canonical dump, or fails without producing a truncated string.
    #[inline]
    pub fn try_render(&self) -> Result<String, AllocError> {
        DefaultFormatter.try_format_messages(self.messages())
    }

    /// Renders the messages with a custom formatter.
    #[inline]
    pub fn render_with<F>(&self, formatter: &F) -> String
    where
        F: MessageFormatter + ?Sized,
    {
        formatter.format_messages(self.messages())
    }

    /// Hands the messages to `f` and returns whatever it renders.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_list::ErrorList;
    ///
    /// let list = ErrorList::new("hello").with("world");
    /// let shouted = list.render_fn(|messages| messages.iter().map(str::to_uppercase).collect());
    ///
    /// assert_eq!(shouted, "HELLOWORLD");
    /// ```
    #[inline]
    pub fn render_fn<F>(&self, f: F) -> String
    where
        F: FnOnce(Messages<'_>) -> String,
    {
        f(self.messages())
    }

    /// Writes the messages to a [`fmt::Write`] sink with a custom formatter.
    #[inline]
    pub fn write_fmt_with<F, W>(&self, formatter: &F, out: &mut W) -> fmt::Result
    where
        F: MessageFormatter + ?Sized,
        W: fmt::Write,
    {
        formatter.write_messages(self.messages(), out)
    }

    /// Releases the list and every message it owns.
    ///
    /// Dropping the list does the same; this only makes the release visible
    /// at the call site.
    #[inline]
    pub fn release(self) {
        drop(self);
    }
}

/// Releases the list held in `slot` and leaves `None` behind.
///
/// An empty slot is left untouched, so releasing through a slot more than
/// once is harmless.
///
/// # Examples
///
/// ```
/// use error_list::{release, ErrorList};
///
/// let mut slot = Some(ErrorList::new("boom"));
/// release(&mut slot);
/// assert!(slot.is_none());
///
/// release(&mut slot);
/// assert!(slot.is_none());
/// ```
#[inline]
pub fn release(slot: &mut Option<ErrorList>) {
    if let Some(list) = slot.take() {
        list.release();
    }
}

fn copy_message(message: &str) -> Result<String, AllocError> {
    let mut owned = String::new();
    owned.try_reserve_exact(message.len())?;
    owned.push_str(message);
    Ok(owned)
}

#[cold]
fn report_dropped_message(error: &AllocError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %error, "couldn't append an error");
    #[cfg(all(feature = "std", not(feature = "tracing")))]
    std::eprintln!("[error-list] couldn't append an error ({error})");
    #[cfg(not(feature = "std"))]
    let _ = error;
}

impl Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DefaultFormatter.write_messages(self.messages(), f)
    }
}

impl core::error::Error for ErrorList {}

impl Index<usize> for ErrorList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        match self.messages.get(index) {
            Some(message) => message.as_str(),
            None => panic!(
                "attempt to get an error message by index, but index is invalid (index {index}, count {})",
                self.messages.len()
            ),
        }
    }
}

impl<S: AsRef<str>> Extend<S> for ErrorList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for message in iter {
            self.append(message);
        }
    }
}

impl From<String> for ErrorList {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ErrorList {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ErrorList {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 1]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

#[cfg(feature = "std")]
mod io_sink {
    use std::fmt;
    use std::io::{self, Write};

    use super::ErrorList;
    use crate::types::error_formatter::{DefaultFormatter, MessageFormatter};

    /// Bridges a formatter's `fmt::Write` output onto an `io::Write` sink,
    /// keeping the first I/O error that interrupts it.
    struct IoSink<W> {
        inner: W,
        error: io::Result<()>,
    }

    impl<W: Write> fmt::Write for IoSink<W> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.inner.write_all(s.as_bytes()) {
                Ok(()) => Ok(()),
                Err(error) => {
                    self.error = Err(error);
                    Err(fmt::Error)
                }
            }
        }
    }

    impl ErrorList {
        /// Writes the messages to `sink` with a custom formatter.
        pub fn write_with<F, W>(&self, formatter: &F, sink: W) -> io::Result<()>
        where
            F: MessageFormatter + ?Sized,
            W: Write,
        {
            let mut adapter = IoSink { inner: sink, error: Ok(()) };
            match formatter.write_messages(self.messages(), &mut adapter) {
                Ok(()) => adapter.inner.flush(),
                Err(_) => match adapter.error {
                    Err(error) => Err(error),
                    Ok(()) => Err(io::Error::other("formatter error")),
                },
            }
        }

        /// Writes the canonical dump to `sink`.
        #[inline]
        pub fn write_to<W: Write>(&self, sink: W) -> io::Result<()> {
            self.write_with(&DefaultFormatter, sink)
        }

        /// Writes the canonical dump to standard error.
        ///
        /// Failures to write to standard error are ignored.
        pub fn log(&self) {
            let stderr = io::stderr();
            let _ = self.write_to(stderr.lock());
        }
    }
}
