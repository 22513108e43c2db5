//! Error list formatting utilities.
//!
//! Rendering is delegated to a [`MessageFormatter`]. The crate ships two:
//!
//! - [`DefaultFormatter`], the canonical dump:
//!   ```text
//!   [error]
//!      - <message 1>
//!      - <message 2>
//!   ```
//! - [`ListFormatConfig`], the same layout with a configurable header, item
//!   prefix, and line ending.
//!
//! Anything else (JSON, colors, a single line) is a custom formatter, either
//! a type implementing the trait or a closure wrapped with [`from_fn`].
//!
//! # Examples
//!
//! ```
//! use error_list::types::error_formatter::ListFormatConfig;
//! use error_list::ErrorList;
//!
//! let list = ErrorList::new("hello").with("world");
//!
//! assert_eq!(list.render(), "[error]\n   - hello\n   - world\n");
//! assert_eq!(list.render_with(&ListFormatConfig::plain()), "hello\nworld\n");
//! ```
use core::fmt;

use crate::types::alloc_error::AllocError;
use crate::types::alloc_type::String;
use crate::types::messages::Messages;

/// Header line written by the default formatter.
pub const DEFAULT_HEADER: &str = "[error]";
/// Prefix written before every message by the default formatter.
pub const DEFAULT_ITEM_PREFIX: &str = "   - ";
/// Terminator written after the header and every message by the default formatter.
pub const DEFAULT_LINE_END: &str = "\n";

/// Trait for customizing how a list of messages is rendered.
///
/// Implementors only see the ordered messages, never the list that owns them.
pub trait MessageFormatter {
    /// Writes the rendered messages to `out`.
    fn write_messages(&self, messages: Messages<'_>, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Renders the messages into a new string.
    fn format_messages(&self, messages: Messages<'_>) -> String {
        let mut result = String::new();
        // A String sink never reports an error.
        let _ = self.write_messages(messages, &mut result);
        result
    }
}

impl<T: MessageFormatter + ?Sized> MessageFormatter for &T {
    #[inline]
    fn write_messages(&self, messages: Messages<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).write_messages(messages, out)
    }

    #[inline]
    fn format_messages(&self, messages: Messages<'_>) -> String {
        (**self).format_messages(messages)
    }
}

/// Header, prefix and line ending of a bulleted rendering.
#[derive(Debug, Clone, Copy)]
struct ListLayout<'a> {
    header: Option<&'a str>,
    item_prefix: &'a str,
    line_end: &'a str,
}

impl ListLayout<'_> {
    fn exact_len(&self, messages: Messages<'_>) -> usize {
        let header = self.header.map_or(0, |header| header.len() + self.line_end.len());
        let framing = messages.len() * (self.item_prefix.len() + self.line_end.len());
        header + framing + messages.iter().map(str::len).sum::<usize>()
    }

    fn write(&self, messages: Messages<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        if let Some(header) = self.header {
            out.write_str(header)?;
            out.write_str(self.line_end)?;
        }
        for message in messages {
            out.write_str(self.item_prefix)?;
            out.write_str(message)?;
            out.write_str(self.line_end)?;
        }
        Ok(())
    }

    fn format(&self, messages: Messages<'_>) -> String {
        let mut result = String::with_capacity(self.exact_len(messages));
        let _ = self.write(messages, &mut result);
        result
    }

    /// Renders into a buffer reserved up front, so the output is either
    /// complete or not produced at all.
    fn try_format(&self, messages: Messages<'_>) -> Result<String, AllocError> {
        let mut result = String::new();
        result
            .try_reserve_exact(self.exact_len(messages))
            .map_err(|_| AllocError::Render)?;
        let _ = self.write(messages, &mut result);
        Ok(result)
    }
}

/// The canonical `[error]` dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultFormatter;

impl DefaultFormatter {
    const LAYOUT: ListLayout<'static> = ListLayout {
        header: Some(DEFAULT_HEADER),
        item_prefix: DEFAULT_ITEM_PREFIX,
        line_end: DEFAULT_LINE_END,
    };

    /// Exact byte length of the rendering of `messages`.
    #[inline]
    pub fn exact_len(&self, messages: Messages<'_>) -> usize {
        Self::LAYOUT.exact_len(messages)
    }

    /// Renders `messages`, or fails without producing a partial string.
    #[inline]
    pub fn try_format_messages(&self, messages: Messages<'_>) -> Result<String, AllocError> {
        Self::LAYOUT.try_format(messages)
    }
}

impl MessageFormatter for DefaultFormatter {
    #[inline]
    fn write_messages(&self, messages: Messages<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        Self::LAYOUT.write(messages, out)
    }

    #[inline]
    fn format_messages(&self, messages: Messages<'_>) -> String {
        Self::LAYOUT.format(messages)
    }
}

/// Configuration-based list formatter.
///
/// The default configuration renders exactly like [`DefaultFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListFormatConfig {
    /// Line written before the messages, followed by `line_end`.
    pub header: Option<String>,
    /// Written before every message.
    pub item_prefix: String,
    /// Written after the header and after every message.
    pub line_end: String,
}

impl Default for ListFormatConfig {
    fn default() -> Self {
        Self {
            header: Some(DEFAULT_HEADER.into()),
            item_prefix: DEFAULT_ITEM_PREFIX.into(),
            line_end: DEFAULT_LINE_END.into(),
        }
    }
}

impl ListFormatConfig {
    /// One message per line, nothing else.
    #[inline]
    pub fn plain() -> Self {
        Self { header: None, item_prefix: String::new(), ..Default::default() }
    }

    /// Sets the header line.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Drops the header line.
    pub fn without_header(mut self) -> Self {
        self.header = None;
        self
    }

    /// Sets the prefix written before every message.
    pub fn with_item_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.item_prefix = prefix.into();
        self
    }

    /// Sets the line terminator.
    pub fn with_line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }

    /// Exact byte length of the rendering of `messages`.
    #[inline]
    pub fn exact_len(&self, messages: Messages<'_>) -> usize {
        self.layout().exact_len(messages)
    }

    /// Renders `messages`, or fails without producing a partial string.
    #[inline]
    pub fn try_format_messages(&self, messages: Messages<'_>) -> Result<String, AllocError> {
        self.layout().try_format(messages)
    }

    fn layout(&self) -> ListLayout<'_> {
        ListLayout {
            header: self.header.as_deref(),
            item_prefix: &self.item_prefix,
            line_end: &self.line_end,
        }
    }
}

impl MessageFormatter for ListFormatConfig {
    #[inline]
    fn write_messages(&self, messages: Messages<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        self.layout().write(messages, out)
    }

    #[inline]
    fn format_messages(&self, messages: Messages<'_>) -> String {
        self.layout().format(messages)
    }
}

/// A formatter backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnFormatter<F> {
    f: F,
}

impl<F> fmt::Debug for FnFormatter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFormatter").finish_non_exhaustive()
    }
}

impl<F> MessageFormatter for FnFormatter<F>
where
    F: Fn(Messages<'_>, &mut dyn fmt::Write) -> fmt::Result,
{
    #[inline]
    fn write_messages(&self, messages: Messages<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        (self.f)(messages, out)
    }
}

/// Turns a closure into a [`MessageFormatter`].
///
/// # Examples
///
/// ```
/// use error_list::types::error_formatter::from_fn;
/// use error_list::ErrorList;
///
/// let one_line = from_fn(|messages, out| {
///     for (i, message) in messages.iter().enumerate() {
///         if i > 0 {
///             out.write_str(" -> ")?;
///         }
///         out.write_str(message)?;
///     }
///     Ok(())
/// });
///
/// let list = ErrorList::new("parsing config").with("missing field x");
/// assert_eq!(list.render_with(&one_line), "parsing config -> missing field x");
/// ```
#[inline]
pub fn from_fn<F>(f: F) -> FnFormatter<F>
where
    F: Fn(Messages<'_>, &mut dyn fmt::Write) -> fmt::Result,
{
    FnFormatter { f }
}
