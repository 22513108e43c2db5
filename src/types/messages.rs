//! Borrowed, ordered views over stored messages.
//!
//! [`Messages`] is what formatters receive: it exposes the messages as `&str`
//! in insertion order and nothing else about the list that owns them, so a
//! formatter can be exercised against any `&[String]`.
//!
//! # Examples
//!
//! ```
//! use error_list::types::Messages;
//!
//! let owned = vec!["hello".to_string(), "world".to_string()];
//! let messages = Messages::new(&owned);
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages.last(), Some("world"));
//! assert_eq!(messages.iter().collect::<Vec<_>>(), ["hello", "world"]);
//! ```
use core::iter::FusedIterator;
use core::slice;

use crate::types::alloc_type::String;

/// An ordered view over a run of owned messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Messages<'a> {
    items: &'a [String],
}

impl<'a> Messages<'a> {
    /// Wraps a slice of messages.
    #[inline]
    pub fn new(items: &'a [String]) -> Self {
        Self { items }
    }

    /// Returns the number of messages in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the view holds no messages.
    ///
    /// A view taken from an [`ErrorList`](crate::ErrorList) is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the message at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.items.get(index).map(String::as_str)
    }

    /// Returns the oldest message.
    #[inline]
    pub fn first(&self) -> Option<&'a str> {
        self.items.first().map(String::as_str)
    }

    /// Returns the newest message.
    #[inline]
    pub fn last(&self) -> Option<&'a str> {
        self.items.last().map(String::as_str)
    }

    /// Returns an iterator over the messages in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self.items)
    }
}

impl<'a> From<&'a [String]> for Messages<'a> {
    #[inline]
    fn from(items: &'a [String]) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for Messages<'a> {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over messages as `&str`, oldest first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(items: &'a [String]) -> Self {
        Self { inner: items.iter() }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
