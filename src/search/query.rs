use std::borrow::Cow;

use crate::grid::fold_char;

/// A single element of a query stream.
///
/// `None` from [`QueryWord::as_query_word`] marks an absent element, which a
/// search skips just like an empty word.
pub trait QueryWord {
    fn as_query_word(&self) -> Option<&str>;
}

impl QueryWord for str {
    fn as_query_word(&self) -> Option<&str> {
        Some(self)
    }
}

impl QueryWord for String {
    fn as_query_word(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl QueryWord for Cow<'_, str> {
    fn as_query_word(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: QueryWord + ?Sized> QueryWord for &T {
    fn as_query_word(&self) -> Option<&str> {
        (**self).as_query_word()
    }
}

impl<T: QueryWord> QueryWord for Option<T> {
    fn as_query_word(&self) -> Option<&str> {
        self.as_ref().and_then(|word| word.as_query_word())
    }
}

/// Lower-case a query word with the same per-character mapping the grid uses.
///
/// Surrounding whitespace is kept; only grid rows are trimmed.
pub fn normalize_word(word: &str) -> String {
    word.chars().map(fold_char).collect()
}
