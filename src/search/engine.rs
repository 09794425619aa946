use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{InputKind, WordFinderError};
use crate::grid::{GridIndex, Orientation};
use crate::search::config::DEFAULT_MAX_RESULTS;
use crate::search::outputs::WordCount;
use crate::search::query::{QueryWord, normalize_word};

/// Runtime knobs for a [`WordSearchEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum number of words returned; capped at [`DEFAULT_MAX_RESULTS`]
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// Ranks query words by how often they appear along grid rows and columns.
///
/// The engine only reads its grid, so `find` can be called any number of
/// times, from several threads, against one shared [`GridIndex`].
#[derive(Debug, Clone)]
pub struct WordSearchEngine {
    grid: Arc<GridIndex>,
    options: SearchOptions,
}

impl WordSearchEngine {
    /// Create an engine over an owned or shared grid
    pub fn new(grid: impl Into<Arc<GridIndex>>) -> Self {
        Self::with_options(grid, SearchOptions::default())
    }

    pub fn with_options(grid: impl Into<Arc<GridIndex>>, options: SearchOptions) -> Self {
        Self {
            grid: grid.into(),
            options,
        }
    }

    /// Validate `rows` into a grid and wrap it in an engine
    pub fn from_rows<I, S>(rows: I) -> Result<Self, WordFinderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(GridIndex::new(rows)?))
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Find the most frequent words of `words` in the grid.
    ///
    /// Returns lower-cased words ordered by descending occurrence count, ties
    /// kept in first-seen order, at most [`DEFAULT_MAX_RESULTS`] of them.
    /// Absent, empty and repeated words are skipped.
    pub fn find<I>(&self, words: I) -> Result<Vec<String>, WordFinderError>
    where
        I: IntoIterator,
        I::Item: QueryWord,
    {
        Ok(self
            .rank(words)?
            .into_iter()
            .map(|count| count.word)
            .collect())
    }

    /// [`find`](Self::find) for a query stream that may be absent altogether
    pub fn find_optional<I>(&self, words: Option<I>) -> Result<Vec<String>, WordFinderError>
    where
        I: IntoIterator,
        I::Item: QueryWord,
    {
        match words {
            Some(words) => self.find(words),
            None => Err(WordFinderError::NullInput(InputKind::Wordstream)),
        }
    }

    /// Same ranking as [`find`](Self::find), keeping the occurrence counts
    pub fn rank<I>(&self, words: I) -> Result<Vec<WordCount>, WordFinderError>
    where
        I: IntoIterator,
        I::Item: QueryWord,
    {
        let mut words = words.into_iter().peekable();
        if words.peek().is_none() {
            return Err(WordFinderError::EmptyQuery);
        }

        // Tracks which words were already counted; `counts` keeps first-seen order.
        let mut seen: HashSet<String> = HashSet::new();
        let mut counts: Vec<WordCount> = Vec::new();

        for word in words {
            let Some(word) = word.as_query_word() else {
                tracing::trace!("Skipping absent query word");
                continue;
            };

            let normalized = normalize_word(word);
            if normalized.is_empty() {
                tracing::trace!("Skipping empty query word");
                continue;
            }

            if seen.contains(&normalized) {
                tracing::debug!("Skipping repeated query word '{}'", normalized);
                continue;
            }

            let chars: Vec<char> = normalized.chars().collect();
            let mut occurrences = 0;
            for orientation in Orientation::ALL {
                occurrences += self.count_chars(&chars, orientation)?;
            }

            tracing::debug!("'{}' occurs {} times", normalized, occurrences);
            seen.insert(normalized.clone());
            counts.push(WordCount::new(normalized, occurrences));
        }

        counts.retain(|count| count.occurrences > 0);
        // `sort_by` is stable, so equal counts stay in first-seen order.
        counts.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        counts.truncate(self.options.max_results.min(DEFAULT_MAX_RESULTS));

        Ok(counts)
    }

    /// Count contiguous, possibly overlapping runs of `word` in `orientation`
    pub fn count_occurrences(
        &self,
        word: &str,
        orientation: Orientation,
    ) -> Result<usize, WordFinderError> {
        let chars: Vec<char> = normalize_word(word).chars().collect();
        self.count_chars(&chars, orientation)
    }

    fn count_chars(&self, word: &[char], orientation: Orientation) -> Result<usize, WordFinderError> {
        let scan_length = self.grid.scan_length(orientation);
        if word.len() > scan_length {
            return Ok(0);
        }

        let max_start = scan_length - word.len();
        let mut occurrences = 0;

        for lane in 0..self.grid.lane_count(orientation) {
            'start: for start in 0..=max_start {
                for (offset, expected) in word.iter().enumerate() {
                    if self.grid.char_at(lane, start + offset, orientation)? != *expected {
                        continue 'start;
                    }
                }
                occurrences += 1;
            }
        }

        Ok(occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rows: &[&str]) -> WordSearchEngine {
        WordSearchEngine::from_rows(rows).unwrap()
    }

    #[test]
    fn test_counts_per_orientation() {
        let engine = engine(&["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"]);
        assert_eq!(engine.count_occurrences("chill", Orientation::Horizontal), Ok(1));
        assert_eq!(engine.count_occurrences("chill", Orientation::Vertical), Ok(0));
        assert_eq!(engine.count_occurrences("cold", Orientation::Vertical), Ok(1));
        assert_eq!(engine.count_occurrences("WIND", Orientation::Vertical), Ok(1));
        assert_eq!(engine.count_occurrences("snow", Orientation::Horizontal), Ok(0));
    }

    #[test]
    fn test_overlapping_matches_each_count() {
        let engine = engine(&["aaaa", "bbbb"]);
        assert_eq!(engine.count_occurrences("aa", Orientation::Horizontal), Ok(3));
        assert_eq!(engine.count_occurrences("ab", Orientation::Vertical), Ok(4));
    }

    #[test]
    fn test_word_longer_than_axis_counts_zero() {
        let engine = engine(&["abc", "def"]);
        assert_eq!(engine.count_occurrences("abcd", Orientation::Horizontal), Ok(0));
        assert_eq!(engine.count_occurrences("adx", Orientation::Vertical), Ok(0));
        assert_eq!(engine.find(["abcd", "adg"]), Ok(vec![]));
    }

    #[test]
    fn test_no_reverse_or_wraparound_matches() {
        let engine = engine(&["abc", "def", "ghi"]);
        assert_eq!(engine.count_occurrences("cba", Orientation::Horizontal), Ok(0));
        assert_eq!(engine.count_occurrences("gda", Orientation::Vertical), Ok(0));
        assert_eq!(engine.count_occurrences("cd", Orientation::Horizontal), Ok(0));
        assert_eq!(engine.count_occurrences("aei", Orientation::Horizontal), Ok(0));
    }

    #[test]
    fn test_rank_orders_by_count_then_first_seen() {
        let engine = engine(&["abab", "xyzx"]);
        // Columns read "ax", "by", "az", "bx".
        let ranked = engine.rank(["xy", "ba", "by", "ab", "qq"]).unwrap();
        assert_eq!(
            ranked,
            vec![
                WordCount::new("ab", 2),
                WordCount::new("xy", 1),
                WordCount::new("ba", 1),
                WordCount::new("by", 1),
            ]
        );
    }

    #[test]
    fn test_duplicates_count_once_first_seen_wins() {
        let engine = engine(&["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"]);
        let with_dupes = engine.find(["Chill", "cold", "CHILL", "chill"]).unwrap();
        assert_eq!(with_dupes, vec!["chill", "cold"]);
        assert_eq!(with_dupes, engine.find(["chill", "cold"]).unwrap());
    }

    #[test]
    fn test_absent_and_empty_words_are_skipped() {
        let engine = engine(&["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"]);
        let words = vec![None, Some(""), Some("wind"), None];
        assert_eq!(engine.find(&words), Ok(vec!["wind".to_string()]));
        assert_eq!(engine.find([""]), Ok(vec![]));
    }

    #[test]
    fn test_query_words_are_not_trimmed() {
        let engine = engine(&["abcdc", "fgwio", "chill", "pqnsd", "uvdxy"]);
        assert_eq!(engine.find([" chill"]), Ok(vec![]));
    }

    #[test]
    fn test_empty_and_null_query() {
        let engine = engine(&["abc"]);
        assert_eq!(
            engine.find(Vec::<String>::new()),
            Err(WordFinderError::EmptyQuery)
        );
        assert_eq!(
            engine.find_optional(None::<Vec<&str>>),
            Err(WordFinderError::NullInput(InputKind::Wordstream))
        );
        assert_eq!(
            engine.find_optional(Some(["abc"])),
            Ok(vec!["abc".to_string()])
        );
    }

    #[test]
    fn test_max_results_option_is_capped() {
        let grid = GridIndex::new(["abcdefghijklmnop"]).unwrap();
        let letters: Vec<String> = ('a'..='p').map(String::from).collect();

        let small = WordSearchEngine::with_options(grid.clone(), SearchOptions { max_results: 3 });
        assert_eq!(small.find(&letters).unwrap(), vec!["a", "b", "c"]);

        let large = WordSearchEngine::with_options(grid, SearchOptions { max_results: 50 });
        assert_eq!(large.find(&letters).unwrap().len(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_engines_share_one_grid() {
        let grid = Arc::new(GridIndex::new(["abc", "bcd"]).unwrap());
        let first = WordSearchEngine::new(Arc::clone(&grid));
        let second = WordSearchEngine::new(Arc::clone(&grid));
        assert_eq!(first.find(["bc"]), second.find(["bc"]));
        assert_eq!(first.grid(), &*grid);
    }
}
