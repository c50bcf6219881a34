//! Item filtering with "did you mean" correction

use serde::Serialize;

use super::corpus::Corpus;
use super::matcher::find_best_match;

/// Default similarity needed before a query is corrected
pub const DEFAULT_AUTOCORRECT_THRESHOLD: f64 = 0.5;

/// Items kept by [`filter_with_auto_correct`] and the correction applied, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCorrected<T> {
    pub filtered: Vec<T>,
    pub suggested_term: Option<String>,
}

impl<T> AutoCorrected<T> {
    /// Map the kept items, keeping the suggestion
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> AutoCorrected<U> {
        AutoCorrected {
            filtered: self.filtered.into_iter().map(f).collect(),
            suggested_term: self.suggested_term,
        }
    }
}

/// Filter `items` by `query`, correcting the query when it is close to a known term.
///
/// The corpus is every distinct string `extract_text` yields. When the best
/// match is approximate (similarity strictly between 0 and 1) items are
/// filtered by the matched term and that term is reported as the suggestion.
/// Otherwise items are filtered by the literal query. A blank query keeps
/// every item. Matching is case-insensitive and item order is preserved.
pub fn filter_with_auto_correct<'a, T, S, F>(
    items: &'a [T],
    query: &str,
    extract_text: F,
    threshold: f64,
) -> AutoCorrected<&'a T>
where
    S: AsRef<str>,
    F: Fn(&T) -> S,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return AutoCorrected {
            filtered: items.iter().collect(),
            suggested_term: None,
        };
    }

    let corpus = Corpus::from_items(items, &extract_text);
    let best = find_best_match(&needle, corpus.terms(), threshold);

    let (needle, suggested_term) = match best.term {
        Some(term) if best.similarity > 0.0 && best.similarity < 1.0 => {
            (term.to_lowercase(), Some(term))
        }
        _ => (needle, None),
    };

    let filtered = items
        .iter()
        .filter(|&item| {
            extract_text(item)
                .as_ref()
                .to_lowercase()
                .contains(&needle)
        })
        .collect();

    AutoCorrected {
        filtered,
        suggested_term,
    }
}
