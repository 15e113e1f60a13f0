//! Most frequent content words per sentiment label.

use std::collections::{BTreeMap, HashMap};

use trendscope_core::SentimentLabel;

use crate::types::ClassifiedRecord;

const STOPWORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "for", "of", "that", "this", "a", "an", "with", "what", "about",
    "just", "have", "from", "your", "will", "been", "than", "they", "into", "how",
];

const MIN_WORD_LEN: usize = 4;
const TOP_KEYWORDS: usize = 10;

/// Top keywords for each label.
///
/// Words are lowercased with surrounding punctuation trimmed; words shorter
/// than four characters and stopwords are skipped. Each list holds at most ten
/// words ordered by frequency, ties broken alphabetically. Every label is
/// present in the map, with an empty list when nothing qualified.
#[must_use]
pub fn sentiment_keywords(records: &[ClassifiedRecord]) -> BTreeMap<SentimentLabel, Vec<String>> {
    let mut counts: BTreeMap<SentimentLabel, HashMap<String, usize>> = SentimentLabel::ALL
        .into_iter()
        .map(|label| (label, HashMap::new()))
        .collect();

    for r in records {
        let Some(content) = r.record.content.as_deref() else {
            continue;
        };
        let bucket = counts.entry(r.sentiment).or_default();
        for word in content.split_whitespace().filter_map(keyword) {
            *bucket.entry(word).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(label, words)| {
            let mut ranked: Vec<(String, usize)> = words.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            let top = ranked
                .into_iter()
                .take(TOP_KEYWORDS)
                .map(|(word, _)| word)
                .collect();
            (label, top)
        })
        .collect()
}

fn keyword(raw: &str) -> Option<String> {
    let word = raw
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '#')
        .to_lowercase();
    (word.chars().count() >= MIN_WORD_LEN && !STOPWORDS.contains(&word.as_str())).then_some(word)
}
