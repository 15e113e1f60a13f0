//! Attaches a sentiment label to every record.

use rand::Rng;
use trendscope_core::{SentimentLabel, TrendRecord};

use crate::scorer::TextScorer;
use crate::types::ClassifiedRecord;

/// Compound scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Placeholder distribution used for records that carry no content.
pub const FALLBACK_WEIGHTS: [(SentimentLabel, f64); 3] = [
    (SentimentLabel::Positive, 0.45),
    (SentimentLabel::Neutral, 0.35),
    (SentimentLabel::Negative, 0.20),
];

/// Map a compound polarity score onto a label.
#[must_use]
pub fn label_for_compound(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Label every record.
///
/// Records with content are scored with `scorer`. Empty, whitespace-only or
/// missing content is `Neutral`, as long as at least one record in the
/// collection carries content. When none does, the content field is treated
/// as absent and every record gets a label drawn from [`FALLBACK_WEIGHTS`],
/// independently per record. That fallback is a placeholder distribution,
/// not an estimate of real sentiment, and it is only reproducible when `rng`
/// is seeded.
pub fn classify_sentiment<S, R>(
    records: &[TrendRecord],
    scorer: &S,
    rng: &mut R,
) -> Vec<ClassifiedRecord>
where
    S: TextScorer + ?Sized,
    R: Rng,
{
    let content_available = records.iter().any(|r| r.content.is_some());
    let mut fallbacks = 0usize;

    let classified: Vec<ClassifiedRecord> = records
        .iter()
        .map(|record| {
            let (sentiment, compound) = match record.content.as_deref() {
                Some(text) if text.trim().is_empty() => (SentimentLabel::Neutral, Some(0.0)),
                Some(text) => {
                    let compound = scorer.polarity(text);
                    (label_for_compound(compound), Some(compound))
                }
                None if content_available => (SentimentLabel::Neutral, None),
                None => {
                    fallbacks += 1;
                    (fallback_label(rng), None)
                }
            };
            ClassifiedRecord {
                record: record.clone(),
                sentiment,
                compound,
            }
        })
        .collect();

    if fallbacks > 0 {
        tracing::warn!(
            fallbacks,
            total = records.len(),
            "no record carries content; sentiment labels were randomly sampled"
        );
    }
    tracing::debug!(records = classified.len(), "sentiment classification complete");

    classified
}

/// Draw one label from [`FALLBACK_WEIGHTS`].
pub fn fallback_label<R: Rng>(rng: &mut R) -> SentimentLabel {
    let roll: f64 = rng.random();
    let mut cumulative = 0.0;
    for (label, weight) in FALLBACK_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return label;
        }
    }
    SentimentLabel::Negative
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use trendscope_core::{Industry, Platform};

    use super::*;
    use crate::scorer::LexiconScorer;

    struct FixedScorer(f64);

    impl TextScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn record(content: Option<&str>) -> TrendRecord {
        TrendRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            platform: Platform::Instagram,
            trend: "Clean Beauty".to_string(),
            topic: None,
            hashtags: vec!["#Skincare".to_string()],
            industry: Industry::Beauty,
            engagement: 500,
            growth_rate: 12.0,
            content: content.map(ToString::to_string),
        }
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(label_for_compound(0.05), SentimentLabel::Positive);
        assert_eq!(label_for_compound(-0.05), SentimentLabel::Negative);
        assert_eq!(label_for_compound(0.049), SentimentLabel::Neutral);
        assert_eq!(label_for_compound(-0.049), SentimentLabel::Neutral);
    }

    #[test]
    fn love_is_positive_and_empty_is_neutral() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = vec![record(Some("I love this new trend!")), record(Some(""))];
        let out = classify_sentiment(&records, &LexiconScorer::new(), &mut rng);
        assert_eq!(out[0].sentiment, SentimentLabel::Positive);
        assert_eq!(out[1].sentiment, SentimentLabel::Neutral);
    }

    #[test]
    fn scorer_is_pluggable() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = vec![record(Some("anything at all"))];
        let out = classify_sentiment(&records, &FixedScorer(-0.8), &mut rng);
        assert_eq!(out[0].sentiment, SentimentLabel::Negative);
        assert_eq!(out[0].compound, Some(-0.8));
    }

    #[test]
    fn output_preserves_order_and_records() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = vec![record(Some("bad")), record(Some("great"))];
        let out = classify_sentiment(&records, &LexiconScorer::new(), &mut rng);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].record, records[0]);
        assert_eq!(out[1].sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn missing_content_uses_fallback_without_compound() {
        let mut rng = StdRng::seed_from_u64(7);
        let records = vec![record(None); 20];
        let out = classify_sentiment(&records, &LexiconScorer::new(), &mut rng);
        assert!(out.iter().all(|r| r.compound.is_none()));
    }

    #[test]
    fn missing_content_is_neutral_when_others_have_content() {
        let mut records = vec![record(Some("I love this new trend!"))];
        records.extend(vec![record(None); 4]);
        let mut rng = StdRng::seed_from_u64(1);
        let out = classify_sentiment(&records, &LexiconScorer::new(), &mut rng);
        assert_eq!(out[0].sentiment, SentimentLabel::Positive);
        for r in &out[1..] {
            assert_eq!(r.sentiment, SentimentLabel::Neutral);
            assert!(r.compound.is_none());
        }
    }

    #[test]
    fn fallback_is_reproducible_with_same_seed() {
        let records = vec![record(None); 50];
        let a = classify_sentiment(&records, &LexiconScorer::new(), &mut StdRng::seed_from_u64(9));
        let b = classify_sentiment(&records, &LexiconScorer::new(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_roughly_follows_weights() {
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 20_000;
        let mut positive = 0usize;
        let mut negative = 0usize;
        for _ in 0..n {
            match fallback_label(&mut rng) {
                SentimentLabel::Positive => positive += 1,
                SentimentLabel::Negative => negative += 1,
                SentimentLabel::Neutral => {}
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let (p, q) = (positive as f64 / n as f64, negative as f64 / n as f64);
        assert!((p - 0.45).abs() < 0.02, "positive share {p}");
        assert!((q - 0.20).abs() < 0.02, "negative share {q}");
    }
}
