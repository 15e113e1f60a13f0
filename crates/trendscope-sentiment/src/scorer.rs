//! Lexicon scorer producing a VADER-style compound polarity.

use std::collections::HashMap;

/// Maps free text to a compound polarity score in `[-1.0, 1.0]`.
///
/// Any lexicon or model can stand behind this; the classifier only relies on
/// the sign and magnitude of the returned score.
pub trait TextScorer {
    fn polarity(&self, text: &str) -> f64;
}

/// Word valences on the `[-4.0, 4.0]` scale.
///
/// Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("love", 3.2),
    ("loved", 2.9),
    ("loving", 2.9),
    ("great", 3.1),
    ("good", 1.9),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("happy", 2.7),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("beautiful", 2.9),
    ("nice", 1.8),
    ("cool", 1.3),
    ("fun", 2.3),
    ("exciting", 2.2),
    ("excited", 1.4),
    ("interesting", 1.7),
    ("inspiring", 2.2),
    ("impressive", 2.3),
    ("brilliant", 2.8),
    ("win", 2.8),
    ("winning", 2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("popular", 1.8),
    ("thriving", 2.0),
    ("recommend", 1.5),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("glad", 2.0),
    ("thanks", 1.9),
    ("helpful", 1.8),
    ("useful", 1.9),
    ("perfect", 2.7),
    ("innovative", 1.8),
    ("fresh", 1.3),
    ("free", 2.3),
    ("yes", 1.7),
    // Negative signals
    ("hate", -2.7),
    ("hated", -3.2),
    ("bad", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("worst", -3.1),
    ("horrible", -2.5),
    ("sad", -2.1),
    ("angry", -2.3),
    ("disappointing", -2.2),
    ("disappointed", -1.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("problem", -1.7),
    ("problems", -1.7),
    ("boring", -1.3),
    ("annoying", -1.8),
    ("ugly", -2.3),
    ("scam", -2.6),
    ("fake", -2.1),
    ("broken", -1.5),
    ("waste", -1.8),
    ("poor", -2.1),
    ("wrong", -2.1),
    ("dangerous", -2.1),
    ("harmful", -2.2),
    ("ban", -2.6),
    ("banned", -2.0),
    ("worried", -1.2),
    ("crisis", -3.1),
    ("overrated", -1.5),
    ("no", -1.2),
];

/// Words that flip the polarity of a lexicon hit within the next three tokens.
const NEGATIONS: &[&str] = &[
    "not", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "without",
];

/// Intensifiers (positive) and dampeners (negative) applied to the following hit.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("really", 0.293),
    ("extremely", 0.293),
    ("so", 0.293),
    ("super", 0.293),
    ("incredibly", 0.293),
    ("absolutely", 0.293),
    ("totally", 0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("barely", -0.293),
    ("kinda", -0.293),
];

const NEGATION_SCALAR: f64 = -0.74;
const CAPS_INCREMENT: f64 = 0.733;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Rule-based scorer over a word-valence lexicon.
///
/// Handles negation ("not good"), boosters ("very good"), emphasis by
/// capitalisation, contrast around "but", and trailing exclamation marks.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Scorer over the built-in lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON
                .iter()
                .map(|&(word, valence)| (word.to_string(), valence))
                .collect(),
        }
    }

    /// Add or replace a lexicon entry. Valences are clamped to `[-4.0, 4.0]`.
    #[must_use]
    pub fn with_entry(mut self, word: &str, valence: f64) -> Self {
        self.lexicon
            .insert(word.to_lowercase(), valence.clamp(-4.0, 4.0));
        self
    }

    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word).copied()
    }

    /// Sum of adjusted valences before normalization.
    fn raw_sum(&self, text: &str) -> f64 {
        let raw: Vec<&str> = text.split_whitespace().collect();
        let words: Vec<String> = raw.iter().map(|w| normalize_word(w)).collect();

        let any_lower = raw.iter().any(|w| w.chars().any(char::is_lowercase));
        let but_at = words.iter().position(|w| w == "but");

        let mut sum = 0.0_f64;
        for (i, word) in words.iter().enumerate() {
            let Some(mut valence) = self.valence(word) else {
                continue;
            };
            // "no" only counts on its own; before another word it acts as a negation.
            if word == "no" && words.get(i + 1).is_some_and(|next| !next.is_empty()) {
                continue;
            }

            if any_lower && is_shouting(raw[i]) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            let start = i.saturating_sub(3);
            for (distance, j) in (start..i).rev().enumerate() {
                if let Some(&(_, boost)) = BOOSTERS.iter().find(|(b, _)| *b == words[j]) {
                    #[allow(clippy::cast_precision_loss)]
                    let damp = 1.0 - 0.05 * distance as f64;
                    valence += boost * valence.signum() * damp;
                }
            }

            if (start..i).any(|j| is_negation(&words[j])) {
                valence *= NEGATION_SCALAR;
            }

            match but_at {
                Some(b) if i < b => valence *= 0.5,
                Some(b) if i > b => valence *= 1.5,
                _ => {}
            }

            sum += valence;
        }

        if sum.abs() > f64::EPSILON {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS);
            #[allow(clippy::cast_precision_loss)]
            let emphasis = EXCLAMATION_INCREMENT * bangs as f64;
            sum += emphasis.copysign(sum);
        }

        sum
    }
}

impl TextScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let sum = self.raw_sum(text);
        if sum.abs() <= f64::EPSILON {
            return 0.0;
        }
        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

/// Lowercase and strip surrounding punctuation, keeping inner apostrophes.
fn normalize_word(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
        .replace('\u{2019}', "'")
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't") || word == "no"
}

fn is_shouting(raw: &str) -> bool {
    let letters: Vec<char> = raw.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.iter().all(|c| c.is_uppercase())
}
