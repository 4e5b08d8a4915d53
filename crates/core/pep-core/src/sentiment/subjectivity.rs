//! Polarity and subjectivity scorer
//!
//! Averages `(polarity, subjectivity)` assessments of known adjectives.
//! Adverb modifiers ("very", "slightly") scale the word that follows them and
//! a preceding negation multiplies polarity by -0.5.

use crate::types::Subjectivity;
use std::collections::HashMap;

const NEGATION_FACTOR: f32 = -0.5;

const NEGATIONS: &[&str] = &[
    "not", "never", "no", "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont",
    "isnt", "shouldnt", "wasnt", "werent", "wont", "wouldnt",
];

/// `(word, polarity, subjectivity, intensity)`; intensity other than 1.0 marks a modifier
const LEXICON: &[(&str, f32, f32, f32)] = &[
    // modifiers
    ("very", 0.2, 0.3, 1.3),
    ("really", 0.2, 0.2, 1.3),
    ("extremely", 0.0, 0.6, 1.5),
    ("incredibly", 0.0, 0.6, 1.5),
    ("totally", 0.0, 0.75, 1.3),
    ("so", 0.0, 0.0, 1.2),
    ("quite", 0.0, 1.0, 1.1),
    ("pretty", 0.25, 1.0, 1.1),
    ("slightly", 0.0, 0.3, 0.5),
    ("somewhat", 0.0, 0.3, 0.7),
    ("little", -0.1875, 0.5, 0.8),
    // assessments
    ("afraid", -0.6, 0.9, 1.0),
    ("alone", 0.0, 0.5, 1.0),
    ("amazing", 0.6, 0.9, 1.0),
    ("angry", -0.5, 1.0, 1.0),
    ("anxious", -0.25, 0.75, 1.0),
    ("awesome", 1.0, 1.0, 1.0),
    ("awful", -1.0, 1.0, 1.0),
    ("bad", -0.7, 0.667, 1.0),
    ("beautiful", 0.85, 1.0, 1.0),
    ("best", 1.0, 0.3, 1.0),
    ("better", 0.5, 0.5, 1.0),
    ("bored", -0.5, 1.0, 1.0),
    ("calm", 0.3, 0.75, 1.0),
    ("confused", -0.4, 0.7, 1.0),
    ("crazy", -0.6, 0.9, 1.0),
    ("depressed", -0.5, 1.0, 1.0),
    ("difficult", -0.5, 1.0, 1.0),
    ("empty", -0.1, 0.5, 1.0),
    ("excited", 0.375, 0.75, 1.0),
    ("exhausted", -0.4, 0.8, 1.0),
    ("fine", 0.4167, 0.5, 1.0),
    ("free", 0.4, 0.8, 1.0),
    ("frustrated", -0.7, 0.4, 1.0),
    ("furious", -0.6, 0.9, 1.0),
    ("future", 0.0, 0.125, 1.0),
    ("glad", 0.5, 1.0, 1.0),
    ("good", 0.7, 0.6, 1.0),
    ("grateful", 0.4, 0.75, 1.0),
    ("great", 0.8, 0.75, 1.0),
    ("happy", 0.8, 1.0, 1.0),
    ("hard", -0.2917, 0.5417, 1.0),
    ("helpless", -0.5, 0.75, 1.0),
    ("hopeful", 0.5, 0.75, 1.0),
    ("hopeless", -0.5, 0.9, 1.0),
    ("horrible", -1.0, 1.0, 1.0),
    ("important", 0.4, 1.0, 1.0),
    ("isolated", -0.1, 0.4, 1.0),
    ("joyful", 0.7, 0.8, 1.0),
    ("lonely", -0.4, 0.7, 1.0),
    ("lost", 0.0, 0.0, 1.0),
    ("mad", -0.625, 1.0, 1.0),
    ("miserable", -1.0, 1.0, 1.0),
    ("nervous", -0.2, 0.8, 1.0),
    ("new", 0.1364, 0.4545, 1.0),
    ("nice", 0.6, 1.0, 1.0),
    ("normal", 0.15, 0.65, 1.0),
    ("okay", 0.5, 0.5, 1.0),
    ("peaceful", 0.25, 0.75, 1.0),
    ("pleased", 0.5, 1.0, 1.0),
    ("proud", 0.8, 1.0, 1.0),
    ("sad", -0.5, 1.0, 1.0),
    ("safe", 0.5, 0.5, 1.0),
    ("scared", -0.5, 0.8, 1.0),
    ("sick", -0.7143, 0.8571, 1.0),
    ("strong", 0.4333, 0.7333, 1.0),
    ("stupid", -0.8, 1.0, 1.0),
    ("terrible", -1.0, 1.0, 1.0),
    ("tired", -0.4, 0.7, 1.0),
    ("ugly", -0.7, 1.0, 1.0),
    ("unhappy", -0.6, 0.9, 1.0),
    ("upset", -0.5, 0.8, 1.0),
    ("useless", -0.5, 0.2, 1.0),
    ("weak", -0.375, 0.625, 1.0),
    ("wonderful", 1.0, 1.0, 1.0),
    ("worried", -0.3, 0.8, 1.0),
    ("worse", -0.4, 0.6, 1.0),
    ("worst", -1.0, 1.0, 1.0),
    ("worthless", -0.8, 0.9, 1.0),
];

#[derive(Debug, Clone, Copy)]
struct Entry {
    polarity: f32,
    subjectivity: f32,
    intensity: f32,
}

impl Entry {
    fn is_modifier(&self) -> bool {
        (self.intensity - 1.0).abs() > f32::EPSILON
    }
}

#[derive(Debug)]
struct Assessment {
    polarity: f32,
    subjectivity: f32,
    intensity: f32,
    negated: bool,
}

/// Adjective-lexicon scorer for polarity and subjectivity
#[derive(Debug, Clone)]
pub struct SubjectivityScorer {
    lexicon: HashMap<&'static str, Entry>,
}

impl Default for SubjectivityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectivityScorer {
    /// Scorer over the built-in adjective lexicon
    pub fn new() -> Self {
        let lexicon = LEXICON
            .iter()
            .map(|&(word, polarity, subjectivity, intensity)| {
                (
                    word,
                    Entry {
                        polarity,
                        subjectivity,
                        intensity,
                    },
                )
            })
            .collect();
        Self { lexicon }
    }

    /// Score already-normalized text; no known words yields `(0, 0)`
    pub fn score(&self, text: &str) -> Subjectivity {
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut after_modifier = false;
        let mut pending_negation = false;

        for word in text.split_whitespace() {
            if let Some(entry) = self.lexicon.get(word) {
                match assessments.last_mut() {
                    Some(last) if after_modifier => {
                        last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                        last.subjectivity = (entry.subjectivity * last.intensity).clamp(0.0, 1.0);
                        last.intensity = entry.intensity;
                    }
                    _ => assessments.push(Assessment {
                        polarity: entry.polarity,
                        subjectivity: entry.subjectivity,
                        intensity: entry.intensity,
                        negated: false,
                    }),
                }
                if pending_negation {
                    if let Some(last) = assessments.last_mut() {
                        last.negated = true;
                    }
                    pending_negation = false;
                }
                after_modifier = entry.is_modifier();
            } else if NEGATIONS.contains(&word) {
                pending_negation = true;
            } else {
                // Short filler words ("a", "is") keep a pending modifier/negation alive.
                if word.len() > 1 {
                    pending_negation = false;
                }
                if word.len() > 2 {
                    after_modifier = false;
                }
            }
        }

        if assessments.is_empty() {
            return Subjectivity::default();
        }

        let n = assessments.len() as f32;
        let polarity: f32 = assessments
            .iter()
            .map(|a| {
                if a.negated {
                    a.polarity * NEGATION_FACTOR
                } else {
                    a.polarity
                }
            })
            .sum::<f32>()
            / n;
        let subjectivity: f32 = assessments.iter().map(|a| a.subjectivity).sum::<f32>() / n;

        Subjectivity {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_words_score_zero() {
        let scorer = SubjectivityScorer::new();
        assert_eq!(scorer.score(""), Subjectivity::default());
        assert_eq!(scorer.score("the meeting is at noon"), Subjectivity::default());
    }

    #[test]
    fn test_single_adjective() {
        let scores = SubjectivityScorer::new().score("i am happy");
        assert!((scores.polarity - 0.8).abs() < 1e-6);
        assert!((scores.subjectivity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_modifier_scales_following_word() {
        let scorer = SubjectivityScorer::new();
        let plain = scorer.score("good");
        let boosted = scorer.score("very good");
        assert!((boosted.polarity - 0.91).abs() < 1e-4);
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn test_negation_halves_and_flips() {
        let scores = SubjectivityScorer::new().score("not good");
        assert!((scores.polarity + 0.35).abs() < 1e-4);
    }

    #[test]
    fn test_negation_dropped_across_long_words() {
        let scores = SubjectivityScorer::new().score("not feeling good");
        assert!((scores.polarity - 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_averages_assessments() {
        let scores = SubjectivityScorer::new().score("sad and tired");
        assert!((scores.polarity + 0.45).abs() < 1e-4);
        assert!((scores.subjectivity - 0.85).abs() < 1e-4);
    }

    #[test]
    fn test_bounds() {
        let scores = SubjectivityScorer::new().score("extremely extremely awful");
        assert!(scores.polarity >= -1.0 && scores.polarity <= 1.0);
        assert!(scores.subjectivity >= 0.0 && scores.subjectivity <= 1.0);
    }
}
