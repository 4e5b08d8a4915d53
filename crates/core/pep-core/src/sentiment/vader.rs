//! Compound polarity scorer
//!
//! A lexicon-and-rules scorer in the style of VADER: per-token valences from a
//! lexicon, adjusted for degree boosters, negation, contrastive "but" and
//! punctuation emphasis, then squashed into a compound score in [-1, 1].

use crate::nlp::normalize;
use crate::types::PolarityScores;
use crate::{PepError, Result};
use std::collections::HashMap;

/// Lexicon bundled with the crate
pub const BUILTIN_LEXICON: &str = include_str!("../../data/vader_lexicon.tsv");

const BOOSTER_INCR: f32 = 0.293;
const BOOSTER_DECR: f32 = -0.293;
const NEGATION_SCALAR: f32 = -0.74;
const NORMALIZATION_ALPHA: f32 = 15.0;
const MAX_VALENCE: f32 = 4.0;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "no", "nobody", "none",
    "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "wasnt",
    "werent", "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

const BOOSTERS_UP: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously",
    "fully", "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more",
    "most", "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "unbelievably", "unusually", "utterly", "very",
];

const BOOSTERS_DOWN: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

fn booster(word: &str) -> Option<f32> {
    if BOOSTERS_UP.contains(&word) {
        Some(BOOSTER_INCR)
    } else if BOOSTERS_DOWN.contains(&word) {
        Some(BOOSTER_DECR)
    } else {
        None
    }
}

/// Booster adjustment for `word`, signed to push `valence` further from zero
fn scalar_inc_dec(word: &str, valence: f32) -> f32 {
    match booster(word) {
        Some(scalar) if valence < 0.0 => -scalar,
        Some(scalar) => scalar,
        None => 0.0,
    }
}

fn round_to(value: f32, places: i32) -> f32 {
    let factor = 10f32.powi(places);
    (value * factor).round() / factor
}

/// Emphasis added by exclamation and question marks
fn punctuation_emphasis(text: &str) -> f32 {
    let exclamations = text.matches('!').count().min(4) as f32 * 0.292;
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f32 * 0.18,
        _ => 0.96,
    };
    exclamations + question_amp
}

/// Squash an unbounded sum into [-1, 1]
pub fn normalize_score(score: f32) -> f32 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

/// VADER-style scorer over a `word -> valence` lexicon
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: HashMap<String, f32>,
}

impl VaderScorer {
    /// Scorer over the bundled lexicon
    pub fn builtin() -> Result<Self> {
        Self::from_tsv(BUILTIN_LEXICON)
    }

    /// Parse a `word<TAB>valence` lexicon
    ///
    /// Blank lines and `#` comments are skipped. Any other malformed line,
    /// out-of-range valence or duplicate word fails the whole load.
    pub fn from_tsv(source: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();

        for (idx, raw) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let (word, valence) = match (fields.next(), fields.next()) {
                (Some(w), Some(v)) => (w.trim(), v.trim()),
                _ => return Err(PepError::lexicon(line_no, "expected word<TAB>valence")),
            };

            if word.is_empty() || normalize(word) != word {
                return Err(PepError::lexicon(
                    line_no,
                    format!("word {:?} is not lowercase letters", word),
                ));
            }

            let valence: f32 = valence
                .parse()
                .map_err(|_| PepError::lexicon(line_no, format!("invalid valence {:?}", valence)))?;
            if !valence.is_finite() || valence.abs() > MAX_VALENCE {
                return Err(PepError::lexicon(
                    line_no,
                    format!("valence {} outside [-4, 4]", valence),
                ));
            }

            if lexicon.insert(word.to_string(), valence).is_some() {
                return Err(PepError::lexicon(line_no, format!("duplicate word {:?}", word)));
            }
        }

        if lexicon.is_empty() {
            return Err(PepError::lexicon(0, "lexicon has no entries"));
        }

        Ok(Self { lexicon })
    }

    /// Number of lexicon entries
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// True when the lexicon is empty (never, once loaded)
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Raw valence of a single word
    pub fn valence_of(&self, word: &str) -> Option<f32> {
        self.lexicon.get(word).copied()
    }

    /// Score `text`
    ///
    /// Tokens are whitespace-separated, trimmed of surrounding punctuation and
    /// lowercased; single-character tokens are ignored. Empty input scores
    /// all zeros.
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let owned: Vec<String> = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
            .filter(|t| t.chars().count() > 1)
            .collect();
        let tokens: Vec<&str> = owned.iter().map(String::as_str).collect();

        let mut sentiments = Vec::with_capacity(tokens.len());
        for (i, word) in tokens.iter().enumerate() {
            if booster(word).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if *word == "kind" && tokens.get(i + 1) == Some(&"of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&tokens, i));
        }

        but_check(&tokens, &mut sentiments);
        score_valence(&sentiments, punctuation_emphasis(text))
    }

    fn token_valence(&self, tokens: &[&str], i: usize) -> f32 {
        let Some(mut valence) = self.valence_of(tokens[i]) else {
            return 0.0;
        };

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prior = tokens[i - distance];
            if self.lexicon.contains_key(prior) {
                continue;
            }
            let mut scalar = scalar_inc_dec(prior, valence);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_check(valence, tokens, distance, i);
        }

        self.least_check(valence, tokens, i)
    }

    /// "least" flips polarity unless it is "at least" / "very least"
    fn least_check(&self, valence: f32, tokens: &[&str], i: usize) -> f32 {
        if i == 0 || tokens[i - 1] != "least" || self.lexicon.contains_key("least") {
            return valence;
        }
        if i > 1 && matches!(tokens[i - 2], "at" | "very") {
            return valence;
        }
        valence * NEGATION_SCALAR
    }
}

fn negation_check(valence: f32, tokens: &[&str], distance: usize, i: usize) -> f32 {
    let amplifies = |w: &str| w == "so" || w == "this";
    match distance {
        1 => {
            if is_negation(tokens[i - 1]) {
                return valence * NEGATION_SCALAR;
            }
        }
        2 => {
            if tokens[i - 2] == "never" && amplifies(tokens[i - 1]) {
                return valence * 1.25;
            }
            if tokens[i - 2] == "without" && tokens[i - 1] == "doubt" {
                return valence;
            }
            if is_negation(tokens[i - 2]) {
                return valence * NEGATION_SCALAR;
            }
        }
        3 => {
            if tokens[i - 3] == "never" && (amplifies(tokens[i - 2]) || amplifies(tokens[i - 1])) {
                return valence * 1.25;
            }
            if tokens[i - 3] == "without" && (tokens[i - 2] == "doubt" || tokens[i - 1] == "doubt")
            {
                return valence;
            }
            if is_negation(tokens[i - 3]) {
                return valence * NEGATION_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// Sentiment before "but" is halved and after it is boosted
fn but_check(tokens: &[&str], sentiments: &mut [f32]) {
    let Some(but_idx) = tokens.iter().position(|w| *w == "but") else {
        return;
    };
    for (idx, s) in sentiments.iter_mut().enumerate() {
        if idx < but_idx {
            *s *= 0.5;
        } else if idx > but_idx {
            *s *= 1.5;
        }
    }
}

fn score_valence(sentiments: &[f32], emphasis: f32) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let mut sum: f32 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize_score(sum);

    let mut pos_sum = 0.0f32;
    let mut neg_sum = 0.0f32;
    let mut neu_count = 0.0f32;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}
