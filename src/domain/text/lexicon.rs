//! Polarity lexicon
//!
//! Fixed word-to-weight tables for sentiment scoring: signed weights for
//! sentiment-bearing words, multipliers for intensity modifiers, and a set
//! of negation words. Weights live in [-1.0, 1.0].

use std::collections::{HashMap, HashSet};

/// Strongly positive words (0.7 - 1.0)
const STRONG_POSITIVE: &[(&str, f64)] = &[
    ("love", 0.75),
    ("loved", 0.75),
    ("adore", 0.8),
    ("wonderful", 0.85),
    ("amazing", 0.85),
    ("excellent", 0.85),
    ("fantastic", 0.85),
    ("incredible", 0.9),
    ("awesome", 0.8),
    ("brilliant", 0.8),
    ("perfect", 0.9),
    ("delighted", 0.85),
    ("thrilled", 0.9),
    ("overjoyed", 0.95),
    ("ecstatic", 0.95),
    ("joy", 0.8),
    ("joyful", 0.85),
    ("beautiful", 0.75),
    ("superb", 0.85),
    ("marvelous", 0.85),
    ("outstanding", 0.85),
    ("grateful", 0.75),
    ("blessed", 0.7),
    ("magical", 0.75),
    ("best", 0.8),
    ("great", 0.7),
];

/// Moderately positive words (0.3 - 0.6)
const MODERATE_POSITIVE: &[(&str, f64)] = &[
    ("good", 0.5),
    ("happy", 0.6),
    ("happiness", 0.6),
    ("nice", 0.45),
    ("pleasant", 0.5),
    ("fun", 0.55),
    ("enjoy", 0.55),
    ("enjoyed", 0.55),
    ("calm", 0.4),
    ("peaceful", 0.5),
    ("relaxed", 0.5),
    ("relaxing", 0.5),
    ("hope", 0.4),
    ("hopeful", 0.5),
    ("optimistic", 0.55),
    ("proud", 0.55),
    ("satisfied", 0.5),
    ("glad", 0.5),
    ("better", 0.4),
    ("excited", 0.6),
    ("exciting", 0.6),
    ("success", 0.55),
    ("successful", 0.6),
    ("accomplished", 0.6),
    ("productive", 0.5),
    ("energized", 0.55),
    ("refreshed", 0.5),
    ("laugh", 0.5),
    ("laughed", 0.5),
    ("smile", 0.5),
    ("smiled", 0.5),
    ("warm", 0.35),
    ("comfortable", 0.45),
    ("sunshine", 0.45),
];

/// Strongly negative words (-0.7 to -1.0)
const STRONG_NEGATIVE: &[(&str, f64)] = &[
    ("hate", -0.8),
    ("hated", -0.8),
    ("terrible", -0.85),
    ("awful", -0.85),
    ("horrible", -0.9),
    ("worst", -0.85),
    ("devastated", -0.95),
    ("devastating", -0.9),
    ("miserable", -0.85),
    ("depressed", -0.8),
    ("depressing", -0.75),
    ("furious", -0.85),
    ("disgusting", -0.85),
    ("dreadful", -0.85),
    ("heartbroken", -0.9),
    ("unbearable", -0.9),
    ("nightmare", -0.85),
    ("hopeless", -0.8),
    ("despair", -0.85),
    ("agony", -0.9),
    ("grief", -0.8),
];

/// Moderately negative words (-0.3 to -0.6)
const MODERATE_NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.5),
    ("sad", -0.6),
    ("sadness", -0.6),
    ("angry", -0.6),
    ("anger", -0.55),
    ("upset", -0.55),
    ("tired", -0.35),
    ("exhausted", -0.5),
    ("worried", -0.5),
    ("worry", -0.45),
    ("anxious", -0.55),
    ("anxiety", -0.55),
    ("stress", -0.5),
    ("stressed", -0.55),
    ("stressful", -0.55),
    ("annoyed", -0.5),
    ("annoying", -0.5),
    ("frustrated", -0.55),
    ("frustrating", -0.55),
    ("lonely", -0.6),
    ("afraid", -0.55),
    ("fear", -0.55),
    ("scared", -0.55),
    ("cry", -0.5),
    ("cried", -0.5),
    ("pain", -0.55),
    ("hurt", -0.5),
    ("sick", -0.5),
    ("gloomy", -0.5),
    ("disappointed", -0.55),
    ("disappointing", -0.55),
    ("regret", -0.5),
    ("guilty", -0.5),
    ("failed", -0.55),
    ("failure", -0.6),
    ("difficult", -0.4),
    ("rough", -0.4),
];

/// Intensity modifiers: >1.0 amplifies the next sentiment word, <1.0 dampens
const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("extremely", 1.8),
    ("incredibly", 1.7),
    ("absolutely", 1.6),
    ("totally", 1.4),
    ("completely", 1.5),
    ("truly", 1.4),
    ("deeply", 1.5),
    ("so", 1.3),
    ("quite", 1.2),
    ("pretty", 1.2),
    ("fairly", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
    ("little", 0.7),
    ("bit", 0.8),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "hardly", "scarcely",
    "cannot", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "cant", "can't",
    "couldnt", "couldn't", "wont", "won't", "wouldnt", "wouldn't", "shouldnt", "shouldn't",
    "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't", "werent", "weren't", "havent",
    "haven't", "hasnt", "hasn't", "hadnt", "hadn't", "mustnt", "mustn't", "neednt", "needn't",
];

/// Word-level sentiment lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    weights: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Lexicon {
    pub fn new() -> Self {
        let weights = STRONG_POSITIVE
            .iter()
            .chain(MODERATE_POSITIVE)
            .chain(STRONG_NEGATIVE)
            .chain(MODERATE_NEGATIVE)
            .copied()
            .collect();

        Lexicon {
            weights,
            modifiers: MODIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Signed polarity weight of a word, if it is sentiment-bearing.
    /// Expects a lowercase token.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Intensity multiplier of a word, if it is a modifier
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
