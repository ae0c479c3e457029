//! Best-effort distractor generation for multiple-choice content.
//!
//! Wrong options are drawn from a small topic vocabulary chosen by
//! keyword match, or synthesized by reshuffling the words of a multi-word
//! answer. This is heuristic content generation, not a guarantee of
//! semantic plausibility.

use crate::shuffle;
use rand::seq::SliceRandom;
use rand::Rng;

/// Options returned per question: the correct answer plus 3 distractors.
pub const OPTION_COUNT: usize = 4;

const MAX_ATTEMPTS: usize = 64;

struct TopicVocab {
    keywords: &'static [&'static str],
    options: &'static [&'static str],
}

const TOPICS: &[TopicVocab] = &[
    TopicVocab {
        keywords: &["ocean", "sea", "wave", "reef", "fish", "marine", "shell"],
        options: &[
            "Pacific Ocean",
            "Atlantic Ocean",
            "Indian Ocean",
            "Arctic Ocean",
            "Southern Ocean",
            "Shark",
            "Whale",
            "Dolphin",
            "Jellyfish",
            "Trough",
            "Whitecap",
            "Breaker",
            "Squid",
            "Cuttlefish",
            "Nautilus",
            "Crab",
        ],
    },
    TopicVocab {
        keywords: &["capital", "country", "city", "continent", "river"],
        options: &[
            "Paris", "London", "Berlin", "Madrid", "Rome", "Vienna", "Lisbon", "Warsaw",
        ],
    },
    TopicVocab {
        keywords: &["planet", "star", "moon", "orbit", "galaxy"],
        options: &[
            "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Neptune", "Europa", "Titan",
        ],
    },
];

// Last resort when no vocabulary matches and word shuffling cannot
// produce enough distinct candidates.
const GENERIC_OPTIONS: &[&str] = &[
    "All of the above",
    "None of the above",
    "Not enough information",
    "It depends",
];

/// Build a shuffled set of [`OPTION_COUNT`] unique options containing
/// `correct`. `pool_hint` (typically the question text) widens the
/// keyword match used to pick a topic vocabulary.
pub fn generate<R: Rng + ?Sized>(
    correct: &str,
    pool_hint: Option<&str>,
    rng: &mut R,
) -> Vec<String> {
    let haystack = format!("{} {}", correct, pool_hint.unwrap_or("")).to_lowercase();
    let vocab = TOPICS
        .iter()
        .find(|topic| topic.keywords.iter().any(|k| haystack.contains(k)))
        .map(|topic| topic.options);
    let words: Vec<&str> = correct.split_whitespace().collect();

    let mut options = vec![correct.to_string()];
    let mut attempts = 0;
    while options.len() < OPTION_COUNT && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let candidate = match vocab {
            Some(pool) => match pool.choose(rng) {
                Some(pick) => pick.to_string(),
                None => continue,
            },
            None if words.len() > 1 => shuffle::shuffled(&words, rng).join(" "),
            None => match GENERIC_OPTIONS.choose(rng) {
                Some(pick) => pick.to_string(),
                None => continue,
            },
        };
        if candidate != correct && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    // Two-word answers only have two orderings; top up from the generic
    // pool when random sampling stalls.
    for filler in GENERIC_OPTIONS {
        if options.len() >= OPTION_COUNT {
            break;
        }
        if *filler != correct && !options.iter().any(|o| o == filler) {
            options.push(filler.to_string());
        }
    }

    shuffle::shuffled(&options, rng)
}
