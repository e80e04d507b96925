//! Word frequency implementations.

use std::collections::HashMap;

use crate::utils::VariantInfo;

pub const DEFAULT_TOP_N: usize = 5;

/// Lowercased whitespace-separated tokens with non-alphanumerics removed.
/// Tokens left empty are dropped.
pub fn normalized_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .flat_map(char::to_lowercase)
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
}

/// Count each distinct word by rescanning the token list.
///
/// Sorted by count descending; ties keep first-appearance order.
pub fn word_frequency_original(text: &str, top_n: usize) -> Vec<(String, usize)> {
    let words: Vec<String> = normalized_words(text).collect();

    let mut counts: Vec<(String, usize)> = Vec::new();
    for word in &words {
        if counts.iter().any(|(seen, _)| seen == word) {
            continue;
        }
        let count = words.iter().filter(|w| *w == word).count();
        counts.push((word.clone(), count));
    }

    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
}

/// Single counting pass with a map from word to (first position, count).
pub fn word_frequency_hashmap(text: &str, top_n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, word) in normalized_words(text).enumerate() {
        counts.entry(word).or_insert((position, 0)).1 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (first, count))| (word, first, count))
        .collect();
    ranked.sort_unstable_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(word, _, count)| (word, count))
        .collect()
}

pub type WordFrequencyFn = fn(&str, usize) -> Vec<(String, usize)>;

pub fn available_variants() -> Vec<VariantInfo<WordFrequencyFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Rescan the token list once per distinct word",
            function: word_frequency_original,
        },
        VariantInfo {
            name: "hashmap",
            description: "One counting pass over a hash map",
            function: word_frequency_hashmap,
        },
    ]
}
