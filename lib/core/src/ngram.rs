// Character n-gram extraction for short, unsegmented text
use ahash::AHashMap;

/// Shortest n-gram extracted from a text
pub const MIN_NGRAM: usize = 2;
/// Longest n-gram extracted from a text
pub const MAX_NGRAM: usize = 3;

/// Lowercase the text and collapse runs of two or more whitespace characters
/// into a single space.
///
/// A lone whitespace character (space, tab, newline) is kept as is and stays
/// part of the surrounding n-grams. Leading and trailing runs are collapsed
/// but not stripped.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.extend(c.to_lowercase());
        } else if chars.peek().is_some_and(|next| next.is_whitespace()) {
            while chars.next_if(|next| next.is_whitespace()).is_some() {}
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// All overlapping character n-grams of `text` for n in
/// [`MIN_NGRAM`]..=[`MAX_NGRAM`], bigrams first.
///
/// N-grams are cut on code point boundaries, never inside a UTF-8 sequence.
pub fn char_ngrams(text: &str) -> Vec<&str> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let chars = bounds.len() - 1;

    let mut grams = Vec::new();
    for n in MIN_NGRAM..=MAX_NGRAM {
        if chars < n {
            break;
        }
        grams.extend((0..=chars - n).map(|start| &text[bounds[start]..bounds[start + n]]));
    }
    grams
}

/// Raw term frequencies of the n-grams of an already normalized text.
pub fn term_counts(normalized: &str) -> AHashMap<&str, u32> {
    let mut counts: AHashMap<&str, u32> = AHashMap::new();
    for gram in char_ngrams(normalized) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}
