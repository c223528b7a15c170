//! Sentence segmentation for study material.
//!
//! Text is read line by line. Heading-like lines are dropped, the remaining
//! lines are joined into paragraph blocks (blank lines and dropped headings
//! end a block) and each block is split into sentences.

const TERMINATORS: [char; 3] = ['.', '!', '?'];
const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];
const ABBREVIATIONS: [&str; 11] = [
    "e.g", "i.e", "dr", "mr", "mrs", "ms", "prof", "vs", "fig", "st", "cf",
];
const MAX_HEADING_WORDS: usize = 8;

/// A short, fully upper-case line such as `INTRODUCTION` or `2. CELL BIOLOGY`.
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.split_whitespace().count() <= MAX_HEADING_WORDS && is_upper(trimmed)
}

fn is_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

pub fn tokenize(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || is_heading(line) {
            flush_block(&mut block, &mut sentences);
            continue;
        }
        block.push(line);
    }
    flush_block(&mut block, &mut sentences);

    sentences
}

fn flush_block(block: &mut Vec<&str>, sentences: &mut Vec<String>) {
    if block.is_empty() {
        return;
    }
    let joined = block.join(" ");
    block.clear();

    sentences.extend(
        split_sentences(&joined)
            .into_iter()
            .filter(|s| !is_heading(s)),
    );
}

fn split_sentences(block: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = block.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if !TERMINATORS.contains(&c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && TERMINATORS.contains(&chars[j].1) {
            j += 1;
        }
        while j < chars.len() && CLOSERS.contains(&chars[j].1) {
            j += 1;
        }

        let at_boundary = j == chars.len() || chars[j].1.is_whitespace();
        let end = chars.get(j).map(|(o, _)| *o).unwrap_or(block.len());
        let single_period = c == '.' && j == i + 1;
        let continues = single_period
            && period_continues_sentence(&block[start..offset], block[end..].trim_start());
        if at_boundary && !continues {
            push_trimmed(&block[start..end], &mut sentences);
            start = end;
        }
        i = j;
    }
    push_trimmed(&block[start..], &mut sentences);

    sentences
}

/// Whether a period after the last word of `prefix` is an abbreviation mark
/// rather than a sentence end, given the `next` text after it.
///
/// `No.` only abbreviates before a number and `etc.` ends the sentence when a
/// capitalised word follows. A single letter is an initial only when it
/// follows a capitalised word or sits next to another initial, as in
/// `J. R. Tolkien`.
fn period_continues_sentence(prefix: &str, next: &str) -> bool {
    let mut words = prefix.split_whitespace().rev();
    let word = words
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return false;
    }

    let next_first = next.chars().next();
    let lower = word.to_lowercase();
    match lower.as_str() {
        "no" => next_first.is_some_and(|c| c.is_ascii_digit()),
        "etc" => !next_first.is_some_and(char::is_uppercase),
        _ if is_initial(word) => {
            words.next().map_or(true, starts_with_upper) || starts_with_initial(next)
        }
        _ => ABBREVIATIONS.contains(&lower.as_str()),
    }
}

fn is_initial(word: &str) -> bool {
    let mut letters = word.chars();
    matches!((letters.next(), letters.next()), (Some(first), None) if first.is_alphabetic())
}

fn starts_with_initial(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .and_then(|token| token.strip_suffix('.'))
        .is_some_and(is_initial)
}

fn starts_with_upper(word: &str) -> bool {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}

fn push_trimmed(candidate: &str, sentences: &mut Vec<String>) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
