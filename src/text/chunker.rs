use std::collections::VecDeque;

const CHUNK_SEPARATOR: &str = "\n";

/// Greedily packs sentences, in order, into newline-joined chunks.
///
/// The running length counts sentence characters only, not the separators
/// added when joining, so a chunk may exceed `max_chars` by up to one
/// character per sentence boundary. A sentence longer than `max_chars` is
/// never split; it becomes a chunk of its own.
pub fn build_chunks<S: AsRef<str>>(sentences: &[S], max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for sentence in sentences {
        let sentence = sentence.as_ref();
        let len = sentence.chars().count();

        if current_len + len > max_chars && !current.is_empty() {
            chunks.push(current.join(CHUNK_SEPARATOR));
            current.clear();
            current_len = 0;
        }

        current.push(sentence);
        current_len += len;
    }

    if !current.is_empty() {
        chunks.push(current.join(CHUNK_SEPARATOR));
    }

    chunks
}

/// Splits `text` on newlines and merges the pieces into chunks of at most
/// `max_chars` (separators included), carrying up to `overlap` characters of
/// trailing pieces into the head of the next chunk.
pub fn build_overlapping_chunks(text: &str, max_chars: usize, overlap: usize) -> Vec<String> {
    let separator_len = CHUNK_SEPARATOR.chars().count();
    let pieces = text
        .split(CHUNK_SEPARATOR)
        .map(str::trim)
        .filter(|piece| !piece.is_empty());

    let mut chunks = Vec::new();
    let mut current: VecDeque<(&str, usize)> = VecDeque::new();
    let mut total = 0;

    for piece in pieces {
        let len = piece.chars().count();
        let joining = if current.is_empty() { 0 } else { separator_len };

        if total + len + joining > max_chars && !current.is_empty() {
            if total > max_chars {
                log::warn!(
                    "Created a chunk of {} chars, longer than the {} char budget",
                    total,
                    max_chars
                );
            }
            chunks.push(join_pieces(&current));

            while let Some(&(_, front_len)) = current.front() {
                if total <= overlap && total + len + separator_len <= max_chars {
                    break;
                }
                total -= front_len + if current.len() > 1 { separator_len } else { 0 };
                current.pop_front();
            }
        }

        total += len + if current.is_empty() { 0 } else { separator_len };
        current.push_back((piece, len));
    }

    if !current.is_empty() {
        if total > max_chars {
            log::warn!(
                "Created a chunk of {} chars, longer than the {} char budget",
                total,
                max_chars
            );
        }
        chunks.push(join_pieces(&current));
    }

    chunks
}

fn join_pieces(pieces: &VecDeque<(&str, usize)>) -> String {
    pieces
        .iter()
        .map(|(piece, _)| *piece)
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}
