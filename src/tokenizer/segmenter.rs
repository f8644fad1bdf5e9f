// Chunk-to-element segmentation: single-character symbols, word scans, and
// the abbreviation scan that keeps "i.e." / "a.k.a." in one piece.

use super::DocumentElement;

/// Characters that end a word scan.
const WORD_TERMINATORS: &[char] = &[
    '.', '!', '?', ',', '(', ')', '[', ']', '{', '}', ';', ':', '"', '<', '>',
];

fn is_word_terminator(c: char) -> bool {
    WORD_TERMINATORS.contains(&c)
}

// Every non-alphanumeric character is a symbol; symbols are always length 1.
fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Split one whitespace-free chunk into its ordered document elements.
///
/// Every character of the chunk lands in exactly one element; there is no
/// reject path. A chunk like "well,no" yields three elements, a run of only
/// digits is a word, and a dot followed by a lowercase letter switches the
/// word scan into abbreviation mode so "i.e." survives as a single word.
pub fn segment_chunk(chunk: &str) -> Vec<DocumentElement> {
    let chars: Vec<char> = chunk.chars().collect();
    let mut elements = Vec::new();

    let mut start = 0;
    while start < chars.len() {
        let end = find_end_of_element(&chars, start);
        elements.push(evaluate(&chars[start..end]));
        start = end;
    }

    elements
}

fn find_end_of_element(chars: &[char], start: usize) -> usize {
    if is_symbol(chars[start]) {
        return start + 1;
    }

    // Plain word scan. A terminating dot hands over to the abbreviation scan
    // when the character after it is a lowercase letter; the lookahead never
    // consumes.
    let mut pos = start;
    while pos < chars.len() {
        let c = chars[pos];
        if is_word_terminator(c) {
            if c == '.' && next_letter_is_lowercase(chars, pos) {
                return find_end_of_abbreviation(chars, pos);
            }
            return pos;
        }
        pos += 1;
    }

    chars.len()
}

fn next_letter_is_lowercase(chars: &[char], pos: usize) -> bool {
    match chars.get(pos + 1) {
        Some(next) if next.is_ascii_alphabetic() => next.is_ascii_lowercase(),
        _ => false,
    }
}

// Abbreviation scan: dots no longer terminate, so the scan only stops at a
// non-dot terminator or chunk end. Entered at a dot, this also walks over any
// later dot runs ("a.g.." ends at chunk end, "i.e.," ends at the comma).
fn find_end_of_abbreviation(chars: &[char], from: usize) -> usize {
    let mut pos = from;
    while pos < chars.len() {
        let c = chars[pos];
        if is_word_terminator(c) && c != '.' {
            return pos;
        }
        pos += 1;
    }

    chars.len()
}

fn evaluate(span: &[char]) -> DocumentElement {
    if span.len() == 1 && is_symbol(span[0]) {
        DocumentElement::Symbol(span[0])
    } else {
        DocumentElement::Word(span.iter().collect())
    }
}
