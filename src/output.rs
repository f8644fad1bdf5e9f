// Fixed-width rendering of concordance entries. Pure functions, no state;
// column widths were measured from the reference output format.

use crate::concordance::{Occurrences, WordIndex};

const INDEX_COLUMN_WIDTH: usize = 8;
const WORD_COLUMN_WIDTH: usize = 20;
const INDEX_OVERFLOW_SENTINEL: &str = "#######.";

/// Base-26 alphabetic label for a 1-based word index, right-padded to 8
/// columns: "a." through "z.", then "aa.", "bb.", ... An index whose label
/// would exceed 8 characters renders as the overflow sentinel "#######.".
pub fn index_label(index: WordIndex) -> String {
    // 1-based in, 0-based arithmetic.
    let zero_based = index.saturating_sub(1);
    let letter = (b'a' + (zero_based % 26) as u8) as char;
    let repeat = (zero_based / 26) as usize + 1;

    let mut label = if repeat + 1 > INDEX_COLUMN_WIDTH {
        INDEX_OVERFLOW_SENTINEL.to_string()
    } else {
        let mut label = String::with_capacity(INDEX_COLUMN_WIDTH);
        for _ in 0..repeat {
            label.push(letter);
        }
        label.push('.');
        label
    };

    pad_to(&mut label, INDEX_COLUMN_WIDTH);
    label
}

/// Word column, exactly 20 characters: longer words keep their first 17
/// characters plus "...", shorter ones are right-padded with spaces.
pub fn word_column(word: &str) -> String {
    if word.chars().count() > WORD_COLUMN_WIDTH {
        let mut truncated: String = word.chars().take(WORD_COLUMN_WIDTH - 3).collect();
        truncated.push_str("...");
        truncated
    } else {
        let mut padded = word.to_string();
        pad_to(&mut padded, WORD_COLUMN_WIDTH);
        padded
    }
}

/// Occurrence column: `{N:s1,s2,...,sK}` with N the occurrence count and the
/// sentence numbers in insertion order.
pub fn occurrences_column(occurrences: &Occurrences) -> String {
    let sentences = occurrences.as_slice();

    let mut printable = format!("{{{}:", sentences.len());
    for sentence in sentences {
        printable.push_str(&sentence.to_string());
        printable.push(',');
    }
    // The final separator becomes the closing brace.
    printable.pop();
    printable.push('}');

    printable
}

/// One concordance output line: padded index label, padded word column, and
/// the occurrence column, separated by single spaces.
pub fn join_line(index: WordIndex, word: &str, occurrences: &Occurrences) -> String {
    format!(
        "{} {} {}",
        index_label(index),
        word_column(word),
        occurrences_column(occurrences)
    )
}

fn pad_to(text: &mut String, width: usize) {
    while text.chars().count() < width {
        text.push(' ');
    }
}
