// Tests for the public library surface through the crate re-exports.

use concord::{
    changes_sentence, index_label, is_valid, occurrences_column, sanitize, word_column,
    Concordance, DocumentElement, ElementStream, Occurrences, SymbolPolicy,
};
use tempfile::TempDir;

fn word(s: &str) -> DocumentElement {
    DocumentElement::Word(s.to_string())
}

fn symbol(c: char) -> DocumentElement {
    DocumentElement::Symbol(c)
}

#[test]
fn test_element_stream_over_assignment_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join("assignment.txt");

    let mut text = String::new();
    text += "Given an arbitrary text document written in English, write a program that will generate a \n";
    text += "concordance, i.e. an alphabetical list of all word occurrences, labeled with word \n";
    text += "frequencies. \n\n";
    text += "Bonus: label each word with the sentence numbers in which each occurrence appeared";
    std::fs::write(&file_path, &text).expect("Failed to write document");

    let elements: Vec<DocumentElement> = ElementStream::open(&file_path).collect();

    let expected = vec![
        word("Given"),
        word("an"),
        word("arbitrary"),
        word("text"),
        word("document"),
        word("written"),
        word("in"),
        word("English"),
        symbol(','),
        word("write"),
        word("a"),
        word("program"),
        word("that"),
        word("will"),
        word("generate"),
        word("a"),
        word("concordance"),
        symbol(','),
        word("i.e."),
        word("an"),
        word("alphabetical"),
        word("list"),
        word("of"),
        word("all"),
        word("word"),
        word("occurrences"),
        symbol(','),
        word("labeled"),
        word("with"),
        word("word"),
        word("frequencies"),
        symbol('.'),
        word("Bonus"),
        symbol(':'),
        word("label"),
        word("each"),
        word("word"),
        word("with"),
        word("the"),
        word("sentence"),
        word("numbers"),
        word("in"),
        word("which"),
        word("each"),
        word("occurrence"),
        word("appeared"),
    ];

    assert_eq!(elements, expected);
}

#[test]
fn test_element_stream_nonexistent_file() {
    let mut stream = ElementStream::open(
        "/if/this/path/is/found/I/should/have/played/in/the/lottery/instead.txt",
    );
    assert!(!stream.has_next());
}

#[test]
fn test_changes_sentence_truth_table() {
    for c in ' '..='~' {
        let expected = matches!(c, '.' | '!' | '?' | ';');
        assert_eq!(
            changes_sentence(c),
            expected,
            "changes_sentence({c:?}) should be {expected}"
        );
    }
}

#[test]
fn test_from_sentences_round_trip() {
    let concordance = Concordance::from_sentences([vec!["This", "is", "a"], vec!["is", "the"]]);

    let mut rendered = Vec::new();
    concordance.for_each_word(|index, word, occurrences| {
        rendered.push((index, word.to_string(), occurrences.as_slice().to_vec()));
    });

    assert_eq!(
        rendered,
        vec![
            (1, "a".to_string(), vec![1]),
            (2, "is".to_string(), vec![1, 2]),
            (3, "the".to_string(), vec![2]),
            (4, "this".to_string(), vec![1]),
        ]
    );
}

#[test]
fn test_concordance_equality_semantics() {
    let left = Concordance::from_sentences([vec!["alpha", "beta"]]);
    let right = Concordance::from_sentences([vec!["alpha", "beta"]]);
    assert_eq!(left, right);

    let different = Concordance::from_sentences([vec!["beta", "alpha"], vec!["alpha"]]);
    assert_ne!(left, different);
}

#[test]
fn test_sanitizer_fixtures() {
    assert_eq!(sanitize("B.2.B.", SymbolPolicy::RemoveAll), "b2b");
    assert_eq!(
        sanitize("B.2.B.", SymbolPolicy::KeepAbbreviationDots),
        "b.2.b."
    );
    assert_eq!(sanitize("a.g..", SymbolPolicy::KeepAbbreviationDots), "a.g.");
    assert_eq!(
        SymbolPolicy::for_word("B.2.B."),
        SymbolPolicy::KeepAbbreviationDots
    );
    assert_eq!(SymbolPolicy::for_word("end."), SymbolPolicy::RemoveAll);
}

#[test]
fn test_validator_fixtures() {
    assert!(!is_valid(""));
    assert!(!is_valid("b@11sh1t"));
    assert!(!is_valid("0623141258"));
    assert!(is_valid("a.k.a"));
}

#[test]
fn test_formatting_fixtures() {
    assert_eq!(index_label(1), "a.      ");
    assert_eq!(index_label(27), "aa.     ");
    assert_eq!(index_label(1258796214524), "#######.");
    assert_eq!(
        word_column("averydummylargewordthatexceedslimit"),
        "averydummylargewo..."
    );

    let occurrences: Occurrences = [1u64, 3, 4].into_iter().collect();
    assert_eq!(occurrences_column(&occurrences), "{3:1,3,4}");
}
