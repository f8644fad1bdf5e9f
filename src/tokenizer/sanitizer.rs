// Word normalization: lowercase plus symbol removal under an explicit,
// per-call policy. No hidden global state; the caller picks the policy.

/// Symbol-removal policy applied after lowercasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPolicy {
    /// Drop every non-alphanumeric character.
    RemoveAll,
    /// Keep alphanumerics and dots, then collapse a trailing run of two or
    /// more dots down to a single trailing dot ("a.g.." becomes "a.g.").
    KeepAbbreviationDots,
}

impl SymbolPolicy {
    /// Policy the aggregation pipeline selects for a raw word: two or more
    /// literal dots mark an abbreviation or dotted acronym.
    pub fn for_word(raw: &str) -> Self {
        if raw.chars().filter(|&c| c == '.').count() >= 2 {
            SymbolPolicy::KeepAbbreviationDots
        } else {
            SymbolPolicy::RemoveAll
        }
    }

    fn keeps(self, c: char) -> bool {
        match self {
            SymbolPolicy::RemoveAll => c.is_ascii_alphanumeric(),
            SymbolPolicy::KeepAbbreviationDots => c.is_ascii_alphanumeric() || c == '.',
        }
    }
}

/// Lowercase `word` and strip undesired characters per `policy`.
///
/// Returns a new string; the input is never mutated. Idempotent: sanitizing
/// an already-sanitized word returns it unchanged.
pub fn sanitize(word: &str, policy: SymbolPolicy) -> String {
    let mut sanitized = String::with_capacity(word.len());

    for c in word.chars() {
        let c = c.to_ascii_lowercase();
        if policy.keeps(c) {
            sanitized.push(c);
        }
    }

    if policy == SymbolPolicy::KeepAbbreviationDots {
        remove_excessive_dots(&mut sanitized);
    }

    sanitized
}

fn remove_excessive_dots(word: &mut String) {
    let trailing_dots = word.chars().rev().take_while(|&c| c == '.').count();
    for _ in 1..trailing_dots {
        word.pop();
    }
}
