//! Rule set assembly and the fixed signal table.

use std::collections::BTreeMap;

/// One Morse symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Dot,
    Dash,
}

/// The generated answer key for one puzzle instance.
///
/// `mapping` pairs each selected dial frequency with the display term of
/// its word. `signal_table` is identical for every seed and mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    pub mapping: BTreeMap<u16, String>,
    pub signal_table: BTreeMap<char, Vec<Signal>>,
}

/// Localization collaborator: receives one display term per selected word.
///
/// Registration is fire-and-forget; the assembler neither caches nor
/// validates the outcome.
pub trait TermSink {
    fn register_display_term(&mut self, key: &str, value: &str);
}

/// Sink for environments where display terms go nowhere.
pub struct NoopTerms;

impl TermSink for NoopTerms {
    fn register_display_term(&mut self, _key: &str, _value: &str) {}
}

const TERM_PREFIX: &str = "mod/morse_word_";

/// Canonical a-z patterns.
const MORSE_PATTERNS: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

/// Deterministic display-term key for a word.
pub fn term_key(word: &str) -> String {
    format!("{TERM_PREFIX}{word}")
}

/// Letter-to-signal table; always all 26 letters, never seed-dependent.
pub fn signal_table() -> BTreeMap<char, Vec<Signal>> {
    ('a'..='z')
        .zip(MORSE_PATTERNS)
        .map(|(letter, pattern)| {
            let signals = pattern
                .chars()
                .map(|c| if c == '.' { Signal::Dot } else { Signal::Dash })
                .collect();
            (letter, signals)
        })
        .collect()
}

/// Build the rule set from selected pairs, registering one display term
/// per word on the way.
pub fn assemble<S: TermSink>(pairs: Vec<(u16, String)>, terms: &mut S) -> RuleSet {
    let mut mapping = BTreeMap::new();
    for (freq, word) in pairs {
        let key = term_key(&word);
        terms.register_display_term(&key, &word);
        mapping.insert(freq, key);
    }
    RuleSet {
        mapping,
        signal_table: signal_table(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_decodes_the_canonical_patterns() {
        let table = signal_table();
        assert_eq!(table.len(), 26);
        assert_eq!(table[&'e'], vec![Signal::Dot]);
        assert_eq!(table[&'t'], vec![Signal::Dash]);
        assert_eq!(
            table[&'q'],
            vec![Signal::Dash, Signal::Dash, Signal::Dot, Signal::Dash]
        );
        for signals in table.values() {
            assert!(!signals.is_empty());
        }
    }

    #[test]
    fn assembly_registers_every_word_once() {
        struct Recorder(Vec<(String, String)>);
        impl TermSink for Recorder {
            fn register_display_term(&mut self, key: &str, value: &str) {
                self.0.push((key.to_string(), value.to_string()));
            }
        }

        let pairs = vec![(502, "steak".to_string()), (600, "sting".to_string())];
        let mut sink = Recorder(Vec::new());
        let set = assemble(pairs, &mut sink);

        assert_eq!(set.mapping[&502], term_key("steak"));
        assert_eq!(set.mapping[&600], term_key("sting"));
        assert_eq!(
            sink.0,
            vec![
                (term_key("steak"), "steak".to_string()),
                (term_key("sting"), "sting".to_string()),
            ]
        );
    }
}
