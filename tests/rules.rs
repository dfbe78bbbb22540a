// tests/rules.rs
use std::collections::HashSet;

use bevy_prng::WyRand;
use rand_core::SeedableRng;

use morse_rules::{
    DIAL_FREQUENCIES, Mode, RULES_PER_SET, RuleGenError, SelectionRequest, TermSink, generate,
    generate_with, select_pairs, term_key,
};

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn same_seed_same_rule_set() {
    for mode in [Mode::Plain, Mode::Clustered] {
        let a = generate(1337, mode, "en").unwrap();
        let b = generate(1337, mode, "en").unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn different_seeds_diverge() {
    let a = generate(1, Mode::Clustered, "en").unwrap();
    let b = generate(2, Mode::Clustered, "en").unwrap();
    assert_ne!(a.mapping, b.mapping);
}

#[test]
fn frequencies_and_words_are_distinct_pool_members() {
    for mode in [Mode::Plain, Mode::Clustered] {
        let set = generate(99, mode, "en").unwrap();
        assert_eq!(set.mapping.len(), RULES_PER_SET);
        for freq in set.mapping.keys() {
            assert!(DIAL_FREQUENCIES.contains(freq));
        }
        let terms: HashSet<&String> = set.mapping.values().collect();
        assert_eq!(terms.len(), RULES_PER_SET);
    }
}

#[test]
fn signal_table_covers_the_alphabet_in_every_mode() {
    let plain = generate(5, Mode::Plain, "en").unwrap();
    let clustered = generate(77, Mode::Clustered, "en").unwrap();
    assert_eq!(plain.signal_table, clustered.signal_table);

    assert_eq!(plain.signal_table.len(), 26);
    for (letter, signals) in &plain.signal_table {
        assert!(letter.is_ascii_lowercase());
        assert!(!signals.is_empty());
    }
}

#[test]
fn unknown_locale_falls_back_to_english() {
    let a = generate(11, Mode::Plain, "xx").unwrap();
    let b = generate(11, Mode::Plain, "en").unwrap();
    assert_eq!(a, b);
}

#[test]
fn insufficient_pools_fail_up_front() {
    let base = owned(&["alpha", "bravo", "candy"]);
    let err = SelectionRequest::new(Mode::Plain, 4, &[502, 505, 512, 515], &base, &[]).unwrap_err();
    assert_eq!(
        err,
        RuleGenError::InsufficientPool {
            pool: "word",
            have: 3,
            need: 4,
        }
    );

    let base = owned(&["alpha", "bravo", "candy", "delta"]);
    let err = SelectionRequest::new(Mode::Plain, 4, &[502, 505, 505], &base, &[]).unwrap_err();
    assert_eq!(
        err,
        RuleGenError::InsufficientPool {
            pool: "frequency",
            have: 2,
            need: 4,
        }
    );
}

#[test]
fn plain_mode_consumes_the_whole_pool() {
    let base = owned(&["alpha", "bravo", "candy", "delta"]);
    let request = SelectionRequest::new(Mode::Plain, 4, &[502, 505, 512, 515], &base, &[]).unwrap();

    let mut rng = WyRand::from_seed(7u64.to_le_bytes());
    let pairs = select_pairs(&mut rng, &request).unwrap();

    let freqs: HashSet<u16> = pairs.iter().map(|(f, _)| *f).collect();
    let words: HashSet<&str> = pairs.iter().map(|(_, w)| w.as_str()).collect();
    let want_freqs: HashSet<u16> = [502, 505, 512, 515].into_iter().collect();
    let want_words: HashSet<&str> = ["alpha", "bravo", "candy", "delta"].into_iter().collect();
    assert_eq!(freqs, want_freqs);
    assert_eq!(words, want_words);
}

#[derive(Default)]
struct RecordingSink(Vec<(String, String)>);

impl TermSink for RecordingSink {
    fn register_display_term(&mut self, key: &str, value: &str) {
        self.0.push((key.to_string(), value.to_string()));
    }
}

#[test]
fn one_display_term_per_selected_word() {
    let mut sink = RecordingSink::default();
    let set = generate_with(42, Mode::Clustered, "en", &mut sink).unwrap();

    assert_eq!(sink.0.len(), RULES_PER_SET);
    for (key, value) in &sink.0 {
        assert_eq!(key, &term_key(value));
        assert!(set.mapping.values().any(|term| term == key));
    }
}
