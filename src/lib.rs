/*!
`morse_rules` — seed-deterministic answer keys for a Morse frequency puzzle.

What it does
- Draws 16 dial frequencies and 16 transmission words from fixed pools
  through a caller-seeded random stream and pairs them into a rule set.
- In clustered mode, sampled anchor words pull in cyclically similar
  decoys, so near-miss transcriptions stay on the dial and the puzzle
  gets harder.
- Attaches the fixed a-z signal table to every rule set.

How to use (call surface only)
- `generate(seed, mode, locale) -> Result<RuleSet, RuleGenError>`.
- `generate_with(seed, mode, locale, sink)` when display terms must reach
  a localization collaborator; `generate` drops them.
- Custom pools go through `WordBank::with_pools` + `SelectionRequest::new`
  + `select_pairs` + `assemble`.

What it does NOT do
- No rendering, no input handling, no persistence, no PRNG of its own.
  Randomness arrives through `SeedStream` (satisfied by any
  `rand_core::RngCore`); the default generator is `bevy_prng::WyRand`.
  Same seed, same rule set.
*/

use bevy_prng::WyRand;
use rand_core::SeedableRng;

pub mod error;
pub mod mechanics;
pub mod rules;
pub mod select;
pub mod words;

pub use error::RuleGenError;
pub use mechanics::rng::SeedStream;
pub use mechanics::similarity::{cyclic_similarity, edit_distance};
pub use rules::{NoopTerms, RuleSet, Signal, TermSink, assemble, signal_table, term_key};
pub use select::{Mode, SelectionRequest, select_pairs};
pub use words::{DIAL_FREQUENCIES, WordBank};

/// Rules in one generated set.
pub const RULES_PER_SET: usize = 16;

/// Generate the answer key for one puzzle instance, dropping display terms.
pub fn generate(seed: u64, mode: Mode, locale: &str) -> Result<RuleSet, RuleGenError> {
    generate_with(seed, mode, locale, &mut NoopTerms)
}

/// Generate with a localization collaborator that receives one display
/// term per selected word.
pub fn generate_with<S: TermSink>(
    seed: u64,
    mode: Mode,
    locale: &str,
    terms: &mut S,
) -> Result<RuleSet, RuleGenError> {
    let bank = WordBank::builtin();
    let request = SelectionRequest::new(
        mode,
        RULES_PER_SET,
        &DIAL_FREQUENCIES,
        bank.base_words(locale),
        bank.extended_words(locale),
    )?;
    let mut rng = WyRand::from_seed(seed.to_le_bytes());
    let pairs = select_pairs(&mut rng, &request)?;
    Ok(assemble(pairs, terms))
}
