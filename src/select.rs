//! Frequency and word selection.
//!
//! Two terminal modes, one pass each, no retries: plain pairing removes
//! uniformly random elements from both pools; clustered pairing samples
//! anchor words and fills the remaining slots with cyclically similar
//! decoys to raise difficulty.

use std::cmp::Ordering;
use std::collections::HashSet;

use log::debug;

use crate::error::RuleGenError;
use crate::mechanics::rng::SeedStream;
use crate::mechanics::similarity::cyclic_similarity;
use crate::words::dedup_keep_order;

/// Selection mode for one generation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Uniform without-replacement pairing over the base pool.
    Plain,
    /// Anchor-plus-decoys pairing over the combined base + extended pool.
    Clustered,
}

/// Validated inputs for one selection pass.
///
/// Pools are deduplicated here and the size check runs once. A failed
/// check is a configuration error, never a retry condition.
#[derive(Clone, Debug)]
pub struct SelectionRequest {
    frequencies: Vec<u16>,
    words: Vec<String>,
    n: usize,
    mode: Mode,
}

impl SelectionRequest {
    pub fn new(
        mode: Mode,
        n: usize,
        frequencies: &[u16],
        base: &[String],
        extended: &[String],
    ) -> Result<Self, RuleGenError> {
        let mut seen = HashSet::new();
        let frequencies: Vec<u16> = frequencies
            .iter()
            .copied()
            .filter(|f| seen.insert(*f))
            .collect();
        let words = match mode {
            Mode::Plain => dedup_keep_order(base.to_vec()),
            Mode::Clustered => dedup_keep_order(base.iter().chain(extended).cloned().collect()),
        };
        if frequencies.len() < n {
            return Err(RuleGenError::InsufficientPool {
                pool: "frequency",
                have: frequencies.len(),
                need: n,
            });
        }
        if words.len() < n {
            return Err(RuleGenError::InsufficientPool {
                pool: "word",
                have: words.len(),
                need: n,
            });
        }
        Ok(Self {
            frequencies,
            words,
            n,
            mode,
        })
    }
}

/// One scored candidate during anchor expansion. Plain value record; the
/// composite (distance, tie_break) ordering does all the work.
struct Candidate {
    word: String,
    tie_break: f64,
    distance: usize,
}

/// Draw `n` (frequency, word) pairs from a validated request.
pub fn select_pairs<R: SeedStream>(
    rng: &mut R,
    request: &SelectionRequest,
) -> Result<Vec<(u16, String)>, RuleGenError> {
    match request.mode {
        Mode::Plain => Ok(select_plain(rng, request)),
        Mode::Clustered => select_clustered(rng, request),
    }
}

fn select_plain<R: SeedStream>(rng: &mut R, request: &SelectionRequest) -> Vec<(u16, String)> {
    let mut freqs = request.frequencies.clone();
    let mut words = request.words.clone();
    let mut pairs = Vec::with_capacity(request.n);
    for _ in 0..request.n {
        let freq = rng.take_random(&mut freqs);
        let word = rng.take_random(&mut words);
        pairs.push((freq, word));
    }
    pairs
}

fn select_clustered<R: SeedStream>(
    rng: &mut R,
    request: &SelectionRequest,
) -> Result<Vec<(u16, String)>, RuleGenError> {
    let n = request.n;
    let freqs = sample_by_key(rng, &request.frequencies, n);

    // Anchors seed the clusters; each pulls in up to three close decoys.
    let num_anchors = n / 2;
    let mut chosen = sample_by_key(rng, &request.words, num_anchors);
    debug!("anchor words: {}", chosen.join(", "));

    let mut i = 0;
    while i < num_anchors && chosen.len() < n {
        let anchor = chosen[i].clone();
        // Words sharing the anchor's rotated tail are near-duplicates of
        // the anchor itself; keep them out of its cluster.
        let suffix = &anchor[1..];
        let mut ranked: Vec<Candidate> = request
            .words
            .iter()
            .filter(|&w| !chosen.contains(w) && !w.ends_with(suffix))
            .map(|w| Candidate {
                word: w.clone(),
                tie_break: rng.uniform_double(),
                distance: cyclic_similarity(w, &anchor),
            })
            .collect();
        ranked.sort_by(|a, b| {
            a.distance.cmp(&b.distance).then(
                a.tie_break
                    .partial_cmp(&b.tie_break)
                    .unwrap_or(Ordering::Equal),
            )
        });
        let take = rng.uniform_int(1, 4).min(n - chosen.len()).min(ranked.len());
        debug!(
            "from {anchor}: {}",
            ranked[..take]
                .iter()
                .map(|c| format!("{}/{}/{:.3}", c.word, c.distance, c.tie_break))
                .collect::<Vec<_>>()
                .join(", ")
        );
        chosen.extend(ranked.into_iter().take(take).map(|c| c.word));
        i += 1;
    }
    if chosen.len() < n {
        return Err(RuleGenError::AnchorsExhausted {
            got: chosen.len(),
            need: n,
        });
    }
    Ok(freqs.into_iter().zip(chosen).collect())
}

/// Without-replacement sample of size `k`: fresh random key per element,
/// stable sort, take the front.
fn sample_by_key<R: SeedStream, T: Clone>(rng: &mut R, items: &[T], k: usize) -> Vec<T> {
    let mut keyed: Vec<(f64, &T)> = items.iter().map(|it| (rng.uniform_double(), it)).collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().take(k).map(|(_, it)| it.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Fixed draw sequences; panics when a script runs dry.
    struct ScriptedRng {
        doubles: VecDeque<f64>,
        ints: VecDeque<usize>,
    }

    impl ScriptedRng {
        fn new(doubles: &[f64], ints: &[usize]) -> Self {
            Self {
                doubles: doubles.iter().copied().collect(),
                ints: ints.iter().copied().collect(),
            }
        }
    }

    impl SeedStream for ScriptedRng {
        fn uniform_double(&mut self) -> f64 {
            self.doubles.pop_front().expect("double script ran dry")
        }

        fn uniform_int(&mut self, _lo: usize, _hi: usize) -> usize {
            self.ints.pop_front().expect("int script ran dry")
        }
    }

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn clustered_selection_follows_the_draw_script() {
        let base = owned(&["trick", "rickt", "track", "lemon", "melon", "onlem"]);
        let request =
            SelectionRequest::new(Mode::Clustered, 4, &[502, 505, 512, 515], &base, &[]).unwrap();

        // Draw order: one key per frequency, one key per pool word for the
        // anchor sample, then per anchor one tie-break per candidate in
        // pool order followed by the cluster size.
        let mut rng = ScriptedRng::new(
            &[
                0.4, 0.3, 0.2, 0.1, // frequency keys -> 515, 512, 505, 502
                0.1, 0.9, 0.8, 0.2, 0.7, 0.6, // anchor keys -> trick, lemon
                0.5, 0.6, 0.7, 0.8, // tie-breaks for rickt, track, melon, onlem
                0.5, 0.6, 0.7, // tie-breaks for track, melon, onlem
            ],
            &[1, 1], // cluster sizes per anchor
        );

        let pairs = select_pairs(&mut rng, &request).unwrap();
        assert_eq!(
            pairs,
            vec![
                (515, "trick".to_string()),
                (512, "lemon".to_string()),
                (505, "rickt".to_string()),
                (502, "onlem".to_string()),
            ]
        );
    }

    #[test]
    fn clustered_selection_takes_up_to_three_per_anchor() {
        let base = owned(&["trick", "rickt", "track", "lemon", "melon", "onlem"]);
        let request =
            SelectionRequest::new(Mode::Clustered, 4, &[502, 505, 512, 515], &base, &[]).unwrap();

        // Same script, but the first anchor asks for two decoys; the set
        // fills after one anchor and the second never runs.
        let mut rng = ScriptedRng::new(
            &[
                0.4, 0.3, 0.2, 0.1, //
                0.1, 0.9, 0.8, 0.2, 0.7, 0.6, //
                0.5, 0.6, 0.7, 0.8, //
            ],
            &[2],
        );

        let pairs = select_pairs(&mut rng, &request).unwrap();
        let words: Vec<&str> = pairs.iter().map(|(_, w)| w.as_str()).collect();
        // rickt (distance 0) then track (distance 1), ascending as ranked.
        assert_eq!(words, ["trick", "lemon", "rickt", "track"]);
    }

    #[test]
    fn suffix_exclusion_can_exhaust_the_anchors() {
        // Every non-anchor word ends with each anchor's 1-rotation suffix
        // "ight", so both clusters come up empty.
        let base = owned(&["light", "night", "right", "sight"]);
        let request =
            SelectionRequest::new(Mode::Clustered, 4, &[502, 505, 512, 515], &base, &[]).unwrap();

        let mut rng = ScriptedRng::new(
            &[
                0.4, 0.3, 0.2, 0.1, // frequency keys
                0.1, 0.2, 0.9, 0.8, // anchor keys -> light, night
            ],
            &[3, 3],
        );

        let err = select_pairs(&mut rng, &request).unwrap_err();
        assert_eq!(err, RuleGenError::AnchorsExhausted { got: 2, need: 4 });
    }

    #[test]
    fn plain_selection_pairs_in_draw_order() {
        let base = owned(&["alpha", "bravo", "candy"]);
        let request =
            SelectionRequest::new(Mode::Plain, 2, &[502, 505, 512], &base, &[]).unwrap();

        // take_random draws an index into the shrinking pool each time:
        // freq[1]=505, word[2]=candy, then freq[0]=502, word[0]=alpha.
        let mut rng = ScriptedRng::new(&[], &[1, 2, 0, 0]);
        let pairs = select_pairs(&mut rng, &request).unwrap();
        assert_eq!(
            pairs,
            vec![(505, "candy".to_string()), (502, "alpha".to_string())]
        );
    }

    #[test]
    fn request_validation_counts_after_dedup() {
        let base = owned(&["echo", "echo", "fox"]);
        let err = SelectionRequest::new(Mode::Plain, 3, &[502, 505, 512], &base, &[]).unwrap_err();
        assert_eq!(
            err,
            RuleGenError::InsufficientPool {
                pool: "word",
                have: 2,
                need: 3,
            }
        );
    }
}
