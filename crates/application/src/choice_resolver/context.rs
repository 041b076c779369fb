//! Per-resolution selection state.

use promptflow_domain::SelectionPolicy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Selection state owned by a single resolution pass.
///
/// The running index advances once per resolved choice point. Under the
/// random policy each choice point consumes one draw from a generator
/// seeded with the caller's seed.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    policy: SelectionPolicy,
    seed: u64,
    running_index: u64,
    rng: Option<StdRng>,
}

impl ResolutionContext {
    /// Creates a fresh context.
    #[must_use]
    pub fn new(policy: SelectionPolicy, seed: u64) -> Self {
        Self {
            policy,
            seed,
            running_index: 0,
            rng: policy.is_random().then(|| StdRng::seed_from_u64(seed)),
        }
    }

    /// Number of choice points resolved so far.
    #[must_use]
    pub const fn running_index(&self) -> u64 {
        self.running_index
    }

    /// Picks an index in `0..len` and advances the running index.
    ///
    /// Returns `None` without touching any state when `len` is zero.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let offset = i128::from(self.seed) + i128::from(self.running_index);
        let index = match self.policy {
            SelectionPolicy::Fixed => 0,
            SelectionPolicy::Random => self
                .rng
                .as_mut()
                .map_or(0, |rng| rng.random_range(0..len)),
            SelectionPolicy::Increment => wrap(offset, len),
            SelectionPolicy::Decrement => wrap(-offset - 1, len),
        };

        self.running_index = self.running_index.saturating_add(1);
        Some(index)
    }

    /// Selects one option and advances the running index.
    pub fn select<'o>(&mut self, options: &'o [String]) -> Option<(usize, &'o str)> {
        let index = self.next_index(options.len())?;
        options.get(index).map(|chosen| (index, chosen.as_str()))
    }
}

/// Floored modulo of `offset` into `0..len`.
fn wrap(offset: i128, len: usize) -> usize {
    let modulus = i128::try_from(len).unwrap_or(i128::MAX);
    usize::try_from(offset.rem_euclid(modulus)).unwrap_or(0)
}
