//! RNG oracle for deterministic random number generation.
//!
//! Dice rolls and name suffixes are derived from a session seed plus the
//! action nonce, so a recorded seed replays the exact same session.

use std::collections::VecDeque;
use std::sync::Mutex;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Replays a fixed queue of die faces, then falls back to [`PcgRng`].
///
/// Used to reproduce a reported session from its roll log and to force
/// specific initiative results in tests. Faces are returned as-is by
/// [`RngOracle::roll_die`] as long as they fit the die.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    faces: Mutex<VecDeque<u32>>,
}

impl ScriptedRng {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: Mutex::new(faces.into_iter().collect()),
        }
    }

    /// Appends more faces to the end of the queue.
    pub fn push(&self, faces: impl IntoIterator<Item = u32>) {
        if let Ok(mut queue) = self.faces.lock() {
            queue.extend(faces);
        }
    }

    fn pop(&self) -> Option<u32> {
        self.faces.lock().ok()?.pop_front()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        match self.pop() {
            // roll_die maps (face - 1) back onto face
            Some(face) => face.saturating_sub(1),
            None => PcgRng.next_u32(seed),
        }
    }
}

/// Compute deterministic seed from game state components.
///
/// * `game_seed` - Base seed set when the session is created
/// * `nonce` - Action sequence number (increments each committed action)
/// * `slot` - Join-order index of the player the roll is for
/// * `context` - Distinguishes several rolls inside the same action
pub fn compute_seed(game_seed: u64, nonce: u64, slot: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (slot as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
