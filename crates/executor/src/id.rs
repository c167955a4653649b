//! Record identifier generation.
//!
//! Ids are drawn from one process-wide `StdRng`, seeded once from OS entropy
//! on first use and never reseeded. The generator sits behind a trait so a
//! predictable sequence can be substituted in tests.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alphabet ids are drawn from: `a-z` then `A-Z`
pub const ID_ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default id length
pub const DEFAULT_ID_LENGTH: usize = 32;

static RNG: Lazy<Mutex<StdRng>> = Lazy::new(|| Mutex::new(StdRng::from_entropy()));

/// Generates unique identifiers for new records.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier string. Never fails.
    fn generate(&self) -> String;
}

/// Uniform random ids over [`ID_ALPHABET`].
#[derive(Debug, Clone, Copy)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    /// Generator producing ids of `length` characters
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = RNG.lock();
        (0..self.length)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect()
    }
}

/// Replays a fixed list of ids, then keeps returning the last one.
///
/// Lets tests force an id collision. An empty list yields empty ids.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    ids: Vec<String>,
    next: Mutex<usize>,
}

impl SequenceIdGenerator {
    /// Generator replaying `ids` in order
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            next: Mutex::new(0),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let mut next = self.next.lock();
        let id = self
            .ids
            .get(*next)
            .or_else(|| self.ids.last())
            .cloned()
            .unwrap_or_default();
        *next += 1;
        id
    }
}
