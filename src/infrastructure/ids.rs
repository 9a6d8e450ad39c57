//! Post id generation

use crate::domain::PostId;
use rand::Rng;

/// Lowercase base-36 alphabet used for generated ids
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated ids; 36^13 is roughly 2^67
pub const ID_LENGTH: usize = 13;

/// Produces candidate ids for new posts.
///
/// Generators are not required to avoid collisions themselves; the
/// repository checks candidates against the existing collection.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> PostId;
}

/// Random base-36 ids from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> PostId {
        let mut rng = rand::thread_rng();
        let id: String = (0..ID_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        PostId::new(id)
    }
}
