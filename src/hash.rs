//! String hashing used to tag messages by purpose.
//!
//! Hashes are stable across runs (no random seed), so a tag computed when a
//! message is posted always matches the one computed by its handler.
//! They are not stable across targets: `FxHasher` mixes `usize`-wide words, so
//! 32-bit and 64-bit builds produce different tags. Never persist a tag or send
//! it to another build.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Hash a string into a 32-bit usage tag.
///
/// The 64-bit hash is truncated to its lower 32 bits.
pub fn string_to_hash(s: &str) -> u32 {
    let mut hasher = FxHasher::default();
    s.hash(&mut hasher);
    hasher.finish() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_same_hash() {
        assert_eq!(string_to_hash("FlipMotor"), string_to_hash("FlipMotor"));
    }

    #[test]
    fn different_strings_differ() {
        assert_ne!(string_to_hash("FlipMotor"), string_to_hash("FlipMotors"));
        assert_ne!(string_to_hash("FlipMotor"), string_to_hash("flipmotor"));
        assert_ne!(string_to_hash(""), string_to_hash("FlipMotor"));
    }
}
