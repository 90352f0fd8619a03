use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

/// A `HashMap` using `FastHasher` to hash the items.
pub type FastHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FastHasher>>;

/// A `HashSet` using `FastHasher` to hash the items.
pub type FastHashSet<K> = HashSet<K, BuildHasherDefault<FastHasher>>;

const SEED: u64 = 0x51_7c_c1_b7_27_22_0a_95;

/// A speedy, non-cryptographic hasher (the same mixing as rustc's `FxHasher`).
/// Keys hashed here are short strings like uniform names, which never come
/// from untrusted input.
#[derive(Default, Clone, Copy)]
pub struct FastHasher {
    hash: u64,
}

impl FastHasher {
    #[inline]
    fn add_to_hash(&mut self, i: u64) {
        self.hash = (self.hash.rotate_left(5) ^ i).wrapping_mul(SEED);
    }
}

impl Hasher for FastHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            self.add_to_hash(u64::from_le_bytes(buf));
        }

        for &byte in chunks.remainder() {
            self.add_to_hash(u64::from(byte));
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.add_to_hash(u64::from(i));
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.add_to_hash(u64::from(i));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.add_to_hash(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.add_to_hash(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

/// Hashes a value with `FastHasher`.
pub fn hash64<T: std::hash::Hash + ?Sized>(v: &T) -> u64 {
    let mut state = FastHasher::default();
    v.hash(&mut state);
    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_str() {
        assert_eq!(hash64("model"), hash64("model"));
        assert_ne!(hash64("model"), hash64("view"));
        assert_ne!(hash64("material.diffuse"), hash64("material.specular"));
    }

    #[test]
    fn collections() {
        let mut map = FastHashMap::default();
        map.insert("projection", 1);
        map.insert("view", 2);

        assert_eq!(map.get("projection"), Some(&1));
        assert_eq!(map.get("model"), None);

        let mut set = FastHashSet::default();
        assert!(set.insert(3u32));
        assert!(!set.insert(3u32));
    }
}
