use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::hash;

/// The precomputed hash of a value, usable as a cheap map key.
#[derive(Debug, Eq)]
pub struct HashValue<T>(u64, PhantomData<T>)
where
    T: Hash + ?Sized;

impl<T> Clone for HashValue<T>
where
    T: Hash + ?Sized,
{
    fn clone(&self) -> Self {
        HashValue(self.0, self.1)
    }
}

impl<T> Copy for HashValue<T> where T: Hash + ?Sized {}

impl<T> PartialEq for HashValue<T>
where
    T: Hash + ?Sized,
{
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T> Hash for HashValue<T>
where
    T: Hash + ?Sized,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.hash(state);
    }
}

impl<F> From<F> for HashValue<str>
where
    F: AsRef<str>,
{
    fn from(v: F) -> Self {
        HashValue(hash::hash64(v.as_ref()), PhantomData)
    }
}

impl<T> PartialEq<T> for HashValue<str>
where
    T: AsRef<str>,
{
    fn eq(&self, other: &T) -> bool {
        self.0.eq(&hash::hash64(other.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FastHashMap;

    #[test]
    fn compare_with_str() {
        let v: HashValue<str> = "lightPos".into();
        assert!(v == "lightPos");
        assert!(v != "viewPos");
    }

    #[test]
    fn as_map_key() {
        let mut map = FastHashMap::default();
        map.insert(HashValue::<str>::from("model"), 0);
        map.insert(HashValue::<str>::from(String::from("view")), 1);

        assert_eq!(map.get(&HashValue::from("model")), Some(&0));
        assert_eq!(map.get(&HashValue::from("view")), Some(&1));
        assert_eq!(map.get(&HashValue::from("projection")), None);
    }
}
