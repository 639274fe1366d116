use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn list_comparisons() {
        let a = List::from_iter([1, 2, 3]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, List::from_iter([1, 2]));
        assert!(a < List::from_iter([1, 2, 4]));
        assert!(List::from_iter([1, 2]) < a);
    }

    #[test]
    fn clone_is_deep() {
        let a = List::from_iter([1, 2, 3]);
        let mut b = a.clone();
        b.push_back(4);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 4);
        assert_eq!(Vec::from_iter(a), vec![1, 2, 3]);
    }

    #[test]
    fn hash_matches_for_equal_lists() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
