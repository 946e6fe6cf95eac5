//! Immutable ordered sequence container.
//!
//! Every structural operation returns a new `Sequence` and leaves the
//! receiver untouched, following functional programming principles.

use super::error::SequenceError;
use serde::{Deserialize, Serialize};

/// Immutable ordered sequence of elements.
///
/// `Sequence` preserves insertion order through every operation, and no
/// operation ever mutates an existing instance: `push_back`, `remove`
/// and friends all return a new sequence. Because of this, a sequence
/// may be freely shared between readers without synchronization.
///
/// # Example
///
/// ```rust
/// use lockstep::sequence::Sequence;
///
/// let seq = Sequence::from(vec![1, 2, 3]);
/// let longer = seq.push_back(4);
///
/// assert_eq!(seq.len(), 3); // Original unchanged
/// assert_eq!(longer.len(), 4);
/// assert_eq!(longer.back(), Ok(&4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Create a new empty sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq: Sequence<u8> = Sequence::new();
    /// assert!(seq.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the first element.
    ///
    /// Fails with [`SequenceError::EmptyCollection`] on an empty sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::{Sequence, SequenceError};
    ///
    /// let seq = Sequence::from(vec!['a', 'b']);
    /// assert_eq!(seq.front(), Ok(&'a'));
    ///
    /// let empty: Sequence<char> = Sequence::new();
    /// assert_eq!(empty.front(), Err(SequenceError::EmptyCollection));
    /// ```
    pub fn front(&self) -> Result<&T, SequenceError> {
        self.elements.first().ok_or(SequenceError::EmptyCollection)
    }

    /// Get the last element.
    ///
    /// Fails with [`SequenceError::EmptyCollection`] on an empty sequence.
    pub fn back(&self) -> Result<&T, SequenceError> {
        self.elements.last().ok_or(SequenceError::EmptyCollection)
    }

    /// Get the element at position `index` (zero-based).
    ///
    /// Out-of-range indices fail with [`SequenceError::IndexOutOfRange`];
    /// they are never clamped or wrapped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::{Sequence, SequenceError};
    ///
    /// let seq = Sequence::from(vec![10, 20, 30]);
    /// assert_eq!(seq.nth(1), Ok(&20));
    /// assert_eq!(
    ///     seq.nth(3),
    ///     Err(SequenceError::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn nth(&self, index: usize) -> Result<&T, SequenceError> {
        self.elements
            .get(index)
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
    }

    /// Find the first element satisfying a predicate.
    ///
    /// Returns the *first* match under sequence order, or `None` if no
    /// element satisfies the predicate. First-match resolution is a
    /// contract, not an accident: the automaton engine's transition
    /// tie-break is defined in terms of it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 4, 2, 8]);
    /// assert_eq!(seq.search(|x| x % 2 == 0), Some(&4));
    /// assert_eq!(seq.search(|x| *x > 100), None);
    /// ```
    pub fn search<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.elements.iter().find(|element| predicate(element))
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone> Sequence<T> {
    /// Return a new sequence with `element` prepended.
    ///
    /// This is a pure function - it does not mutate the existing
    /// sequence but returns a new one with the element at the front.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq = Sequence::from(vec![2, 3]);
    /// let new_seq = seq.push_front(1);
    ///
    /// assert_eq!(new_seq.front(), Ok(&1));
    /// assert_eq!(seq.len(), 2); // Original unchanged
    /// ```
    pub fn push_front(&self, element: T) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.push(element);
        elements.extend_from_slice(&self.elements);
        Self { elements }
    }

    /// Return a new sequence with `element` appended.
    pub fn push_back(&self, element: T) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element);
        Self { elements }
    }

    /// Return a new sequence with the first element removed.
    ///
    /// Fails with [`SequenceError::EmptyCollection`] on an empty sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 2, 3]);
    /// let popped = seq.pop_front().unwrap();
    ///
    /// assert_eq!(popped, Sequence::from(vec![2, 3]));
    /// ```
    pub fn pop_front(&self) -> Result<Self, SequenceError> {
        if self.elements.is_empty() {
            return Err(SequenceError::EmptyCollection);
        }
        Ok(Self {
            elements: self.elements[1..].to_vec(),
        })
    }

    /// Return a new sequence with the last element removed.
    ///
    /// Fails with [`SequenceError::EmptyCollection`] on an empty sequence.
    pub fn pop_back(&self) -> Result<Self, SequenceError> {
        if self.elements.is_empty() {
            return Err(SequenceError::EmptyCollection);
        }
        Ok(Self {
            elements: self.elements[..self.elements.len() - 1].to_vec(),
        })
    }

    /// Return a new sequence equal to `self` followed by `other`.
    ///
    /// Relative order within both operands is preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let a = Sequence::from(vec![1, 2]);
    /// let b = Sequence::from(vec![3]);
    ///
    /// assert_eq!(a.concat(&b), Sequence::from(vec![1, 2, 3]));
    /// ```
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = self.elements.clone();
        elements.extend_from_slice(&other.elements);
        Self { elements }
    }
}

impl<T: Clone + PartialEq> Sequence<T> {
    /// Index of the first occurrence of `element`, or `None` if absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq = Sequence::from(vec!['x', 'y', 'x']);
    /// assert_eq!(seq.index_of(&'x'), Some(0));
    /// assert_eq!(seq.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    /// Check whether `element` occurs in the sequence.
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Number of occurrences of `element` in the sequence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 2, 1, 1]);
    /// assert_eq!(seq.count(&1), 3);
    /// assert_eq!(seq.count(&5), 0);
    /// ```
    pub fn count(&self, element: &T) -> usize {
        self.elements.iter().filter(|e| *e == element).count()
    }

    /// Return a new sequence with the first occurrence of `element`
    /// removed.
    ///
    /// No-op (returns an equal sequence) if `element` is absent. The
    /// relative order of the remaining elements is preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 2, 1]);
    /// assert_eq!(seq.remove(&1), Sequence::from(vec![2, 1]));
    /// assert_eq!(seq.remove(&9), seq);
    /// ```
    pub fn remove(&self, element: &T) -> Self {
        match self.index_of(element) {
            Some(index) => {
                let mut elements = self.elements.clone();
                elements.remove(index);
                Self { elements }
            }
            None => self.clone(),
        }
    }

    /// Return a new sequence with every occurrence of `element` removed.
    ///
    /// No-op (returns an equal sequence) if `element` is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lockstep::sequence::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 2, 1, 3]);
    /// assert_eq!(seq.remove_all(&1), Sequence::from(vec![2, 3]));
    /// ```
    pub fn remove_all(&self, element: &T) -> Self {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|e| *e != element)
                .cloned()
                .collect(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
