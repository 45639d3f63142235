//! Incremental matching of an expected sequence of values.

/// Detects when a stream of values contains an expected sequence.
///
/// Each call to [`test`](SequenceDetector::test) advances the match when
/// the value equals the next expected element. A mismatch restarts the
/// match, re-checking the offending value against the first element so
/// `a b` is found inside `a a b`.
///
/// Once completed the detector stays completed until
/// [`reset`](SequenceDetector::reset).
///
/// ```rust
/// use lumen_core::SequenceDetector;
///
/// let mut cheat = SequenceDetector::new(vec!['u', 'd']);
/// for key in ['u', 'u', 'd'] {
///     cheat.test(&key);
/// }
/// assert!(cheat.completed());
/// ```
#[derive(Debug)]
pub struct SequenceDetector<T> {
    sequence: Vec<T>,
    index: usize,
}

impl<T: PartialEq> SequenceDetector<T> {
    /// Creates a detector for `sequence`.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    pub fn new(sequence: impl Into<Vec<T>>) -> Self {
        let sequence = sequence.into();
        assert!(!sequence.is_empty(), "sequence to detect must not be empty");
        Self { sequence, index: 0 }
    }

    /// Feeds the next value.
    ///
    /// Returns `true` if the value extended the current match. A completed
    /// detector always returns `false`.
    pub fn test(&mut self, value: &T) -> bool {
        if self.completed() {
            return false;
        }

        if self.sequence[self.index] == *value {
            self.index += 1;
            return true;
        }

        // Restart, giving the mismatched value a chance to begin a new match.
        let restarted = self.index != 0;
        self.index = 0;
        if restarted && self.sequence[0] == *value {
            self.index = 1;
            return true;
        }
        false
    }

    /// Returns to the initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Whether at least one element has matched.
    #[inline]
    pub fn started(&self) -> bool {
        self.index != 0
    }

    /// Whether the whole sequence has matched.
    #[inline]
    pub fn completed(&self) -> bool {
        self.index == self.sequence.len()
    }

    /// The expected sequence.
    #[inline]
    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    /// Number of elements matched so far.
    #[inline]
    pub fn matched(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_completes() {
        let mut d = SequenceDetector::new(vec!['a', 'b', 'c']);
        assert!(!d.started());
        assert!(d.test(&'a'));
        assert!(d.started());
        assert!(d.test(&'b'));
        assert!(d.test(&'c'));
        assert!(d.completed());
    }

    #[test]
    fn test_mismatch_does_not_complete() {
        let mut d = SequenceDetector::new(vec!['a', 'b', 'c']);
        d.test(&'a');
        d.test(&'b');
        assert!(!d.test(&'x'));
        assert!(!d.completed());
        assert!(!d.started());
    }

    #[test]
    fn test_mismatch_rechecks_first() {
        let mut d = SequenceDetector::new(vec![1, 2]);
        d.test(&1);
        assert!(d.test(&1));
        assert_eq!(d.matched(), 1);
        assert!(d.test(&2));
        assert!(d.completed());
    }

    #[test]
    fn test_completed_is_sticky() {
        let mut d = SequenceDetector::new([5]);
        assert!(d.test(&5));
        assert!(!d.test(&5));
        assert!(!d.test(&6));
        assert!(d.completed());

        d.reset();
        assert!(!d.started());
        assert!(!d.completed());
        assert!(d.test(&5));
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_empty_sequence_panics() {
        let _ = SequenceDetector::<u8>::new(Vec::new());
    }
}
