//! Growable backing storage for series readings.
//!
//! [`ReadingBuffer`] keeps an explicit logical capacity next to its length.
//! Appending past the capacity doubles it (starting from the current length,
//! or one for an empty buffer) until the new readings fit, so a run of
//! appends costs amortized O(1) per reading instead of one reallocation per
//! batch.
//!
//! ```text
//! len 3, cap 3   + 5 readings  ->  cap 6 -> 12, len 8
//! len 0, cap 0   + 3 readings  ->  cap 1 -> 2 -> 4, len 3
//! ```

use tracing::debug;

/// Ordered `f64` storage with an explicit doubling growth rule.
///
/// The buffer does not validate readings; callers check them before
/// handing them over.
#[derive(Debug, Clone, Default)]
pub struct ReadingBuffer {
    /// Stored readings. `values.len()` is the logical length.
    values: Vec<f64>,
    /// Logical capacity; always `>= values.len()`.
    capacity: usize,
}

impl ReadingBuffer {
    /// Creates an empty buffer with zero capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding a copy of `readings`, sized exactly to fit.
    pub fn from_slice(readings: &[f64]) -> Self {
        Self {
            values: readings.to_vec(),
            capacity: readings.len(),
        }
    }

    /// Number of stored readings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no readings are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Logical capacity, following the doubling rule.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrows the stored readings in insertion order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Appends `readings`, growing the capacity first if they do not fit.
    pub fn extend_from_slice(&mut self, readings: &[f64]) {
        let required = self.values.len() + readings.len();
        if required > self.capacity {
            self.grow_to(Self::grown_capacity(self.values.len(), required));
        }
        self.values.extend_from_slice(readings);
    }

    /// Capacity reached by doubling from `len` (at least 1) until it covers
    /// `required`.
    fn grown_capacity(len: usize, required: usize) -> usize {
        let mut capacity = len.max(1);
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }
        capacity
    }

    fn grow_to(&mut self, capacity: usize) {
        debug!(
            from = self.capacity,
            to = capacity,
            len = self.values.len(),
            "growing reading buffer"
        );
        self.values.reserve_exact(capacity - self.values.len());
        self.capacity = capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_is_exact() {
        let buffer = ReadingBuffer::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_slice_copies() {
        let mut source = vec![1.0, 2.0];
        let buffer = ReadingBuffer::from_slice(&source);
        source[0] = 99.0;
        assert_eq!(buffer.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn test_doubles_until_fit() {
        let mut buffer = ReadingBuffer::from_slice(&[1.0, 2.0, 3.0]);
        buffer.extend_from_slice(&[4.0, 5.0, 6.0, 7.0, 8.0]);

        // 3 -> 6 -> 12
        assert_eq!(buffer.capacity(), 12);
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_grows_from_empty() {
        let mut buffer = ReadingBuffer::new();
        assert_eq!(buffer.capacity(), 0);

        buffer.extend_from_slice(&[1.0, 2.0, 3.0]);
        // 1 -> 2 -> 4
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_no_growth_when_it_fits() {
        let mut buffer = ReadingBuffer::new();
        buffer.extend_from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(buffer.capacity(), 4);

        buffer.extend_from_slice(&[4.0]);
        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.len(), 4);

        buffer.extend_from_slice(&[5.0]);
        assert_eq!(buffer.capacity(), 8);
    }

    #[test]
    fn test_empty_extend_is_noop() {
        let mut buffer = ReadingBuffer::new();
        buffer.extend_from_slice(&[]);
        assert_eq!(buffer.capacity(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_amortized_growth_count() {
        let mut buffer = ReadingBuffer::new();
        let mut growths = 0;
        let mut last_capacity = buffer.capacity();

        for i in 0..1024 {
            buffer.extend_from_slice(&[f64::from(i)]);
            if buffer.capacity() != last_capacity {
                growths += 1;
                last_capacity = buffer.capacity();
            }
        }

        assert_eq!(buffer.len(), 1024);
        assert_eq!(buffer.capacity(), 1024);
        // 1, 2, 4, ..., 1024
        assert_eq!(growths, 11);
    }
}
