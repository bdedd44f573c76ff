//! Fixed-capacity rolling window

use serde::Serialize;
use std::collections::VecDeque;

/// Keeps only the most recent `capacity` samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingWindow<T> {
    samples: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// A zero capacity is raised to one so the window always shows the
    /// latest sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when full
    pub fn push(&mut self, sample: T) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&T> {
        self.samples.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.samples.iter()
    }

    /// The newest `n` samples, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &T> + '_ {
        self.samples.iter().skip(self.samples.len().saturating_sub(n))
    }
}

impl<T: Clone> RollingWindow<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.samples.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_evicts_oldest() {
        let mut window = RollingWindow::new(3);
        for i in 0..5 {
            window.push(i);
        }
        assert_eq!(window.to_vec(), vec![2, 3, 4]);
        assert_eq!(window.latest(), Some(&4));
    }

    #[test]
    fn test_recent() {
        let mut window = RollingWindow::new(20);
        for i in 0..15 {
            window.push(i);
        }
        let recent: Vec<_> = window.recent(10).copied().collect();
        assert_eq!(recent, (5..15).collect::<Vec<_>>());

        let all: Vec<_> = window.recent(100).copied().collect();
        assert_eq!(all.len(), 15);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut window = RollingWindow::new(0);
        window.push("a");
        window.push("b");
        assert_eq!(window.capacity(), 1);
        assert_eq!(window.to_vec(), vec!["b"]);
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(capacity in 0usize..64, pushes in 0usize..256) {
            let mut window = RollingWindow::new(capacity);
            for i in 0..pushes {
                window.push(i);
                prop_assert!(window.len() <= window.capacity());
            }
            prop_assert_eq!(window.len(), pushes.min(capacity.max(1)));
        }
    }
}
