//! Bounded cache of hosted content keyed by path.

use std::collections::VecDeque;

/// Keeps the views of inactive roots so switching back reuses them.
///
/// Entries are evicted oldest first once `capacity` is exceeded.
#[derive(Debug, Clone)]
pub struct ContentPool<T> {
	capacity: usize,
	entries: VecDeque<(String, T)>,
}

impl<T> ContentPool<T> {
	/// Creates a pool holding at most `capacity` views. Zero disables pooling.
	pub fn new(capacity: usize) -> Self {
		Self {
			capacity,
			entries: VecDeque::with_capacity(capacity),
		}
	}

	/// Stores `value` under `path`.
	///
	/// Returns the entries that no longer fit, including a previous value
	/// for the same path.
	pub fn insert(&mut self, path: impl Into<String>, value: T) -> Vec<(String, T)> {
		let path = path.into();
		let mut evicted = Vec::new();
		if let Some(position) = self.entries.iter().position(|(key, _)| *key == path) {
			evicted.extend(self.entries.remove(position));
		}
		self.entries.push_back((path, value));
		while self.entries.len() > self.capacity {
			evicted.extend(self.entries.pop_front());
		}
		evicted
	}

	/// Removes and returns the value cached for `path`.
	pub fn take(&mut self, path: &str) -> Option<T> {
		let position = self.entries.iter().position(|(key, _)| key == path)?;
		self.entries.remove(position).map(|(_, value)| value)
	}

	/// Whether a view for `path` is pooled.
	pub fn contains(&self, path: &str) -> bool {
		self.entries.iter().any(|(key, _)| key == path)
	}

	/// Number of pooled views.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing is pooled.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Maximum number of pooled views.
	pub fn capacity(&self) -> usize {
		self.capacity
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_fifo_eviction() {
		// Arrange
		let mut pool = ContentPool::new(2);
		pool.insert("/a", 1);
		pool.insert("/b", 2);

		// Act
		let evicted = pool.insert("/c", 3);

		// Assert
		assert_eq!(evicted, vec![("/a".to_string(), 1)]);
		assert!(!pool.contains("/a"));
		assert_eq!(pool.len(), 2);
	}

	#[rstest]
	fn test_reinsert_replaces_and_refreshes() {
		let mut pool = ContentPool::new(2);
		pool.insert("/a", 1);
		pool.insert("/b", 2);

		let replaced = pool.insert("/a", 10);
		let evicted = pool.insert("/c", 3);

		assert_eq!(replaced, vec![("/a".to_string(), 1)]);
		assert_eq!(evicted, vec![("/b".to_string(), 2)]);
		assert_eq!(pool.take("/a"), Some(10));
	}

	#[rstest]
	fn test_zero_capacity_evicts_immediately() {
		let mut pool = ContentPool::new(0);

		assert_eq!(pool.insert("/a", 1), vec![("/a".to_string(), 1)]);
		assert!(pool.is_empty());
	}

	#[rstest]
	fn test_take_removes() {
		let mut pool = ContentPool::new(1);
		pool.insert("/a", 1);

		assert_eq!(pool.take("/a"), Some(1));
		assert_eq!(pool.take("/a"), None);
	}
}
