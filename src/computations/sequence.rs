//! Numeric sequences used as search sources.

/// The Lucas numbers 2, 1, 3, 4, 7, 11, 18, ...
///
/// Ends instead of overflowing once the next term no longer fits in a `u64`.
#[derive(Debug, Clone)]
pub struct Lucas {
    current: Option<u64>,
    next: Option<u64>,
}

/// Infinite (up to `u64`) Lucas sequence.
#[must_use]
pub const fn lucas() -> Lucas {
    Lucas {
        current: Some(2),
        next: Some(1),
    }
}

impl Iterator for Lucas {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|next| current.checked_add(next));
        Some(current)
    }
}
