//! Bit-indexed disc stack.
//!
//! # Encoding (32-bit)
//!
//! ```text
//! Bit i set: disc of size i sits on this peg
//!
//!   bits  = 0b0000_1101   discs {0, 2, 3}
//!   top   = trailing_zeros(bits) = 0
//! ```
//!
//! Discs on one peg are always strictly decreasing from bottom to top, so the
//! set of sizes plus "top = smallest member" is enough to recover the LIFO
//! order without storing it.

use serde::{Deserialize, Serialize};

/// Number of positions a [`DiscStack`] can represent.
pub const STACK_CAPACITY: u32 = u32::BITS;

/// The set of discs currently sitting on one peg.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DiscStack(pub u32);

impl DiscStack {
    /// Create an empty stack.
    #[inline]
    pub const fn new() -> DiscStack {
        DiscStack(0)
    }

    /// Create a stack from a raw bitset.
    #[inline]
    pub const fn from_bits(bits: u32) -> DiscStack {
        DiscStack(bits)
    }

    /// Get the raw bitset.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Clear every disc.
    #[inline]
    pub fn destroy(&mut self) {
        self.0 = 0;
    }

    /// Overwrite this stack with a value copy of `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &DiscStack) {
        self.0 = src.0;
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of discs on the stack.
    #[inline]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    // ========== Bit primitives ==========

    /// Index of the lowest set bit, or None if no bit is set.
    #[inline]
    pub const fn lowest_set_bit(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros())
        }
    }

    /// Check whether bit `i` is set. Out-of-range indices are never set.
    #[inline]
    pub const fn test_bit(self, i: u32) -> bool {
        i < STACK_CAPACITY && (self.0 >> i) & 1 == 1
    }

    /// Set bit `i`. Returns false (no change) if `i` is out of range.
    #[inline]
    pub fn set_bit(&mut self, i: u32) -> bool {
        if i >= STACK_CAPACITY {
            return false;
        }
        self.0 |= 1 << i;
        true
    }

    /// Clear bit `i`. Returns false (no change) if `i` is out of range.
    #[inline]
    pub fn clear_bit(&mut self, i: u32) -> bool {
        if i >= STACK_CAPACITY {
            return false;
        }
        self.0 &= !(1 << i);
        true
    }

    /// Check whether a disc of size `disc` is on this stack.
    #[inline]
    pub const fn contains(self, disc: u32) -> bool {
        self.test_bit(disc)
    }

    // ========== Stack operations ==========

    /// The top disc (smallest size present), or None if the stack is empty.
    #[inline]
    pub const fn top(self) -> Option<u32> {
        self.lowest_set_bit()
    }

    /// Remove and return the top disc. Empty stacks are left untouched.
    #[inline]
    pub fn pop(&mut self) -> Option<u32> {
        let top = self.top()?;
        self.0 ^= 1 << top;
        Some(top)
    }

    /// Remove and return the top disc only if it equals `expected`.
    ///
    /// Mutates nothing when the stack is empty or the top differs.
    #[inline]
    pub fn pop_if(&mut self, expected: u32) -> Option<u32> {
        let top = self.top()?;
        if top != expected {
            return None;
        }
        self.0 ^= 1 << top;
        Some(top)
    }

    /// Push `val` if it would become the new top.
    ///
    /// Accepted when the stack is empty or `val` is not greater than the
    /// current top. Returns None (no change) otherwise or if `val` does not
    /// fit in the stack.
    #[inline]
    pub fn push(&mut self, val: u32) -> Option<u32> {
        if let Some(top) = self.top() {
            if top < val {
                return None;
            }
        }
        self.add(val)
    }

    /// Insert `val` at its position regardless of the current top.
    ///
    /// Does NOT enforce stack order - caller must have validated it.
    #[inline]
    pub fn add(&mut self, val: u32) -> Option<u32> {
        if self.set_bit(val) {
            Some(val)
        } else {
            None
        }
    }

    /// Iterate over the discs from top (smallest) to bottom (largest).
    #[inline]
    pub fn iter(self) -> Discs {
        Discs(self)
    }
}

impl std::fmt::Debug for DiscStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ascending iterator over the discs of a [`DiscStack`].
///
/// Drains its own copy, so the stack it came from is never touched.
#[derive(Clone, Copy, Debug)]
pub struct Discs(DiscStack);

impl Iterator for Discs {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        self.0.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.len() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Discs {}

impl IntoIterator for DiscStack {
    type Item = u32;
    type IntoIter = Discs;

    fn into_iter(self) -> Discs {
        self.iter()
    }
}

impl FromIterator<u32> for DiscStack {
    /// Collect disc sizes into a stack. Sizes that do not fit are dropped.
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut stack = DiscStack::new();
        for disc in iter {
            stack.add(disc);
        }
        stack
    }
}
