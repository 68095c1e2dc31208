//! Bijective base-26 label generation.
//!
//! # Responsibility
//! - Map non-negative indexes onto `A..Z, AA..AZ, BA..` without gaps or
//!   collisions.
//! - Produce fresh, finite label sequences per call.
//!
//! # Invariants
//! - Index 0 is `A`, 25 is `Z`, 26 is `AA`, 51 is `AZ`, 52 is `BA`.
//! - Labels grow in length monotonically and are strictly increasing in
//!   lexicographic order within one length.

const ALPHABET_LEN: usize = 26;

/// Returns the bijective base-26 label for `index`.
///
/// Each digit contributes `1..=26` rather than `0..=25`, so there is no
/// blank digit and every string over `A..Z` names exactly one index.
pub fn label_for_index(index: usize) -> String {
    let mut digits = Vec::new();
    let mut n = index;
    loop {
        digits.push(b'A' + (n % ALPHABET_LEN) as u8);
        n /= ALPHABET_LEN;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Returns an iterator over the first `count` labels.
pub fn generate_labels(count: usize) -> Labels {
    Labels { next: 0, count }
}

/// Finite label sequence created by [`generate_labels`].
#[derive(Debug, Clone)]
pub struct Labels {
    next: usize,
    count: usize,
}

impl Iterator for Labels {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let label = label_for_index(self.next);
        self.next += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Labels {}
