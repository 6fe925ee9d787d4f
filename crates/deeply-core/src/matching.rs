//! Greedy bipartite element matching
//!
//! Pairs items of two unordered collections without reusing a right-hand
//! item. Left items are visited in order; each takes the first unconsumed
//! right item its pairwise function accepts.
//!
//! The assignment is first-fit, not optimal: an early pick can block a better
//! pairing for a later left item. Cost is O(n·m) pairwise calls.
//!
//! # Example
//!
//! ```rust
//! use deeply_core::matching::greedy_pairing;
//!
//! let pairing = greedy_pairing(&["a", "a", "a"], &["a", "b", "c", "a"], |l, r| l == r);
//! assert_eq!(pairing.matched(), 2);
//! assert_eq!(pairing.pairs, vec![(0, 0), (1, 3)]);
//! ```

/// Result of a pairwise comparison: a boolean verdict or a similarity score.
pub trait PairScore: Copy {
    /// Whether the pair is accepted
    fn is_hit(self) -> bool;

    /// Contribution of an accepted pair to the total weight
    fn weight(self) -> f64;
}

impl PairScore for bool {
    #[inline]
    fn is_hit(self) -> bool {
        self
    }

    #[inline]
    fn weight(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

impl PairScore for f64 {
    #[inline]
    fn is_hit(self) -> bool {
        self != 0.0
    }

    #[inline]
    fn weight(self) -> f64 {
        self
    }
}

/// Accepted pairs and their accumulated weight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pairing {
    /// `(left_index, right_index)` in acceptance order
    pub pairs: Vec<(usize, usize)>,
    /// Sum of the weights of accepted pairs
    pub weight: f64,
}

impl Pairing {
    /// Number of accepted pairs
    pub fn matched(&self) -> usize {
        self.pairs.len()
    }
}

/// Pair every left item with the first unconsumed right item `score` accepts
pub fn greedy_pairing<L, R, S, F>(left: &[L], right: &[R], mut score: F) -> Pairing
where
    S: PairScore,
    F: FnMut(&L, &R) -> S,
{
    let mut consumed = vec![false; right.len()];
    let mut pairing = Pairing {
        pairs: Vec::with_capacity(left.len().min(right.len())),
        weight: 0.0,
    };

    for (i, l) in left.iter().enumerate() {
        for (j, r) in right.iter().enumerate() {
            if consumed[j] {
                continue;
            }
            let result = score(l, r);
            if result.is_hit() {
                consumed[j] = true;
                pairing.pairs.push((i, j));
                pairing.weight += result.weight();
                break;
            }
        }
    }

    pairing
}

/// Whether greedy pairing finds a partner for every left item.
///
/// Same verdict as `greedy_pairing(..).matched() == left.len()`, but stops at
/// the first left item left without a partner.
pub fn covers_all<L, R, F>(left: &[L], right: &[R], mut accept: F) -> bool
where
    F: FnMut(&L, &R) -> bool,
{
    if left.len() > right.len() {
        return false;
    }

    let mut consumed = vec![false; right.len()];
    left.iter().all(|l| {
        let found = right
            .iter()
            .enumerate()
            .find(|(j, r)| !consumed[*j] && accept(l, *r))
            .map(|(j, _)| j);
        match found {
            Some(j) => {
                consumed[j] = true;
                true
            }
            None => false,
        }
    })
}
