//! Frequency table of "which move followed this subsequence".

use std::collections::HashMap;

use crate::domain::Move;

/// Longest subsequence the opponent learns from.
pub const MAX_PATTERN_LEN: usize = 3;

/// A subsequence of 1..=[`MAX_PATTERN_LEN`] moves, stored inline.
///
/// Slots past `len` are padding and always hold `Move::Rock`, so derived
/// equality and hashing stay consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternKey {
    len: u8,
    moves: [Move; MAX_PATTERN_LEN],
}

impl PatternKey {
    /// Returns `None` for an empty slice or one longer than [`MAX_PATTERN_LEN`].
    pub fn new(seq: &[Move]) -> Option<Self> {
        if seq.is_empty() || seq.len() > MAX_PATTERN_LEN {
            return None;
        }
        let mut moves = [Move::Rock; MAX_PATTERN_LEN];
        moves[..seq.len()].copy_from_slice(seq);
        Some(Self {
            len: seq.len() as u8,
            moves,
        })
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }
}

/// Occurrence counts of each follow-up move, indexed by [`Move::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowCounts([u32; 3]);

impl FollowCounts {
    pub fn record(&mut self, next: Move) {
        self.0[next.index()] = self.0[next.index()].saturating_add(1);
    }

    pub fn get(&self, next: Move) -> u32 {
        self.0[next.index()]
    }

    /// Follow-up with the highest count; ties go to the earliest move in
    /// declaration order. `None` when nothing has been recorded.
    pub fn most_frequent(&self) -> Option<Move> {
        let mut best: Option<(Move, u32)> = None;
        for m in Move::ALL {
            let count = self.get(m);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((m, count)),
            }
        }
        best.map(|(m, _)| m)
    }
}

/// The opponent's entire learned state.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    entries: HashMap<PatternKey, FollowCounts>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` was immediately followed by `next`.
    pub fn observe(&mut self, key: PatternKey, next: Move) {
        self.entries.entry(key).or_default().record(next);
    }

    pub fn lookup(&self, key: &PatternKey) -> Option<&FollowCounts> {
        self.entries.get(key)
    }

    /// Number of distinct subsequence keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
