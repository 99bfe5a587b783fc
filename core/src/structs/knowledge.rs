use fxhash::FxHashMap;
use std::collections::HashSet;

/// Everything learned about the hidden word so far. A plain value type:
/// updates produce a fresh state, the previous one is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeN<const N: usize> {
    /// Letters confirmed at their index.
    pub placed: [Option<char>; N],
    /// Minimum occurrence count per letter, placed occurrences included.
    pub required: FxHashMap<char, u8>,
    /// Indices at which a letter is known not to appear.
    pub forbidden: FxHashMap<char, HashSet<usize>>,
    /// Exact upper bound on a letter's occurrence count; 0 means absent.
    pub max_count: FxHashMap<char, u8>,
}

impl<const N: usize> Default for KnowledgeN<N> {
    fn default() -> Self {
        Self {
            placed: [None; N],
            required: FxHashMap::default(),
            forbidden: FxHashMap::default(),
            max_count: FxHashMap::default(),
        }
    }
}

impl<const N: usize> KnowledgeN<N> {
    pub fn none() -> Self {
        Self::default()
    }
}
