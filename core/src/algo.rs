use crate::structs::{
    feedback::{Feedback, FeedbackN},
    knowledge::KnowledgeN,
    word::WordN,
};
use fxhash::FxHashMap;
use itertools::izip;

/// Computes the verdicts a game would hand back for `guess` against `answer`.
/// Exact matches consume occurrences first; misplaced marks are then granted
/// left to right only while unexplained occurrences remain in the answer.
pub fn get_feedback<const N: usize>(guess: &WordN<N>, answer: &WordN<N>) -> FeedbackN<N> {
    let mut verdicts = [Feedback::Absent; N];
    let mut unexplained: FxHashMap<char, u8> = FxHashMap::default();

    for i in 0..N {
        if guess.0[i] == answer.0[i] {
            verdicts[i] = Feedback::Exact;
        } else {
            *unexplained.entry(answer.0[i]).or_default() += 1;
        }
    }

    for i in 0..N {
        if verdicts[i] == Feedback::Exact {
            continue;
        }
        if let Some(count) = unexplained.get_mut(&guess.0[i]) {
            if *count > 0 {
                verdicts[i] = Feedback::Misplaced;
                *count -= 1;
            }
        }
    }

    FeedbackN(verdicts)
}

/// Decodes one guess and its verdicts into a knowledge fragment.
pub fn decode<const N: usize>(guess: &WordN<N>, feedback: &FeedbackN<N>) -> KnowledgeN<N> {
    let mut knowledge = KnowledgeN::none();
    let mut capped = Vec::new();

    for (i, (g, f)) in izip!(guess.0, feedback.0).enumerate() {
        match f {
            Feedback::Exact => {
                knowledge.placed[i] = Some(g);
                *knowledge.required.entry(g).or_default() += 1;
            }
            Feedback::Misplaced => {
                *knowledge.required.entry(g).or_default() += 1;
                knowledge.forbidden.entry(g).or_default().insert(i);
            }
            Feedback::Absent => {
                if !capped.contains(&g) {
                    capped.push(g);
                }
            }
        }
    }

    // An absent verdict caps the letter at however many occurrences the same
    // guess confirmed elsewhere; zero when the letter is missing entirely.
    for g in capped {
        let confirmed = knowledge.required.get(&g).copied().unwrap_or(0);
        knowledge.max_count.insert(g, confirmed);
    }

    knowledge
}

/// Decodes the fragment a guess would produce if `answer` were the hidden word.
pub fn decode_answer<const N: usize>(guess: &WordN<N>, answer: &WordN<N>) -> KnowledgeN<N> {
    decode(guess, &get_feedback(guess, answer))
}

/// Folds a fragment into an accumulated state, returning a fresh state.
pub fn merge<const N: usize>(base: &KnowledgeN<N>, fragment: &KnowledgeN<N>) -> KnowledgeN<N> {
    let mut placed = base.placed;
    for (slot, &incoming) in placed.iter_mut().zip(fragment.placed.iter()) {
        if slot.is_none() {
            *slot = incoming;
        }
    }

    // Both sides may have re-derived the same occurrences of a letter, so the
    // bag keeps the larger multiplicity per letter rather than the sum.
    let mut required = base.required.clone();
    for (&c, &count) in &fragment.required {
        let entry = required.entry(c).or_default();
        *entry = (*entry).max(count);
    }

    let mut forbidden = base.forbidden.clone();
    for (&c, positions) in &fragment.forbidden {
        forbidden.entry(c).or_default().extend(positions);
    }

    // The fragment's bound supersedes the old one.
    let mut max_count = base.max_count.clone();
    max_count.extend(fragment.max_count.iter().map(|(&c, &n)| (c, n)));

    KnowledgeN {
        placed,
        required,
        forbidden,
        max_count,
    }
}

/// True iff `word` is still consistent with everything in `knowledge`.
pub fn check<const N: usize>(word: &WordN<N>, knowledge: &KnowledgeN<N>) -> bool {
    for (&c, &bound) in &knowledge.max_count {
        if word.count_of(c) > bound as usize {
            return false;
        }
    }

    for (i, (w, p)) in izip!(word.0, knowledge.placed).enumerate() {
        match p {
            Some(placed) if placed != w => return false,
            _ => (),
        }
        if let Some(positions) = knowledge.forbidden.get(&w) {
            if positions.contains(&i) {
                return false;
            }
        }
    }

    for (&c, &count) in &knowledge.required {
        if word.count_of(c) < count as usize {
            return false;
        }
    }

    true
}

/// Filters `words` down to those consistent with `knowledge`, keeping order.
pub fn prune<const N: usize>(knowledge: &KnowledgeN<N>, words: &[WordN<N>]) -> Vec<WordN<N>> {
    words
        .iter()
        .filter(|word| check(word, knowledge))
        .copied()
        .collect()
}
