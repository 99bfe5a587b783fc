use std::cmp::Ordering::Equal;
use std::collections::BTreeMap;
use std::str::FromStr;

use rand::seq::SliceRandom;
#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use strum_macros::{Display, EnumString};
use thiserror::Error;

use crate::algo;
use crate::structs::{knowledge::KnowledgeN, word::WordN};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Objective {
    WorstCase,
    Mean,
    Median,
    Random,
}

impl Objective {
    pub fn parse(s: &str) -> Result<Self, SelectError> {
        Self::from_str(s).map_err(|_| SelectError::InvalidObjective(s.to_string()))
    }

    /// Precomputed best opening for a full-size vocabulary; recomputing it
    /// every game would redo the same full scan.
    pub fn opening(&self) -> Option<&'static str> {
        match self {
            Objective::WorstCase => Some("raise"),
            Objective::Mean => Some("roate"),
            Objective::Median => Some("reist"),
            Objective::Random => None,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("There are no possible words - check to see if you mistyped something")]
    NoCandidates,
    #[error("\"{0}\" is not a valid objective (use worst-case, mean, median or random)")]
    InvalidObjective(String),
}

/// Candidates left after merging the feedback `guess` would get if `answer`
/// were the hidden word.
fn remaining_after<const N: usize>(
    knowledge: &KnowledgeN<N>,
    guess: &WordN<N>,
    answer: &WordN<N>,
    candidates: &[WordN<N>],
) -> usize {
    let hypothetical = algo::merge(knowledge, &algo::decode_answer(guess, answer));
    candidates
        .iter()
        .filter(|word| algo::check(word, &hypothetical))
        .count()
}

fn aggregate(objective: Objective, counts: &[usize]) -> f64 {
    match objective {
        Objective::WorstCase => counts.iter().copied().max().unwrap_or(0) as f64,
        Objective::Mean => counts.iter().sum::<usize>() as f64 / counts.len() as f64,
        Objective::Median => {
            let mut outcomes = BTreeMap::new();
            for &count in counts {
                *outcomes.entry(count).or_insert(0_usize) += 1;
            }
            let half = counts.len() as f64 / 2.;
            let mut cumulative = 0_usize;
            for (&left, &frequency) in &outcomes {
                cumulative += frequency;
                if cumulative as f64 >= half {
                    return left as f64;
                }
            }
            0.
        }
        Objective::Random => unreachable!("random picks are made without scoring"),
    }
}

/// Picks the next guess from `vocabulary` that minimizes the objective over
/// the remaining `candidates` under the accumulated `knowledge`.
///
/// With one or two candidates left the first one is returned directly: no
/// other guess can do better, and it wins within one more turn. Ties prefer a
/// guess that is itself a candidate, then the earliest vocabulary position,
/// so the result is deterministic for the non-random objectives.
pub fn select_guess<const N: usize>(
    objective: Objective,
    knowledge: &KnowledgeN<N>,
    vocabulary: &[WordN<N>],
    candidates: &[WordN<N>],
) -> Result<WordN<N>, SelectError> {
    match candidates {
        [] => return Err(SelectError::NoCandidates),
        [first] | [first, _] => return Ok(*first),
        _ => (),
    }

    if objective == Objective::Random {
        let pick = candidates.choose(&mut rand::thread_rng());
        return pick.copied().ok_or(SelectError::NoCandidates);
    }

    let score_one = |(index, guess): (usize, &WordN<N>)| {
        let counts = candidates
            .iter()
            .map(|answer| remaining_after(knowledge, guess, answer, candidates))
            .collect::<Vec<_>>();
        let score = aggregate(objective, &counts);

        // A guess that would empty the candidate set carries no usable
        // information and is never a viable choice under correct feedback.
        if score == 0. {
            return None;
        }

        let outside = !candidates.contains(guess);
        Some((score, outside, index))
    };

    #[cfg(feature = "parallel")]
    let best = vocabulary
        .par_iter()
        .enumerate()
        .filter_map(score_one)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    #[cfg(not(feature = "parallel"))]
    let best = vocabulary
        .iter()
        .enumerate()
        .filter_map(score_one)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));

    best.map(|(_, _, index)| vocabulary[index])
        .ok_or(SelectError::NoCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const WORD_LENGTH: usize = 5;

    type Word = WordN<WORD_LENGTH>;
    type Knowledge = KnowledgeN<WORD_LENGTH>;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::try_from(*s).unwrap()).collect()
    }

    // Pairwise-disjoint candidates: every candidate guess scores 2 in the
    // worst case, every letter-mixing guess does better.
    fn disjoint_candidates() -> Vec<Word> {
        words(&["abcde", "fghij", "klmno"])
    }

    #[test]
    fn two_candidates_short_circuit() {
        let candidates = words(&["crane", "crone"]);
        // An empty vocabulary proves no scan happens on this path.
        let guess = select_guess(Objective::WorstCase, &Knowledge::none(), &[], &candidates);
        assert_eq!(guess.unwrap(), candidates[0]);
    }

    #[test]
    fn no_candidates_is_an_error() {
        let vocabulary = words(&["crane"]);
        let guess = select_guess(Objective::Median, &Knowledge::none(), &vocabulary, &[]);
        assert_eq!(guess.unwrap_err(), SelectError::NoCandidates);
    }

    #[test]
    fn unknown_objectives_are_rejected() {
        assert!(matches!(
            Objective::parse("entropy"),
            Err(SelectError::InvalidObjective(_))
        ));
        assert_eq!(Objective::parse("worst-case").unwrap(), Objective::WorstCase);
        assert_eq!(Objective::parse("median").unwrap(), Objective::Median);
        assert_eq!(Objective::WorstCase.to_string(), "worst-case");
    }

    #[test]
    fn random_picks_a_candidate() {
        let vocabulary = words(&["zzzzz", "abcde", "fghij", "klmno"]);
        let candidates = disjoint_candidates();
        let guess =
            select_guess(Objective::Random, &Knowledge::none(), &vocabulary, &candidates).unwrap();
        assert!(candidates.contains(&guess));
    }

    #[test]
    fn a_splitting_guess_beats_the_candidates() {
        // "afkxy" touches one letter of each candidate and always leaves
        // exactly one word, so it must win under every objective.
        let vocabulary = words(&["abcde", "fghij", "klmno", "afkxy"]);
        let candidates = disjoint_candidates();

        for objective in [Objective::WorstCase, Objective::Mean, Objective::Median] {
            let guess =
                select_guess(objective, &Knowledge::none(), &vocabulary, &candidates).unwrap();
            assert_eq!(guess, Word::try_from("afkxy").unwrap());
        }
    }

    #[rstest]
    #[case(Objective::WorstCase)]
    #[case(Objective::Mean)]
    #[case(Objective::Median)]
    fn ties_prefer_a_possible_answer(#[case] objective: Objective) {
        // "abcdz" scores exactly like the candidate "abcde" but can never be
        // the answer, so the tie must go to "abcde" despite scan order.
        let vocabulary = words(&["zzzzz", "abcdz", "abcde", "fghij", "klmno"]);
        let guess =
            select_guess(objective, &Knowledge::none(), &vocabulary, &disjoint_candidates())
                .unwrap();
        assert_eq!(guess, Word::try_from("abcde").unwrap());
    }

    #[test]
    fn ties_between_candidates_go_to_scan_order() {
        let vocabulary = words(&["zzzzz", "fghij", "abcde", "klmno"]);
        let guess = select_guess(
            Objective::WorstCase,
            &Knowledge::none(),
            &vocabulary,
            &disjoint_candidates(),
        )
        .unwrap();
        assert_eq!(guess, Word::try_from("fghij").unwrap());
    }

    #[test]
    fn selection_is_deterministic() {
        let vocabulary = words(&["zzzzz", "abcdz", "abcde", "fghij", "klmno", "afkxy"]);
        let candidates = disjoint_candidates();

        for objective in [Objective::WorstCase, Objective::Mean, Objective::Median] {
            let first =
                select_guess(objective, &Knowledge::none(), &vocabulary, &candidates).unwrap();
            let second =
                select_guess(objective, &Knowledge::none(), &vocabulary, &candidates).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn aggregation_matches_the_objectives() {
        assert_eq!(aggregate(Objective::WorstCase, &[1, 2, 3]), 3.);
        assert_eq!(aggregate(Objective::Mean, &[1, 2, 3]), 2.);
        // Cumulative frequency reaches half the candidates at the value 1.
        assert_eq!(aggregate(Objective::Median, &[1, 1, 2, 9]), 1.);
        assert_eq!(aggregate(Objective::Median, &[1, 2, 2]), 2.);
    }
}
