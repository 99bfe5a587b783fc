use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::algo;
use crate::solvers::{select_guess, Objective, SelectError};
use crate::structs::{knowledge::KnowledgeN, word::WordN};

/// Guess-count frequencies over a solution set: {turns taken → occurrences}.
pub type GuessDistribution = BTreeMap<usize, usize>;

/// Plays one full game against a known `answer` and returns the number of
/// guesses to convergence. Every trial starts from a fresh empty knowledge
/// state. `opening` replaces the first selector call; hard mode restricts the
/// guess vocabulary to words still consistent with the feedback so far.
pub fn play_out<const N: usize>(
    objective: Objective,
    vocabulary: &[WordN<N>],
    candidates: &[WordN<N>],
    answer: &WordN<N>,
    opening: Option<WordN<N>>,
    hard_mode: bool,
) -> Result<usize, SelectError> {
    let mut knowledge = KnowledgeN::none();
    let mut remaining = candidates.to_vec();
    let mut allowed = vocabulary.to_vec();
    let mut turns = 0_usize;

    loop {
        turns += 1;
        let guess = match opening {
            Some(word) if turns == 1 => word,
            _ => select_guess(objective, &knowledge, &allowed, &remaining)?,
        };

        if guess == *answer {
            return Ok(turns);
        }

        knowledge = algo::merge(&knowledge, &algo::decode_answer(&guess, answer));
        remaining = algo::prune(&knowledge, &remaining);
        if hard_mode {
            allowed = algo::prune(&knowledge, &allowed);
        }
    }
}

/// Self-play over every word in `candidates` as the hidden answer, collecting
/// the distribution of guess counts for the given objective.
pub fn evaluate_strategy<const N: usize>(
    objective: Objective,
    vocabulary: &[WordN<N>],
    candidates: &[WordN<N>],
    opening: Option<WordN<N>>,
    hard_mode: bool,
) -> Result<GuessDistribution, SelectError> {
    #[cfg(feature = "parallel")]
    let turn_counts = candidates
        .par_iter()
        .map(|answer| play_out(objective, vocabulary, candidates, answer, opening, hard_mode))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let turn_counts = candidates
        .iter()
        .map(|answer| play_out(objective, vocabulary, candidates, answer, opening, hard_mode))
        .collect::<Result<Vec<_>, _>>()?;

    let mut distribution = GuessDistribution::new();
    for turns in turn_counts {
        *distribution.entry(turns).or_insert(0) += 1;
    }

    Ok(distribution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORD_LENGTH: usize = 5;

    type Word = WordN<WORD_LENGTH>;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::try_from(*s).unwrap()).collect()
    }

    #[test]
    fn distribution_counts_every_answer() {
        // Pairwise-disjoint words: the selector takes "abcde" first, and each
        // wrong guess rules out exactly its own five letters.
        let vocabulary = words(&["abcde", "fghij", "klmno"]);

        let distribution =
            evaluate_strategy(Objective::WorstCase, &vocabulary, &vocabulary, None, false)
                .unwrap();

        assert_eq!(distribution, GuessDistribution::from([(1, 1), (2, 1), (3, 1)]));
        assert_eq!(distribution.values().sum::<usize>(), vocabulary.len());
    }

    #[test]
    fn the_opening_is_guessed_first() {
        let vocabulary = words(&["abcde", "fghij", "klmno"]);
        let opening = Some(Word::try_from("klmno").unwrap());

        let answer = Word::try_from("klmno").unwrap();
        let turns =
            play_out(Objective::WorstCase, &vocabulary, &vocabulary, &answer, opening, false)
                .unwrap();
        assert_eq!(turns, 1);
    }

    #[test]
    fn hard_mode_still_converges() {
        let vocabulary = words(&["abcde", "fghij", "klmno"]);

        let distribution =
            evaluate_strategy(Objective::Median, &vocabulary, &vocabulary, None, true).unwrap();
        assert_eq!(distribution.values().sum::<usize>(), vocabulary.len());
        assert!(distribution.keys().all(|&turns| turns <= vocabulary.len()));
    }

    #[test]
    fn an_answer_outside_the_candidates_surfaces_no_candidates() {
        let vocabulary = words(&["abcde"]);
        let answer = Word::try_from("zzzzz").unwrap();

        let result =
            play_out(Objective::WorstCase, &vocabulary, &vocabulary, &answer, None, false);
        assert_eq!(result.unwrap_err(), SelectError::NoCandidates);
    }
}
