#[cfg(feature = "terminal")]
use colored::Colorize;
use core::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::WordN;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feedback {
    Exact,
    Misplaced,
    Absent,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Expected feedback of length: {expected_length}. Found \"{feedback}\"")]
    IncorrectLength {
        feedback: String,
        expected_length: usize,
    },
    #[error("Unexpected feedback character '{0}'. Use an uppercase letter for an exact match, a lowercase letter for a misplaced one and '.' for an absent one")]
    UnexpectedChar(char),
}

/// Verdicts for one guess, aligned index-by-index with its letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackN<const N: usize>(pub [Feedback; N]);

impl<const N: usize> FeedbackN<N> {
    pub fn all_exact(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Exact)
    }

    /// Renders the verdicts in the external encoding: uppercase for exact,
    /// lowercase for misplaced, '.' for absent.
    pub fn encode(&self, guess: &WordN<N>) -> String {
        self.0
            .iter()
            .zip(guess.0.iter())
            .map(|(f, c)| match f {
                Feedback::Exact => c.to_ascii_uppercase(),
                Feedback::Misplaced => c.to_ascii_lowercase(),
                Feedback::Absent => '.',
            })
            .collect()
    }
}

impl<const N: usize> FromStr for FeedbackN<N> {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verdicts = s
            .chars()
            .map(|c| match c {
                '.' => Ok(Feedback::Absent),
                c if c.is_ascii_uppercase() => Ok(Feedback::Exact),
                c if c.is_ascii_lowercase() => Ok(Feedback::Misplaced),
                c => Err(FeedbackError::UnexpectedChar(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        verdicts
            .try_into()
            .map(Self)
            .map_err(|_: Vec<_>| FeedbackError::IncorrectLength {
                feedback: s.to_string(),
                expected_length: N,
            })
    }
}

#[cfg(feature = "terminal")]
impl<const N: usize> fmt::Display for FeedbackN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &verdict in self.0.iter() {
            let square = match verdict {
                Feedback::Exact => "■".green(),
                Feedback::Misplaced => "■".yellow(),
                Feedback::Absent => "■".red(),
            };

            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

#[cfg(not(feature = "terminal"))]
impl<const N: usize> fmt::Display for FeedbackN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &verdict in self.0.iter() {
            let c = match verdict {
                Feedback::Exact => 'E',
                Feedback::Misplaced => 'M',
                Feedback::Absent => '.',
            };

            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
