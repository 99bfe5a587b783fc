use core::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordError {
    #[error("Expected word of length: {expected_length}. Found word \"{word}\" of length {}", word.len())]
    IncorrectLength {
        word: String,
        expected_length: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordN<const N: usize>(pub [char; N]);

impl<const N: usize> fmt::Display for WordN<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<const N: usize> WordN<N> {
    pub fn count_of(&self, c: char) -> usize {
        self.0.iter().filter(|&&x| x == c).count()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl<const N: usize> TryFrom<&str> for WordN<N> {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let array = value
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_: Vec<_>| WordError::IncorrectLength {
                word: value.to_string(),
                expected_length: N,
            })?;

        Ok(Self(array))
    }
}
