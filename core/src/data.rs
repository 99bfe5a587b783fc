use crate::structs::word::{WordError, WordN};
use std::io::{self, BufRead};
use std::{fs::File, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to read the word list")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Word(#[from] WordError),
}

pub fn load_words<P, const N: usize>(filename: P) -> Result<Vec<WordN<N>>, DataError>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    let mut words = Vec::new();
    for line in io::BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        words.push(WordN::try_from(line)?);
    }

    Ok(words)
}

pub fn parse_words<'a, I, const N: usize>(lines: I) -> Result<Vec<WordN<N>>, WordError>
where
    I: Iterator<Item = &'a str>,
{
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(WordN::try_from)
        .collect()
}
