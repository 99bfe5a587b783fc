use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use dialoguer::Input;
use eyre::{eyre, Result};
use wa_core::algo;
use wa_core::data::load_words;
use wa_core::evaluator::evaluate_strategy;
use wa_core::solvers::{select_guess, Objective};
use wa_core::structs::{FeedbackN, KnowledgeN, WordN};
use wordle_advisor_core as wa_core;

const WORD_LENGTH: usize = 5;

type Word = WordN<WORD_LENGTH>;
type Feedback = FeedbackN<WORD_LENGTH>;
type Knowledge = KnowledgeN<WORD_LENGTH>;

#[derive(Parser)]
#[command(name = "wordle-advisor", about = "Suggests guesses for five-letter word puzzles")]
struct Opts {
    /// Word list with every legal guess, one word per line
    #[arg(long, default_value = "words.txt")]
    words: PathBuf,

    /// Word list with the possible solutions
    #[arg(long, default_value = "solutions.txt")]
    solutions: PathBuf,

    /// Scoring objective: worst-case, mean, median or random
    #[arg(long, default_value = "median")]
    objective: String,

    /// Only suggest guesses still consistent with the feedback so far
    #[arg(long)]
    hard: bool,

    /// Guess only from the solution list
    #[arg(long)]
    common_only: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive assistant: proposes guesses and reads feedback
    Play,
    /// Enter past guesses with feedback and list the remaining candidates
    Remaining,
    /// Self-play against every solution and print the guess distribution
    Evaluate,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    let objective = Objective::parse(&opts.objective)?;

    let mut vocabulary: Vec<Word> = load_words(&opts.words)?;
    let candidates: Vec<Word> = load_words(&opts.solutions)?;
    if opts.common_only {
        vocabulary = candidates.clone();
    }

    let opening = if opts.common_only || opts.hard {
        Some(Word::try_from("raise")?)
    } else {
        objective.opening().map(Word::try_from).transpose()?
    };

    match opts.command.unwrap_or(Command::Play) {
        Command::Play => play(objective, vocabulary, candidates, opening, opts.hard),
        Command::Remaining => remaining(&candidates),
        Command::Evaluate => evaluate(objective, &vocabulary, &candidates, opening, opts.hard),
    }
}

fn prompt_feedback(guess: &Word) -> Result<Feedback> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Result for {guess} (uppercase = exact, lowercase = misplaced, . = absent)"
        ))
        .validate_with(|line: &String| line.trim().parse::<Feedback>().map(|_| ()))
        .interact_text()?;

    Ok(input.trim().parse()?)
}

fn play(
    objective: Objective,
    mut vocabulary: Vec<Word>,
    mut candidates: Vec<Word>,
    opening: Option<Word>,
    hard: bool,
) -> Result<()> {
    let mut knowledge = Knowledge::none();

    let mut guess = match opening {
        Some(word) => word,
        None => select_guess(objective, &knowledge, &vocabulary, &candidates)?,
    };
    println!("Guess {guess}");

    loop {
        vocabulary.retain(|word| *word != guess);

        let feedback = prompt_feedback(&guess)?;
        println!("{feedback}");
        if feedback.all_exact() {
            println!("Solved it.");
            return Ok(());
        }

        knowledge = algo::merge(&knowledge, &algo::decode(&guess, &feedback));
        candidates = algo::prune(&knowledge, &candidates);
        if hard {
            vocabulary = algo::prune(&knowledge, &vocabulary);
        }

        guess = select_guess(objective, &knowledge, &vocabulary, &candidates)?;
        if candidates.len() == 1 {
            println!("The word is {guess}");
            return Ok(());
        }

        println!("Guess {guess} ({} candidates left)", candidates.len());
    }
}

fn remaining(candidates: &[Word]) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("Type each guess-result pair, separated by commas (e.g. crane-cR..e)")
        .interact_text()?;

    let mut knowledge = Knowledge::none();
    for pair in input.split(',') {
        let (guess, result) = pair
            .trim()
            .split_once('-')
            .ok_or_else(|| eyre!("expected guess-result, got \"{}\"", pair.trim()))?;
        let guess = Word::try_from(guess)?;
        let feedback: Feedback = result.parse()?;
        knowledge = algo::merge(&knowledge, &algo::decode(&guess, &feedback));
    }

    let left = algo::prune(&knowledge, candidates);
    println!("{} candidates left:", left.len());
    for word in left {
        println!("{word}");
    }

    Ok(())
}

fn evaluate(
    objective: Objective,
    vocabulary: &[Word],
    candidates: &[Word],
    opening: Option<Word>,
    hard: bool,
) -> Result<()> {
    println!(
        "Replaying all {} solutions with the {objective} objective...",
        candidates.len()
    );

    let start = Instant::now();
    let distribution = evaluate_strategy(objective, vocabulary, candidates, opening, hard)?;
    let elapsed = start.elapsed();

    let games: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(turns, count)| turns * count).sum();

    println!("Guess frequencies:");
    for (turns, count) in &distribution {
        println!("{turns}: {count}");
    }
    println!("Mean guesses: {:.3}", total_guesses as f64 / games as f64);
    println!("Took {}ms", elapsed.as_millis());

    Ok(())
}
