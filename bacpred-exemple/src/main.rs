use bacpred_core::history;
use bacpred_core::model::outcome;
use bacpred_core::model::predictor::{self, Prediction, PredictorConfig, Strategy};
use bacpred_core::model::streak;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

mod io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder().format_timestamp(None).init();

    // A raw result string as a user would type it.
    // Tokens are trimmed and case-normalized; 'x' is dropped silently.
    let raw_input = "P,b, T,x,P,P,B,B,T,P";
    let sequence = outcome::parse_sequence(raw_input);

    // The parser never fails; "text in, nothing out" is the signal a host
    // should surface as an invalid-input warning
    if outcome::is_noise(raw_input, &sequence) {
        println!("Invalid input: expected comma-separated P, B or T tokens");
        return Ok(());
    }

    println!("Rounds played: {}", sequence.len());
    for (outcome, count) in streak::tally(&sequence) {
        println!("  {}: {}", outcome, count);
    }

    // Run-length view of the same sequence
    print!("Streaks:");
    for streak in streak::streaks(&sequence) {
        print!(" {}x{}", streak.outcome.symbol(), streak.length);
    }
    println!();

    // Predictor settings; the setters validate their input
    let mut config = PredictorConfig::default();
    config.set_lookback(10)?;
    config.set_window(2)?;

    // A zero window is rejected
    match config.set_window(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A window of 0 is invalid, must be at least 1"),
    }

    // Strategy names parse case-insensitively and unknown names fail fast
    let favorite: Strategy = "Markov".parse()?;
    println!("Favorite strategy: {}", favorite);
    match "deep-learning".parse::<Strategy>() {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("This strategy ('deep-learning') does not exist"),
    }

    // A seeded generator makes the random branches reproducible;
    // pass `&mut rand::rng()` instead for a fresh draw every run
    let mut rng = StdRng::seed_from_u64(42);
    for strategy in Strategy::ALL {
        let prediction = predictor::predict(&sequence, strategy, &config, &mut rng);
        match strategy {
            // The placeholder has no model behind it; label it as such
            Strategy::Stochastic => println!("{}: {} (simulated)", strategy, prediction),
            _ => println!("{}: {}", strategy, prediction),
        }
    }

    // External dataset collaborator: a tabular file whose first column
    // holds one outcome symbol per row (header line skipped)
    let dataset_path = "data/results.csv";
    if Path::new(dataset_path).is_file() {
        let dataset = io::load_results_column(dataset_path)?;
        println!("Dataset rounds: {}", dataset.len());
        let prediction = predictor::predict(&dataset, favorite, &config, &mut rng);
        println!("Dataset {}: {}", favorite, prediction);
    } else {
        println!("No dataset at {}, skipping", dataset_path);
    }

    // Persistence collaborator: the engine formats the payloads, the
    // host appends them to its logs
    if Path::new("data").is_dir() {
        io::append_lines("data/history.csv", &history::history_rows(&sequence))?;
        let note = history::note_line(raw_input, "strong banker run in the middle");
        io::append_lines("data/notes.txt", &[note])?;
        println!("History and note saved");
    } else {
        println!("No data directory, skipping save");
    }

    // Show a prediction whose result is a status rather than an outcome
    let short = outcome::parse_sequence("P");
    let prediction = predictor::predict(&short, Strategy::Markov, &config, &mut rng);
    if let Prediction::InsufficientData { .. } = prediction {
        println!("One round is not enough for markov: {}", prediction);
    }

    Ok(())
}
