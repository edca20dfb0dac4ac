use std::path::PathBuf;

use fruitbox_engine::{BoardSeed, CellMetrics, GameSession};

use crate::{
    store::HighScoreFile,
    tui::Runtime,
    ui::widgets::{CELL_HEIGHT, CELL_WIDTH},
};

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// File the best score is loaded from and saved to
    #[clap(long, default_value = "./data/high_score")]
    score_file: PathBuf,
    /// Fix the first board (32 hex characters); restarts draw fresh boards
    #[clap(long)]
    seed: Option<BoardSeed>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            score_file: PathBuf::from("./data/high_score"),
            seed: None,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { score_file, seed } = arg;

    let store = HighScoreFile::new(score_file.clone());
    let high_score = store.load();
    let metrics = CellMetrics::new(f64::from(CELL_WIDTH), f64::from(CELL_HEIGHT));
    let session = match seed {
        Some(seed) => GameSession::with_seed(*seed, metrics, high_score),
        None => GameSession::new(metrics, high_score),
    };

    let mut app = PlayApp::new(session, store);
    Runtime::new().run(&mut app)?;

    let (session, save_error) = app.into_parts();
    if let Some(summary) = session.summary() {
        println!("Final score: {}", summary.score());
        if summary.new_high_score() {
            println!("New best score: {}", summary.high_score());
        } else {
            println!("Best score: {}", summary.high_score());
        }
    }
    if let Some(err) = save_error {
        return Err(err.context("high score could not be saved"));
    }
    Ok(())
}
