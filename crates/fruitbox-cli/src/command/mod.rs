use clap::{Parser, Subcommand};

use self::{best_score::BestScoreArg, play::PlayArg};

mod best_score;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a timed session in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Print the stored best score
    BestScore(#[clap(flatten)] BestScoreArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::BestScore(arg) => best_score::run(&arg)?,
    }
    Ok(())
}
