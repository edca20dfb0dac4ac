use std::path::PathBuf;

use crate::store::HighScoreFile;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BestScoreArg {
    /// File the best score is stored in
    #[clap(long, default_value = "./data/high_score")]
    score_file: PathBuf,
}

pub(crate) fn run(arg: &BestScoreArg) -> anyhow::Result<()> {
    let store = HighScoreFile::new(arg.score_file.clone());
    println!("{}", store.load());
    Ok(())
}
