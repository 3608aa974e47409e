use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::locale::Lang;
use crate::storage::Storage;

mod app;
mod command;
mod locale;
mod render;
mod storage;

#[derive(Parser, Debug)]
#[command(version, about = "Console minesweeper", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random, every round reuses it
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where settings and statistics are kept
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Language of prompts and messages
    #[arg(short, long, value_enum, default_value_t)]
    lang: Lang,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let storage = Storage::new(args.data_dir.unwrap_or_else(Storage::default_dir));
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    app::App::new(stdin, stdout, args.lang.messages(), storage, args.seed).run()?;
    log::debug!("Exiting");
    Ok(())
}
