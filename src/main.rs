use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tictactoe_travel::{
    args::Args,
    game::{GameState, replay},
    logging::setup_logging,
    ui::run_ui,
    view::build_view,
};

fn main() -> Result<()> {
    let args = Args::parse();

    // Replay only prints to stdout, so it can run without a log file.
    let _guard = setup_logging(
        args.log_dir.as_deref(),
        &args.log_level,
        args.moves.is_none(),
    )?;

    let state = GameState::new().with_sort_descending(args.descending);

    match args.moves {
        Some(cells) => print_replay(state, &cells, args.json),
        None => run_ui(state),
    }
}

fn print_replay(state: GameState, cells: &[usize], json: bool) -> Result<()> {
    info!(?cells, "replaying moves");
    let view = build_view(&replay(state, cells));

    if json {
        let text = serde_json::to_string_pretty(&view).context("failed to encode view as JSON")?;
        println!("{text}");
    } else {
        print!("{view}");
    }

    Ok(())
}
