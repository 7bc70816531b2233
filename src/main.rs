// Entrypoint for the CLI application.
// - Keeps `main` small: create an API client and hand it to the UI loop.
// - Returns `anyhow::Result`, so a transport failure anywhere in the
//   session bubbles up here and ends the process with a non-zero status.

use minesweeper_cli::{api::ApiClient, ui};

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls diagnostic output (decode failures and the like);
    // the board itself always goes to stdout.
    env_logger::init();

    // Base URL comes from `MINESWEEPER_API_URL` or defaults to the
    // production service. See `api::ApiClient::from_env`.
    let api = ApiClient::from_env()?;

    // Runs the two-phase session. This call blocks until the user exits
    // or the game is lost.
    ui::run(api)?;
    Ok(())
}
