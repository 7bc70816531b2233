// UI layer: provides the interactive session using `dialoguer`.
// The session runs in two phases: acquire a game (new or resumed), then
// play it one move at a time. Each move is one blocking server round trip.

use anyhow::Result;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::{ApiClient, GameDTO, GameRequest};
use crate::board::print_game;

/// Session state threaded through the two phases. `game_id` is the only
/// value that survives across moves; `game` is replaced by every server
/// response.
#[derive(Default)]
pub struct Session {
    pub game_id: String,
    pub game: GameDTO,
}

/// Run the full interactive session: acquire a game, then play it until
/// the user exits or the game is lost.
///
/// Note: `Select::interact()` is keyboard-driven: arrow keys and Enter
/// choose an option.
pub fn run(api: ApiClient) -> Result<()> {
    let session = acquire_game(&api)?;
    play(&api, session)
}

/// Phase A: loop until a game handle is obtained. A failed resume (the
/// server answers with an error body and no game_id) just re-prompts.
fn acquire_game(api: &ApiClient) -> Result<Session> {
    loop {
        let items = vec!["New Game", "Resume Game"];
        let selection = Select::new()
            .with_prompt("Please select an option")
            .items(&items)
            .default(0)
            .interact()?;

        let session = match selection {
            0 => new_game(api)?,
            1 => resume_game(api)?,
            _ => Session::default(),
        };

        if !session.game_id.is_empty() {
            return Ok(session);
        }
    }
}

/// Collect the game parameters, create the game, then fetch the full
/// snapshot with the returned id and render it.
fn new_game(api: &ApiClient) -> Result<Session> {
    let username: String = Input::new().with_prompt("Username").interact_text()?;
    let rows: i32 = Input::new().with_prompt("Rows").interact_text()?;
    let columns: i32 = Input::new().with_prompt("Columns").interact_text()?;
    let mines: i32 = Input::new().with_prompt("Mines").interact_text()?;

    let req = GameRequest {
        username,
        rows,
        columns,
        mines,
    };

    let spinner = spinner("Creating game...");
    let created = api.create_game(&req)?;
    let game = api.fetch_game(&created.game_id)?;
    spinner.finish_and_clear();

    print_game(&game)?;
    Ok(Session {
        game_id: created.game_id,
        game,
    })
}

/// Prompt for an id and fetch that game. The id kept for the session is
/// the one the server echoes back, so a miss leaves it empty.
fn resume_game(api: &ApiClient) -> Result<Session> {
    let id: String = Input::new().with_prompt("Please enter game id").interact_text()?;

    let spinner = spinner("Fetching game...");
    let game = api.fetch_game(&id)?;
    spinner.finish_and_clear();

    print_game(&game)?;
    Ok(Session {
        game_id: game.game_id.clone(),
        game,
    })
}

/// Phase B: prompt for moves until the user exits or the game reaches a
/// terminal status. Coordinates are only requested for options that need
/// them; Exit breaks out before any further prompt.
fn play(api: &ApiClient, mut session: Session) -> Result<()> {
    loop {
        let items = vec!["Reveal", "Flag", "Exit"];
        let selection = Select::new()
            .with_prompt("Please select an option")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == 2 {
            break;
        }

        let row: i32 = Input::new().with_prompt("Row").interact_text()?;
        let column: i32 = Input::new().with_prompt("Column").interact_text()?;

        let spinner = spinner("Sending move...");
        session.game = match selection {
            0 => api.reveal(&session.game_id, row, column)?,
            1 => api.flag(&session.game_id, row, column)?,
            _ => continue,
        };
        spinner.finish_and_clear();

        print_game(&session.game)?;

        if session.game.status.is_terminal() {
            break;
        }
    }
    Ok(())
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.set_message(msg.to_string());
    pb
}
