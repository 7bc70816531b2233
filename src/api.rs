// API client module: contains a small blocking HTTP client that talks to
// the Minesweeper REST service. It is intentionally small and synchronous:
// every call is one request/response round trip and the session loop in
// `ui` blocks on it.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str =
    "https://minesweeper-sebastian-manfria.herokuapp.com/minesweeper/api/game/";

/// Requests without a configured timeout would block the whole session on a
/// stalled server, so every call gets this one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Body sent to create a new game. The server validates the dimensions
/// (mines < rows * columns); the client sends them as typed.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct GameRequest {
    pub username: String,
    pub rows: i32,
    pub columns: i32,
    pub mines: i32,
}

/// Body sent to reveal or flag one cell. Coordinates are zero-based.
#[derive(Serialize, Deserialize, Debug)]
pub struct CellRequest {
    pub row: i32,
    pub column: i32,
}

/// Minimal handle returned on game creation. The full state has to be
/// fetched separately with the returned id.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct NewGameDTO {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub game_id: String,
}

/// Full game snapshot returned by fetch, reveal and flag. The client never
/// mutates one of these; each server round trip produces a fresh value.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GameDTO {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub elapsed_time: String,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub board: BoardDTO,
}

/// Sparse board snapshot: only cells whose display value is known are
/// listed in `modified_cells`; every other cell is implicitly blank.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct BoardDTO {
    #[serde(default)]
    pub rows: i32,
    #[serde(default)]
    pub columns: i32,
    #[serde(default)]
    pub mines: i32,
    #[serde(default, rename = "modified_cells")]
    pub cells: Vec<CellDTO>,
}

/// One cell's display value. The vocabulary (digits, flag and mine markers)
/// is defined by the server and opaque to this client.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CellDTO {
    pub row: i32,
    pub column: i32,
    pub value: String,
}

/// Game status as reported by the server.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "WON")]
    Won,
    #[serde(rename = "LOST")]
    Lost,
}

/// Statuses that end the play loop. WON is intentionally absent: a won
/// game stays open so the user can keep inspecting the board.
pub const TERMINAL_STATUSES: [GameStatus; 1] = [GameStatus::Lost];

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        TERMINAL_STATUSES.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Won => "WON",
            GameStatus::Lost => "LOST",
        }
    }
}

/// Blocking client holding the shared reqwest client and the base URL of
/// the game service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `MINESWEEPER_API_URL` or fallback to the production service URL.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("MINESWEEPER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, base_url })
    }

    /// Create a new game by POSTing a GameRequest to the collection
    /// endpoint. The server answers 201 with a NewGameDTO.
    pub fn create_game(&self, req: &GameRequest) -> Result<NewGameDTO> {
        let res = self
            .client
            .post(&self.base_url)
            .json(req)
            .header(CONTENT_TYPE, JSON_UTF8)
            .send()
            .context("Failed to send create-game request")?;
        let status = res.status();
        let body = res.text().context("Failed to read create-game response")?;
        Ok(decode_body(status, StatusCode::CREATED, &body))
    }

    /// Fetch the full snapshot of an existing game.
    pub fn fetch_game(&self, game_id: &str) -> Result<GameDTO> {
        let url = format!("{}{}", &self.base_url, game_id);
        let res = self
            .client
            .get(&url)
            .send()
            .context("Failed to send fetch-game request")?;
        let status = res.status();
        let body = res.text().context("Failed to read fetch-game response")?;
        Ok(decode_body(status, StatusCode::OK, &body))
    }

    /// Reveal one cell. Returns the updated snapshot.
    pub fn reveal(&self, game_id: &str, row: i32, column: i32) -> Result<GameDTO> {
        self.put_cell(game_id, "reveal", row, column)
    }

    /// Flag one cell. Returns the updated snapshot.
    pub fn flag(&self, game_id: &str, row: i32, column: i32) -> Result<GameDTO> {
        self.put_cell(game_id, "flag", row, column)
    }

    fn put_cell(&self, game_id: &str, action: &str, row: i32, column: i32) -> Result<GameDTO> {
        let url = format!("{}{}/{}", &self.base_url, game_id, action);
        let res = self
            .client
            .put(&url)
            .json(&CellRequest { row, column })
            .header(CONTENT_TYPE, JSON_UTF8)
            .send()
            .with_context(|| format!("Failed to send {} request", action))?;
        let status = res.status();
        let body = res
            .text()
            .with_context(|| format!("Failed to read {} response", action))?;
        Ok(decode_body(status, StatusCode::OK, &body))
    }
}

/// Shared response policy for all four endpoints: on an unexpected status
/// the raw body is surfaced to the user as a diagnostic, and the body is
/// decoded best-effort either way. A body that fails to decode leaves the
/// DTO at its zero value (the session loop treats an empty game_id as "no
/// game"), but the failure is logged instead of silently swallowed.
pub fn decode_body<T: DeserializeOwned + Default>(
    status: StatusCode,
    expected: StatusCode,
    body: &str,
) -> T {
    if status != expected {
        println!("{}", body);
    }
    match serde_json::from_str(body) {
        Ok(dto) => dto,
        Err(e) => {
            log::warn!("failed to decode response body (status {}): {}", status, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_request_round_trips() {
        let req = GameRequest {
            username: "alice".into(),
            rows: 9,
            columns: 9,
            mines: 10,
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: GameRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn cell_request_uses_wire_field_names() {
        let json = serde_json::to_string(&CellRequest { row: 3, column: 7 }).unwrap();
        assert_eq!(json, r#"{"row":3,"column":7}"#);
    }

    #[test]
    fn game_dto_decodes_sparse_board() {
        let json = r#"{
            "username": "alice",
            "game_id": "abc-123",
            "elapsed_time": "00:42",
            "status": "IN_PROGRESS",
            "board": {
                "rows": 2,
                "columns": 2,
                "mines": 1,
                "modified_cells": [{"row": 0, "column": 1, "value": "2"}]
            }
        }"#;
        let game: GameDTO = serde_json::from_str(json).unwrap();
        assert_eq!(game.game_id, "abc-123");
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.board.cells.len(), 1);
        assert_eq!(game.board.cells[0].value, "2");
    }

    #[test]
    fn error_body_decodes_to_zero_valued_game() {
        // A 404 with a diagnostic body must yield game_id == "", which the
        // session loop reads as "game not acquired".
        let game: GameDTO = decode_body(
            StatusCode::NOT_FOUND,
            StatusCode::OK,
            r#"{"error":"not found"}"#,
        );
        assert_eq!(game.game_id, "");
        assert_eq!(game.status, GameStatus::InProgress);
        assert!(game.board.cells.is_empty());
    }

    #[test]
    fn garbage_body_decodes_to_default() {
        let game: GameDTO = decode_body(StatusCode::OK, StatusCode::OK, "<html>oops</html>");
        assert_eq!(game.game_id, "");
    }

    #[test]
    fn only_lost_is_terminal() {
        assert!(GameStatus::Lost.is_terminal());
        assert!(!GameStatus::Won.is_terminal());
        assert!(!GameStatus::InProgress.is_terminal());
    }

    #[test]
    fn status_wire_strings() {
        let won: GameStatus = serde_json::from_str(r#""WON""#).unwrap();
        assert_eq!(won, GameStatus::Won);
        assert_eq!(serde_json::to_string(&GameStatus::Lost).unwrap(), r#""LOST""#);
    }
}
