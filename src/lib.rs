// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive client.
//
// Module responsibilities:
// - `api`: wire DTOs and the blocking HTTP calls against the Minesweeper
//   service (create, fetch, reveal, flag).
// - `board`: renders a sparse board snapshot as a text grid.
// - `ui`: the two-phase interactive session loop, delegating to `api`
//   and `board`.
//
// Keeping this separation makes the rendering and decode logic testable
// without a terminal or a running server.
pub mod api;
pub mod board;
pub mod ui;
