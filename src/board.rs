// Board rendering: turns the sparse cell list the server sends into a
// dense text grid. The server only transmits cells whose value is known;
// everything else renders blank.

use anyhow::{bail, Result};

use crate::api::{BoardDTO, GameDTO};

/// Render a board as one display string per row. Each cell slot is the
/// cell's value followed by `|`, or `" |"` when the cell was not listed.
/// When the same coordinate appears twice in `modified_cells`, the last
/// entry wins.
///
/// A coordinate outside the board is an error: writing through it would
/// land in a different row's slot, so it is rejected instead.
pub fn render(board: &BoardDTO) -> Result<Vec<String>> {
    let rows = board.rows.max(0) as usize;
    let columns = board.columns.max(0) as usize;
    if rows == 0 || columns == 0 {
        return Ok(Vec::new());
    }

    let mut grid = vec![vec![String::new(); columns]; rows];
    for cell in &board.cells {
        if cell.row < 0
            || cell.column < 0
            || cell.row as usize >= rows
            || cell.column as usize >= columns
        {
            bail!(
                "invalid cell coordinate ({}, {}) for a {}x{} board",
                cell.row,
                cell.column,
                board.rows,
                board.columns
            );
        }
        grid[cell.row as usize][cell.column as usize] = cell.value.clone();
    }

    Ok(grid
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|value| {
                    if value.is_empty() {
                        " |".to_string()
                    } else {
                        format!("{}|", value)
                    }
                })
                .collect()
        })
        .collect())
}

/// Print a full game snapshot: the grid, then the metadata lines in the
/// fixed id / status / elapsed-time order.
pub fn print_game(game: &GameDTO) -> Result<()> {
    for row in render(&game.board)? {
        println!("{}", row);
    }
    println!("id: {}", game.game_id);
    println!("status: {}", game.status.as_str());
    println!("Elapsed Time: {}", game.elapsed_time);
    Ok(())
}
