use std::io::{self, Read};

use anyhow::{Context, Result};
use orienteering::{solve, Grid};

/// Reads a course from stdin (`width height` followed by `height` rows of
/// map characters) and prints the shortest route length, or -1 when the
/// course has no solution.
fn main() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read map from stdin.")?;

    let mut tokens = input.split_whitespace();
    let width: usize = tokens
        .next()
        .context("Missing map width.")?
        .parse()
        .context("Map width is not a number.")?;
    let height: usize = tokens
        .next()
        .context("Missing map height.")?
        .parse()
        .context("Map height is not a number.")?;

    let rows: Vec<&str> = tokens.take(height).collect();
    let grid = Grid::from_rows(&rows, width, height)
        .context("Map rows don't match the declared dimensions.")?;

    match solve(&grid) {
        Some(total) => println!("{}", total),
        None => println!("-1"),
    }

    Ok(())
}
