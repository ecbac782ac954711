// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

// Smoke harness: replays a fixed sequence of writes on a 5x6 table and prints
// the run list after each one. Set RUST_LOG=rletable=debug to see splits.

use rletable::{CompressedTable, TableError};
use tracing_subscriber::EnvFilter;

const WRITES: &[(usize, usize, &str)] = &[
    (0, 1, "a"),
    (0, 1, "x"),
    (2, 0, "b"),
    (2, 1, "a"),
    (2, 2, "b"),
    (2, 3, "r"),
    (2, 4, "r"),
    (2, 3, "b"),
    (4, 3, "b"),
    (4, 4, "a"),
    (4, 4, "g"),
    (2, 1, "b"),
    (2, 0, "x"),
    (4, 5, "g"),
    (21, 5, "b"),
];

fn main() -> Result<(), TableError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut table = CompressedTable::new(5, 6, "x");
    println!("{}", table);

    for &(row, col, value) in WRITES {
        table.set_cell(row, col, value)?;
        println!("set ({}, {}) = {}", row, col, value);
        println!("table is {}", table);
    }

    print!("{}", table.render_grid());
    return Ok(());
}
