use comfy_table::{Cell, CellAlignment, Table};
use seatforge_core::fitness::Fitness;
use seatforge_core::plan::PlanEntry;

pub fn print_fitness_summary(fitness: &Fitness) {
    let mut table = Table::new();
    table.set_header(vec!["Criterion", "Score"]);
    table.add_row(vec![
        Cell::new("Friend proximity"),
        score_cell(fitness.friend_proximity),
    ]);
    table.add_row(vec![
        Cell::new("VIP placement"),
        score_cell(fitness.vip_placement),
    ]);
    table.add_row(vec![
        Cell::new("Group cohesion"),
        score_cell(fitness.group_cohesion),
    ]);
    table.add_row(vec![
        Cell::new("Stage nearness"),
        score_cell(fitness.stage_distance),
    ]);
    table.add_row(vec![Cell::new("Total"), score_cell(fitness.total)]);
    println!("{table}");
}

fn score_cell(score: f32) -> Cell {
    Cell::new(format!("{:.4}", score)).set_alignment(CellAlignment::Right)
}

/// Renders the room as seen from the stage: one table row per seat row,
/// VIP seats starred, empty seats left blank.
pub fn print_seating_chart(rows: usize, cols: usize, plan: &[PlanEntry]) {
    let mut grid = vec![vec![String::new(); cols]; rows];
    for entry in plan {
        let name = entry
            .attendee
            .id
            .clone()
            .unwrap_or_else(|| entry.seat.seat_id.clone());
        grid[entry.seat.row][entry.seat.col] = if entry.seat.is_vip {
            format!("{} *", name)
        } else {
            name
        };
    }

    let mut table = Table::new();
    let mut header = vec![Cell::new("")];
    header.extend((1..=cols).map(|c| Cell::new(c.to_string())));
    table.set_header(header);

    for (r, row) in grid.iter().enumerate() {
        let label = char::from_u32('A' as u32 + r as u32).unwrap_or('?');
        let mut cells = vec![Cell::new(label.to_string())];
        cells.extend(row.iter().map(Cell::new));
        table.add_row(cells);
    }

    println!("{table}");
    println!("Seats marked * are VIP.");
}
