use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use darts501::board::Board;
use darts501::calibration::FieldRanking;
use darts501::game::MatchReport;

fn optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

pub fn print_board(board: &Board) {
    println!("\nBoard: {} fields", board.len());
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Ring"),
        Cell::new("Score"),
        Cell::new("Mult"),
        Cell::new("Angle (deg)"),
        Cell::new("Radius"),
        Cell::new("Aim X").fg(Color::Cyan),
        Cell::new("Aim Y").fg(Color::Cyan),
    ]);

    for (_, field) in board.iter() {
        let aim = field.cartesian_center();
        let angle = if field.is_bull() {
            "full".to_string()
        } else {
            format!(
                "{:.1}..{:.1}",
                field.min_angle.to_degrees(),
                field.max_angle.to_degrees()
            )
        };
        table.add_row(vec![
            Cell::new(field.label()),
            Cell::new(field.ring.to_string()),
            Cell::new(field.score).set_alignment(CellAlignment::Right),
            Cell::new(field.multiplier()).set_alignment(CellAlignment::Right),
            Cell::new(angle),
            Cell::new(format!("{:.3}..{:.3}", field.min_radius, field.max_radius)),
            Cell::new(format!("{:.4}", aim.x)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", aim.y)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_ranking(rows: &[FieldRanking], top: usize) {
    println!("\n=== 🎯 CALIBRATION RANKING (top {}) ===", top.min(rows.len()));
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Samples"),
        Cell::new("Accuracy"),
        Cell::new("EV").fg(Color::Green),
        Cell::new("Aim X"),
        Cell::new("Aim Y"),
    ]);

    for (rank, row) in rows.iter().take(top).enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&row.label),
            Cell::new(row.samples).set_alignment(CellAlignment::Right),
            Cell::new(optional(row.accuracy, 3)).set_alignment(CellAlignment::Right),
            Cell::new(optional(row.expected_value, 2)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.aim_x)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.4}", row.aim_y)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_match_summary(results: &[MatchReport]) {
    println!("\n=== 🏆 MATCH SUMMARY ===");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Match"),
        Cell::new("Darts"),
        Cell::new("Legs").fg(Color::Green),
        Cell::new("Busts").fg(Color::Red),
        Cell::new("Final Score").add_attribute(Attribute::Bold),
    ]);

    for (i, r) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(r.darts_thrown).set_alignment(CellAlignment::Right),
            Cell::new(r.legs_won).set_alignment(CellAlignment::Right),
            Cell::new(r.busts).set_alignment(CellAlignment::Right),
            Cell::new(r.final_score).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);

    let (legs, darts) = totals(results);
    if legs > 0 {
        println!("Legs won: {} | Darts per leg: {:.1}", legs, darts as f64 / legs as f64);
    } else {
        println!("Legs won: 0");
    }
}

/// `(legs won, darts thrown)` across every match.
fn totals(results: &[MatchReport]) -> (u64, u64) {
    results.iter().fold((0, 0), |(legs, darts), r| {
        (legs + u64::from(r.legs_won), darts + u64::from(r.darts_thrown))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_do_not_wrap_at_u32() {
        let report = MatchReport {
            final_score: 501,
            darts_thrown: u32::MAX,
            legs_won: 1,
            busts: 0,
        };
        let (legs, darts) = totals(&[report, report, report]);
        assert_eq!(legs, 3);
        assert_eq!(darts, 3 * u64::from(u32::MAX));
    }
}
