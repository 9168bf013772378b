use pickstep_core::{Board, CellLabel, NumberTile, Pawn, Position};

/// Terminal appearance of a cell, three columns wide.
pub trait Glyph: CellLabel {
    fn glyph(self) -> &'static str;
}

impl Glyph for Pawn {
    fn glyph(self) -> &'static str {
        match self {
            Pawn::Empty => " . ",
            Pawn::Red => " R ",
            Pawn::Blue => " B ",
        }
    }
}

impl Glyph for NumberTile {
    fn glyph(self) -> &'static str {
        use NumberTile::*;
        match self {
            Empty => " . ",
            Blocked => "###",
            One => " 1 ",
            Two => " 2 ",
            Three => " 3 ",
            Four => " 4 ",
            Five => " 5 ",
            Six => " 6 ",
            Seven => " 7 ",
            Eight => " 8 ",
            Nine => " 9 ",
        }
    }
}

/// Draws the board with row and column labels, `highlight` is framed in brackets.
pub fn draw<C: Glyph>(board: &Board<C>, highlight: Option<Position>) -> String {
    let (rows, cols) = board.size();
    let mut out = String::from("   ");
    for col in 0..cols {
        out.push_str(&format!("{col:^3}"));
    }
    out.push('\n');

    for row in 0..rows {
        out.push_str(&format!("{row:>2} "));
        for col in 0..cols {
            let pos = Position::new(row, col);
            let glyph = board.cell_at(pos).glyph();
            if highlight == Some(pos) {
                out.push('[');
                out.push_str(glyph.trim());
                out.push(']');
            } else {
                out.push_str(glyph);
            }
        }
        out.push('\n');
    }
    out
}
