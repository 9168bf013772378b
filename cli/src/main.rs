use std::cell::{Cell, RefCell};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use pickstep_core::*;
use serde::de::DeserializeOwned;

use render::Glyph;

mod render;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    /// Red and blue pawns stepping to any neighboring cell
    Pawn,
    /// Digits sliding through the gaps of a blocked board
    Number,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Which game to play
    #[arg(short, long, value_enum, default_value_t = GameKind::Pawn)]
    game: GameKind,

    /// Edge length of the pawn board
    #[arg(long, default_value_t = pawn::SIZE)]
    size: Coord,

    /// Start from a TOML layout instead of the built-in one
    #[arg(short, long)]
    layout: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Pick(Position),
    Cancel,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "cancel" | "c" => return Some(Command::Cancel),
        "help" | "h" | "?" => return Some(Command::Help),
        "quit" | "q" => return Some(Command::Quit),
        _ => {}
    }
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Pick(Position::new(row, col)))
}

const HELP: &str = "\
Enter `row col` to pick a cell: first the piece, then where it goes.
`cancel` drops the picked piece, `quit` leaves the game.
";

fn load_layout<C: CellLabel + DeserializeOwned>(path: &Path) -> anyhow::Result<Board<C>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read layout {}", path.display()))?;
    let layout: Layout<C> = toml::from_str(&text)
        .with_context(|| format!("Could not parse layout {}", path.display()))?;
    Board::try_from(layout).with_context(|| format!("Invalid layout {}", path.display()))
}

/// Runs the select-then-commit loop until input ends, `quit` is entered or `goal` is reached.
fn play<C: Glyph>(
    board: Board<C>,
    goal: Option<fn(&Board<C>) -> bool>,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<u32> {
    let mut session = Session::new(board);

    // redraw only after the board or the highlight changed
    let dirty = Rc::new(Cell::new(false));
    let highlight = Rc::new(RefCell::new(None));
    {
        let dirty = dirty.clone();
        session.board_mut().subscribe(move |change| {
            log::trace!("Cell {} changed to {:?}", change.position, change.current);
            dirty.set(true);
        });
    }
    {
        let dirty = dirty.clone();
        let highlight = highlight.clone();
        session.selector_mut().subscribe(move |change| {
            match change.current {
                Phase::SelectTo { from } => *highlight.borrow_mut() = Some(from),
                Phase::ReadyToMove { .. } => *highlight.borrow_mut() = None,
                Phase::SelectFrom => return,
            }
            dirty.set(true);
        });
    }

    writeln!(out, "{HELP}")?;
    write!(out, "{}", render::draw(session.board(), None))?;
    for line in input.lines() {
        let line = line.context("Could not read input")?;
        match parse_command(&line) {
            None => writeln!(out, "Could not understand {:?}, try `help`", line.trim())?,
            Some(Command::Pick(pos)) => match session.click(pos)? {
                ClickOutcome::Rejected => writeln!(out, "Cannot pick {pos} now")?,
                ClickOutcome::Selected(from) => writeln!(out, "Picked {from}")?,
                ClickOutcome::Moved { from, to } => {
                    writeln!(out, "Moved {from} -> {to}")?;
                    if goal.is_some_and(|goal| goal(session.board())) {
                        write!(out, "{}", render::draw(session.board(), None))?;
                        writeln!(out, "Solved in {} moves", session.moves())?;
                        return Ok(session.moves());
                    }
                }
            },
            Some(Command::Cancel) => {
                if session.selector().from().is_ok() {
                    session.cancel();
                    *highlight.borrow_mut() = None;
                    dirty.set(true);
                }
            }
            Some(Command::Help) => writeln!(out, "{HELP}")?,
            Some(Command::Quit) => break,
        }

        if dirty.replace(false) {
            write!(out, "{}", render::draw(session.board(), *highlight.borrow()))?;
        }
    }

    writeln!(out, "{} moves made", session.moves())?;
    Ok(session.moves())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(level) = args.verbose.tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .init();
    }
    log::debug!("{:?}", args);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let moves = match args.game {
        GameKind::Pawn => {
            let board = match &args.layout {
                Some(path) => load_layout::<Pawn>(path)?,
                None => match pawn::board(args.size) {
                    Ok(board) => board,
                    Err(err) => bail!("Cannot build a {} pawn board: {}", args.size, err),
                },
            };
            play(board, None, stdin, stdout)?
        }
        GameKind::Number => {
            let board = match &args.layout {
                Some(path) => load_layout::<NumberTile>(path)?,
                None => number::board(),
            };
            let goal: fn(&Board<NumberTile>) -> bool = number::is_solved;
            play(board, Some(goal), stdin, stdout)?
        }
    };
    log::info!("Session ended after {} moves", moves);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<C: Glyph>(
        board: Board<C>,
        goal: Option<fn(&Board<C>) -> bool>,
        script: &str,
    ) -> (u32, String) {
        let mut out = Vec::new();
        let moves = play(board, goal, Cursor::new(script), &mut out).unwrap();
        (moves, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_command_accepts_spaces_and_commas() {
        assert_eq!(parse_command("1 2"), Some(Command::Pick(Position::new(1, 2))));
        assert_eq!(parse_command(" 3,4 "), Some(Command::Pick(Position::new(3, 4))));
        assert_eq!(parse_command("-1, 0"), Some(Command::Pick(Position::new(-1, 0))));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("cancel"), Some(Command::Cancel));
        assert_eq!(parse_command("1"), None);
        assert_eq!(parse_command("1 2 3"), None);
        assert_eq!(parse_command("a b"), None);
    }

    #[test]
    fn play_commits_picked_moves() {
        let (moves, out) = run(pawn::board(5).unwrap(), None, "0 0\n3 0\n1 0\nquit\n");

        assert_eq!(moves, 1);
        assert!(out.contains("Picked (0,0)"));
        assert!(out.contains("Cannot pick (3,0) now"));
        assert!(out.contains("Moved (0,0) -> (1,0)"));
        assert!(out.contains(" 0 [R]"));
    }

    #[test]
    fn play_draws_starting_board_before_any_input() {
        let (moves, out) = run(pawn::board(3).unwrap(), None, "");

        assert_eq!(moves, 0);
        assert!(out.contains(" 0  R  R  R \n 1  .  .  . \n 2  B  B  B \n"));
        assert!(out.ends_with("0 moves made\n"));
    }

    #[test]
    fn play_redraws_board_after_the_move_lands() {
        let (moves, out) = run(pawn::board(3).unwrap(), None, "0 0\n1 0\n");

        assert_eq!(moves, 1);
        let moved = out.find("Moved (0,0) -> (1,0)").unwrap();
        let drawn = out.rfind(" 0  .  R  R \n 1  R  .  . \n").unwrap();
        assert!(drawn > moved);
    }

    #[test]
    fn play_redraws_without_highlight_after_cancel() {
        let (moves, out) = run(pawn::board(3).unwrap(), None, "0 0\ncancel\n");

        assert_eq!(moves, 0);
        let picked = out.find(" 0 [R] R  R").unwrap();
        let cleared = out.rfind(" 0  R  R  R").unwrap();
        assert!(cleared > picked);
    }

    #[test]
    fn play_reports_unknown_input_and_keeps_going() {
        let (moves, out) = run(number::board(), None, "jump\n1 3\n0 3\n");

        assert_eq!(moves, 1);
        assert!(out.contains("Could not understand \"jump\""));
        assert!(out.ends_with("1 moves made\n"));
    }

    #[test]
    fn play_stops_when_goal_is_reached() {
        let layout: Layout<NumberTile> = toml::from_str(
            r#"
            step = "orthogonal"
            rows = [
                ["blocked", "empty", "blocked"],
                ["one", "empty", "two"],
            ]
            "#,
        )
        .unwrap();
        let board = Board::try_from(layout).unwrap();
        let goal: fn(&Board<NumberTile>) -> bool =
            |board| board.cell_at(Position::new(1, 1)) == NumberTile::Two;

        let (moves, out) = run(board, Some(goal), "1 2\n1 1\n1 0\n0 1\n");

        assert_eq!(moves, 1);
        assert!(out.contains("Solved in 1 moves"));
    }

    #[test]
    fn bundled_layout_parses() {
        let layout: Layout<NumberTile> =
            toml::from_str(include_str!("../layouts/short-number.toml")).unwrap();
        let board = Board::try_from(layout).unwrap();

        assert_eq!(board.size(), (2, 4));
        assert!(board.can_move(Position::new(1, 2), Position::new(0, 2)));
        assert!(!number::is_solved(&board));
    }
}
