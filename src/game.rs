use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{PrintStyledContent, Stylize},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use picslide_core::PuzzleSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Quit,
}

/// Interactive play loop. Arrow keys (or hjkl) slide the tile on that side
/// of the blank into the blank; the engine decides legality. The loop polls
/// the solved detector through the session after every applied move.
pub fn run(session: &mut PuzzleSession, title: &str) -> Result<Outcome> {
    enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, EnterAlternateScreen, cursor::Hide)?;

    let res = event_loop(&mut out, session, title);

    execute!(out, cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    res
}

fn event_loop(out: &mut io::Stdout, session: &mut PuzzleSession, title: &str) -> Result<Outcome> {
    draw(out, session, title)?;
    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    return Ok(if session.solved() { Outcome::Solved } else { Outcome::Quit });
                }
                code => {
                    if session.solved() {
                        // banner is up; any key returns to the menu
                        return Ok(Outcome::Solved);
                    }
                    if let Some(target) = slide_target(code, session) {
                        if session.attempt_move(target).applied {
                            draw(out, session, title)?;
                        }
                    }
                }
            },
            Event::Resize(_, _) => draw(out, session, title)?,
            _ => {}
        }
    }
}

/// Map a key to the grid index of the tile that would slide into the blank.
/// Up means the tile below the blank moves up, and so on.
fn slide_target(code: KeyCode, session: &PuzzleSession) -> Option<usize> {
    let grid = session.grid();
    let (nbx, nby) = (grid.num_blocks_x, grid.num_blocks_y);
    let blank = session.arrangement().blank_index();
    let (bx, by) = (blank % nbx, blank / nbx);
    match code {
        KeyCode::Up | KeyCode::Char('k') => (by + 1 < nby).then(|| blank + nbx),
        KeyCode::Down | KeyCode::Char('j') => (by > 0).then(|| blank - nbx),
        KeyCode::Left | KeyCode::Char('h') => (bx + 1 < nbx).then(|| blank + 1),
        KeyCode::Right | KeyCode::Char('l') => (bx > 0).then(|| blank - 1),
        _ => None,
    }
}

fn draw(out: &mut io::Stdout, session: &PuzzleSession, title: &str) -> Result<()> {
    let nbx = session.grid().num_blocks_x;
    let nby = session.grid().num_blocks_y;

    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(out, PrintStyledContent(title.bold()))?;

    for y in 0..nby {
        queue!(out, cursor::MoveTo(0, 2 + y as u16))?;
        for x in 0..nbx {
            let idx = y * nbx + x;
            let v = session.arrangement().slots()[idx];
            if v == 0 {
                queue!(out, PrintStyledContent("    ·".dark_grey()))?;
            } else {
                let cell = format!("{:>5}", v);
                // tiles already home are tinted to show progress
                let styled = if v == idx { cell.green() } else { cell.white() };
                queue!(out, PrintStyledContent(styled))?;
            }
        }
    }

    let status_row = 3 + nby as u16;
    queue!(out, cursor::MoveTo(0, status_row))?;
    queue!(out, PrintStyledContent(format!("moves: {}", session.moves()).dark_grey()))?;
    queue!(out, cursor::MoveTo(0, status_row + 1))?;
    queue!(
        out,
        PrintStyledContent("arrows/hjkl=slide tile into the gap | q/Esc=leave".dark_grey())
    )?;

    if session.solved() {
        queue!(out, cursor::MoveTo(0, status_row + 3))?;
        queue!(
            out,
            PrintStyledContent(
                format!("Finito! Solved in {} moves. Press any key.", session.moves()).green().bold()
            )
        )?;
    }

    out.flush()?;
    Ok(())
}
