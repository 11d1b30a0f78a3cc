use crate::terminal::Terminal;
use crossterm::cursor::MoveTo;
use crossterm::event::KeyCode;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, stdout, Write};

pub const FIRE_HELP: &str = "\
DOOM FIRE
─────────────────────────
s        Start fire source
x        Stop fire source
t        Toggle fire source
r/g/b    Red, green, blue fire
←/h      Drift left
→/l      Drift right
↓/c      No drift
+/↑      Taller flames
-        Shorter flames
1-9, 0   Speed
Space    Pause
q/Esc    Quit
?        Close help";

/// Show a modal help overlay without modifying the back buffer.
/// Returns true if the user requested quit (q/Esc) while the overlay is open.
pub fn show_help_modal(term: &mut Terminal, help_text: &str) -> io::Result<bool> {
    if help_text.is_empty() {
        return Ok(false);
    }

    let (width, height) = term.size();
    render_help_overlay_direct(width, height, help_text)?;

    loop {
        if let Some(code) = term.wait_key(50)? {
            match code {
                KeyCode::Char('?') => break,
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                _ => {}
            }
        }
    }

    // Restore previous frame from back buffer.
    term.present()?;
    Ok(false)
}

/// Top-left corner and size of a box centered in the screen
fn overlay_box(width: u16, height: u16, help_text: &str) -> (usize, usize, usize, usize) {
    let lines = help_text.lines().count();
    let box_width = text_width(help_text) + 4; // 2 chars padding each side
    let box_height = lines + 2; // 1 row padding top/bottom

    let start_x = (width as usize).saturating_sub(box_width) / 2;
    let start_y = (height as usize).saturating_sub(box_height) / 2;
    (start_x, start_y, box_width, box_height)
}

fn text_width(help_text: &str) -> usize {
    help_text.lines().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// One line of the box: `left` + `fill` + `right`, `inner` chars between
fn box_line(left: char, fill: &str, right: char, inner: usize) -> String {
    let fill_len = fill.chars().count();
    let mut line = String::with_capacity(inner + 2);
    line.push(left);
    line.push_str(fill);
    line.extend(std::iter::repeat(' ').take(inner.saturating_sub(fill_len)));
    line.push(right);
    line
}

/// Every row of the overlay, borders included
fn overlay_rows(help_text: &str) -> Vec<String> {
    let inner = text_width(help_text) + 2;
    let rule = "─".repeat(inner);

    let mut rows = vec![box_line('┌', &rule, '┐', inner)];
    rows.extend(
        help_text
            .lines()
            .map(|line| box_line('│', &format!(" {}", line), '│', inner)),
    );
    rows.push(box_line('└', &rule, '┘', inner));
    rows
}

fn render_help_overlay_direct(width: u16, height: u16, help_text: &str) -> io::Result<()> {
    let (start_x, start_y, _, _) = overlay_box(width, height, help_text);
    let mut out = stdout();

    queue!(out, SetForegroundColor(Color::White))?;
    for (i, row) in overlay_rows(help_text).iter().enumerate() {
        queue!(out, MoveTo(start_x as u16, (start_y + i) as u16), Print(row))?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_fire_controls() {
        for key in ["Start fire source", "Stop fire source", "Drift left", "Quit"] {
            assert!(FIRE_HELP.contains(key), "missing {key}");
        }
    }

    #[test]
    fn overlay_is_centered() {
        let (x, y, w, h) = overlay_box(80, 24, "abcd\nef");
        assert_eq!((w, h), (8, 4));
        assert_eq!((x, y), (36, 10));
    }

    #[test]
    fn overlay_rows_are_boxed_and_equal_width() {
        let rows = overlay_rows("ab\ncdef");
        assert_eq!(
            rows,
            vec![
                "┌──────┐".to_string(),
                "│ ab   │".to_string(),
                "│ cdef │".to_string(),
                "└──────┘".to_string(),
            ]
        );
        let (_, _, w, h) = overlay_box(80, 24, "ab\ncdef");
        assert_eq!(rows.len(), h);
        assert!(rows.iter().all(|r| r.chars().count() == w));
    }

    #[test]
    fn overlay_clamps_to_small_screens() {
        let (x, y, _, _) = overlay_box(2, 1, FIRE_HELP);
        assert_eq!((x, y), (0, 0));
    }
}
