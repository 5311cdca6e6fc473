use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::view::{pad_to_width, Line};

/// Raw-mode alternate screen. Restores the terminal when dropped.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the whole screen: header lines, a blank line, then the page.
    pub fn draw(&mut self, header: &[String], lines: &[Line]) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let width = usize::from(width);

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;

        let mut row: u16 = 0;
        for text in header {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row),
                SetAttribute(Attribute::Dim),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?;
            row += 1;
        }
        row += 1;

        for line in lines {
            if row >= height {
                break;
            }
            queue!(self.stdout, cursor::MoveTo(0, row))?;
            if line.focused {
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(pad_to_width(&line.text, width.min(40))),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(self.stdout, Print(&line.text))?;
            }
            row += 1;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
