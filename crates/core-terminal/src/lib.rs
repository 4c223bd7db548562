//! Raw mode, alternate screen and size queries over crossterm.
//!
//! The editor owns the terminal for its whole run through a `RawScreen`
//! guard. Dropping the guard (normal exit, `?` propagation or unwinding)
//! clears the alternate screen, shows the cursor and restores cooked mode.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
        disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

/// Terminal operations the editor needs outside of frame drawing.
pub trait TerminalBackend {
    fn enter_raw(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Current size as (cols, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

/// The controlling terminal on stdout.
#[derive(Debug, Default)]
pub struct StdoutTerminal {
    raw: bool,
}

impl StdoutTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Switch to raw mode and hand ownership to a guard that undoes it.
    pub fn into_raw_screen(mut self) -> Result<RawScreen<Self>> {
        self.enter_raw()?;
        Ok(RawScreen {
            terminal: Some(self),
        })
    }
}

impl TerminalBackend for StdoutTerminal {
    fn enter_raw(&mut self) -> Result<()> {
        if self.raw {
            return Ok(());
        }
        enable_raw_mode().context("enabling raw mode")?;
        execute!(stdout(), EnterAlternateScreen).context("entering alternate screen")?;
        self.raw = true;
        tracing::debug!(target: "terminal", "raw_mode_on");
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        execute!(stdout(), Clear(ClearType::All), LeaveAlternateScreen, Show)
            .context("leaving alternate screen")?;
        disable_raw_mode().context("disabling raw mode")?;
        tracing::debug!(target: "terminal", "raw_mode_off");
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title)).context("setting window title")
    }

    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("querying terminal size")
    }
}

/// Owns a terminal in raw mode until released or dropped.
pub struct RawScreen<T: TerminalBackend> {
    terminal: Option<T>,
}

impl<T: TerminalBackend> RawScreen<T> {
    /// Restore now and surface the error instead of discarding it in `Drop`.
    pub fn release(mut self) -> Result<()> {
        match self.terminal.take() {
            Some(mut terminal) => terminal.restore(),
            None => Ok(()),
        }
    }
}

impl<T: TerminalBackend> Drop for RawScreen<T> {
    fn drop(&mut self) {
        if let Some(terminal) = self.terminal.as_mut() {
            let _ = terminal.restore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl TerminalBackend for Recorder {
        fn enter_raw(&mut self) -> Result<()> {
            self.calls.borrow_mut().push("enter");
            Ok(())
        }
        fn restore(&mut self) -> Result<()> {
            self.calls.borrow_mut().push("restore");
            Ok(())
        }
        fn set_title(&mut self, _title: &str) -> Result<()> {
            Ok(())
        }
        fn size(&self) -> Result<(u16, u16)> {
            Ok((80, 24))
        }
    }

    #[test]
    fn drop_restores_once() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        {
            let _screen = RawScreen {
                terminal: Some(Recorder {
                    calls: calls.clone(),
                }),
            };
        }
        assert_eq!(*calls.borrow(), vec!["restore"]);
    }

    #[test]
    fn release_skips_drop_restore() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let screen = RawScreen {
            terminal: Some(Recorder {
                calls: calls.clone(),
            }),
        };
        screen.release().unwrap();
        assert_eq!(*calls.borrow(), vec!["restore"]);
    }

    #[test]
    fn fresh_terminal_is_cooked() {
        assert!(!StdoutTerminal::new().is_raw());
    }
}
