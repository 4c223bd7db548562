//! Frame writer: an ordered command list turned into one byte buffer.
//!
//! Design invariants:
//! * Commands preserve ordering; nothing reaches the terminal mid-frame.
//! * A frame is serialized into a single `Vec<u8>` and handed to the output
//!   with one `write_all` followed by one `flush`.
//! * Adjacent `Print` commands are merged so the command list stays short.
//! * The writer is a short-lived object per frame.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    /// 0-based (column, row).
    MoveTo(u16, u16),
    ClearToEol,
    Print(String),
    Fg(Color),
    ResetColor,
    Reverse,
    /// Clears every attribute, colors included.
    ResetAttributes,
    NewLine,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn push(&mut self, cmd: Command) {
        self.cmds.push(cmd);
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn print<S: AsRef<str>>(&mut self, s: S) {
        let s = s.as_ref();
        if s.is_empty() {
            return;
        }
        if let Some(Command::Print(last)) = self.cmds.last_mut() {
            last.push_str(s);
        } else {
            self.cmds.push(Command::Print(s.to_owned()));
        }
    }

    pub fn print_char(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        self.print(c.encode_utf8(&mut tmp));
    }

    /// Serialize all commands into escape sequences.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::with_capacity(self.cmds.len() * 8);
        for c in &self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(*x, *y))?,
                Command::ClearToEol => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Fg(color) => queue!(out, SetForegroundColor(*color))?,
                Command::ResetColor => queue!(out, ResetColor)?,
                Command::Reverse => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::ResetAttributes => queue!(out, SetAttribute(Attribute::Reset))?,
                Command::NewLine => queue!(out, Print("\r\n"))?,
            }
        }
        Ok(out)
    }

    /// Write the whole frame with a single `write_all`. Returns bytes written.
    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<usize> {
        let bytes = self.to_bytes()?;
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(bytes.len())
    }
}
