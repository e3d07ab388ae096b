//! In-memory canvas that records every call.

use paperbox_core::{Rect, Result};

use crate::canvas::{Canvas, DashPattern};

/// A single recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCommand {
    /// `draw_rectangle`
    Rectangle(Rect),
    /// `set_dash_pattern`
    Dash(Option<DashPattern>),
}

/// Canvas that keeps the calls it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }
}

impl Canvas for RecordingCanvas {
    type Output = Vec<CanvasCommand>;

    fn draw_rectangle(&mut self, rect: &Rect) {
        self.commands.push(CanvasCommand::Rectangle(*rect));
    }

    fn set_dash_pattern(&mut self, pattern: Option<DashPattern>) {
        self.commands.push(CanvasCommand::Dash(pattern));
    }

    fn finalize(self) -> Result<Self::Output> {
        Ok(self.commands)
    }
}
