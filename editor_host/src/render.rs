//! Editor rendering and output

use buffer_core::EditSession;

/// Editor view for rendering
///
/// Provides a simple text-based representation of the editor state
/// suitable for display in a console or test output. Display text is
/// pulled from the buffer one line at a time; the full document is never
/// materialized for rendering.
pub struct EditorView {
    /// Number of lines to show in viewport
    viewport_lines: usize,
    /// Display clamp for a single rendered line
    max_line_chars: usize,
}

impl EditorView {
    pub fn new(viewport_lines: usize, max_line_chars: usize) -> Self {
        Self {
            viewport_lines,
            max_line_chars,
        }
    }

    /// Render the session to a string
    pub fn render(&self, session: &EditSession, label: Option<&str>, message: &str) -> String {
        let mut output = String::new();
        let buffer = session.buffer();
        let location = session.location();

        let mut offset = 0;
        let mut exhausted = false;
        for row in 0..self.viewport_lines {
            if exhausted {
                output.push('~');
                output.push('\n');
                continue;
            }

            let (bytes, end) = buffer.next_line(offset, self.max_line_chars);
            // An over-long line is clamped for display; skip to its real end
            let (_, line_end) = buffer.next_line(end, usize::MAX);
            let line = String::from_utf8_lossy(&bytes);

            if row + 1 == location.line {
                output.push_str(&self.render_line_with_cursor(&line, location.col));
            } else {
                output.push_str(&line);
            }
            output.push('\n');

            if line_end >= buffer.capacity() {
                exhausted = true;
            } else {
                offset = line_end + 1;
            }
        }

        output.push_str(&self.render_status_line(session, label, message));
        output
    }

    fn render_line_with_cursor(&self, line: &str, col: usize) -> String {
        let mut result = String::new();
        for (i, ch) in line.chars().enumerate() {
            if i == col {
                result.push('[');
                result.push(ch);
                result.push(']');
            } else {
                result.push(ch);
            }
        }
        // Cursor at end of line
        if col == line.chars().count() {
            result.push_str("[ ]");
        }
        result
    }

    fn render_status_line(&self, session: &EditSession, label: Option<&str>, message: &str) -> String {
        let location = session.location();
        let mut status = format!("({},{})", location.line, location.col);

        // Document label with dirty indicator
        if let Some(label) = label {
            status.push(' ');
            status.push_str(label);
            if session.dirty() {
                status.push('*');
            }
        } else if session.dirty() {
            status.push_str(" [No Name]*");
        }

        if !message.is_empty() {
            status.push_str(" | ");
            status.push_str(message);
        }

        status
    }

    /// Render just the status line
    pub fn render_status(&self, session: &EditSession, label: Option<&str>, message: &str) -> String {
        self.render_status_line(session, label, message)
    }
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new(20, 256)
    }
}
