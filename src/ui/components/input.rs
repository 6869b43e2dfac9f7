//! Single-line query input built on `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::TextArea;

/// The search box. Wraps a text area constrained to one line; Enter and
/// navigation keys are left to the application's key handling.
pub struct QueryInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
    pub fn new(initial: Option<&str>) -> Self {
        let mut textarea = match initial {
            Some(text) => TextArea::new(vec![text.to_string()]),
            None => TextArea::default(),
        };
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(tui_textarea::CursorMove::End);
        Self { textarea }
    }

    /// Current query text.
    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Feed a key into the text area. Returns whether the text changed.
    ///
    /// Enter is rejected here so the query can never grow a second line; the
    /// caller treats it as an accept action instead.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            return false;
        }
        self.textarea.input(key)
    }

    /// Widget to render; `&TextArea` implements [`ratatui::widgets::Widget`].
    pub fn textarea(&self) -> &TextArea<'a> {
        &self.textarea
    }

    pub fn set_block(&mut self, block: ratatui::widgets::Block<'a>) {
        self.textarea.set_block(block);
    }

    #[cfg(test)]
    pub(crate) fn push_char(&mut self, ch: char) {
        self.textarea.insert_char(ch);
    }

    #[cfg(test)]
    pub(crate) fn pop_char(&mut self) {
        self.textarea.delete_char();
    }
}
