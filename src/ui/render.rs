//! Drawing the session: an input box on top, the results panel below.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use throbber_widgets_tui::Throbber;

use crate::ui::components::hit_line;
use crate::ui::panel::PanelView;

use super::state::App;

const DEFAULT_INPUT_TITLE: &str = "Search";

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        self.draw_input(frame, layout[0]);
        self.draw_panel(frame, layout[1]);
    }

    fn draw_input(&mut self, frame: &mut Frame, area: Rect) {
        let title = self
            .input_title
            .clone()
            .unwrap_or_else(|| DEFAULT_INPUT_TITLE.to_string());
        self.input
            .set_block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(self.input.textarea(), area);
    }

    fn draw_panel(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        // The panel is replaced wholesale every frame; no incremental diffing.
        frame.render_widget(Clear, area);

        match self.panel.view() {
            PanelView::Hidden => {
                let hint = format!(
                    "Type at least {} characters to search",
                    self.tuning.min_query_len
                );
                let paragraph = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
                frame.render_widget(paragraph, area);
            }
            PanelView::Notice { text, spinner } if spinner => {
                let throbber = Throbber::default()
                    .label(text)
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_stateful_widget(throbber, area, &mut self.throbber_state);
            }
            PanelView::Notice { text, .. } => {
                let paragraph = Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(paragraph, area);
            }
            PanelView::Hits(hits) => {
                let items: Vec<ListItem> = hits
                    .iter()
                    .map(|hit| ListItem::new(hit_line(hit, area.width)))
                    .collect();
                let list = List::new(items)
                    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
                frame.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }
}
