//! Row construction for the results panel.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::search::SearchHit;

const ELLIPSIS: &str = "…";

/// Shorten `text` so its display width fits `max_width` columns, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

/// One rendered result row: label on the left, source tag on the right.
pub fn hit_line(hit: &SearchHit, width: u16) -> Line<'static> {
    let width = width as usize;
    let tag = format!("[{}]", hit.category);
    // Keep at least the tag and one column of gap visible.
    let label_budget = width.saturating_sub(tag.width() + 1);
    let label = truncate_to_width(&hit.label, label_budget);
    let gap = width.saturating_sub(label.width() + tag.width()).max(1);

    Line::from(vec![
        Span::raw(label),
        Span::raw(" ".repeat(gap)),
        Span::styled(
            tag,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(label: &str, category: &'static str) -> SearchHit {
        SearchHit {
            label: label.to_string(),
            category,
            url: "/".to_string(),
        }
    }

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(truncate_to_width("reef", 10), "reef");
    }

    #[test]
    fn long_labels_are_cut_with_an_ellipsis() {
        let truncated = truncate_to_width("a very long paper title", 10);
        assert!(truncated.ends_with(ELLIPSIS));
        assert!(truncated.width() <= 10);
    }

    #[test]
    fn rows_keep_the_category_tag_visible() {
        let line = hit_line(&hit("an extremely long label that will not fit", "Paper"), 30);
        let rendered: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
        assert!(rendered.ends_with("[Paper]"));
        assert!(line.width() <= 30);
    }
}
