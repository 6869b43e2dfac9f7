//! Results panel state machine and its render view-model.
//!
//! The panel cycles Idle → (pending edit) → Searching → Populated / Empty /
//! Errored and back to Idle when the query shrinks below the minimum or the
//! user closes it. "Pending" is not a panel state: while the debounce timer
//! is armed the panel deliberately keeps showing whatever it showed before.
//!
//! Rendering is a pure mapping from [`PanelState`] to [`PanelView`]; nothing
//! here touches the terminal, which keeps the cycle testable end to end.

use crate::search::SearchHit;

pub const SEARCHING_NOTICE: &str = "Searching...";
pub const NO_RESULTS_NOTICE: &str = "No results found";
pub const ERROR_NOTICE: &str = "Error searching.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Hidden and empty; the query is below the minimum length.
    #[default]
    Idle,
    /// A dispatch is in flight for the current generation.
    Searching,
    Populated(Vec<SearchHit>),
    Empty,
    Errored,
}

/// Render instructions for the panel, decoupled from any widget library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<'a> {
    Hidden,
    /// A sentinel line; `spinner` marks the in-progress notice.
    Notice { text: &'static str, spinner: bool },
    Hits(&'a [SearchHit]),
}

impl PanelState {
    pub fn view(&self) -> PanelView<'_> {
        match self {
            PanelState::Idle => PanelView::Hidden,
            PanelState::Searching => PanelView::Notice {
                text: SEARCHING_NOTICE,
                spinner: true,
            },
            PanelState::Populated(hits) => PanelView::Hits(hits),
            PanelState::Empty => PanelView::Notice {
                text: NO_RESULTS_NOTICE,
                spinner: false,
            },
            PanelState::Errored => PanelView::Notice {
                text: ERROR_NOTICE,
                spinner: false,
            },
        }
    }

    pub fn hits(&self) -> &[SearchHit] {
        match self {
            PanelState::Populated(hits) => hits,
            _ => &[],
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits().len()
    }

    /// Whether the panel currently occupies screen space.
    pub fn is_visible(&self) -> bool {
        !matches!(self, PanelState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(label: &str) -> SearchHit {
        SearchHit {
            label: label.to_string(),
            category: "Paper",
            url: "/resources/?id=1".to_string(),
        }
    }

    #[test]
    fn idle_panel_is_hidden() {
        assert_eq!(PanelState::Idle.view(), PanelView::Hidden);
        assert!(!PanelState::Idle.is_visible());
    }

    #[test]
    fn sentinel_states_map_to_their_notices() {
        assert_eq!(
            PanelState::Searching.view(),
            PanelView::Notice {
                text: SEARCHING_NOTICE,
                spinner: true
            }
        );
        assert_eq!(
            PanelState::Empty.view(),
            PanelView::Notice {
                text: NO_RESULTS_NOTICE,
                spinner: false
            }
        );
        assert_eq!(
            PanelState::Errored.view(),
            PanelView::Notice {
                text: ERROR_NOTICE,
                spinner: false
            }
        );
    }

    #[test]
    fn populated_panel_exposes_its_hits() {
        let state = PanelState::Populated(vec![hit("Smith et al.")]);
        assert_eq!(state.hit_count(), 1);
        match state.view() {
            PanelView::Hits(hits) => assert_eq!(hits[0].label, "Smith et al."),
            other => panic!("unexpected view: {other:?}"),
        }
    }
}
