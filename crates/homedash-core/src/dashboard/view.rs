//! Render-ready snapshot of the dashboard.

use crate::icons::{self, Icon};
use crate::service::Service;
use crate::settings::CosmeticSettings;

/// Heading shown when a search matches nothing.
pub const EMPTY_TITLE: &str = "No services found";
/// Hint shown under [`EMPTY_TITLE`].
pub const EMPTY_HINT: &str = "Try adjusting your search or add a new service.";

/// One card, with its icon already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub service: Service,
    pub icon: Icon,
}

impl CardView {
    pub(super) fn new(service: Service) -> Self {
        let icon = icons::resolve(&service.icon);
        Self { service, icon }
    }
}

/// One category section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    /// Number of visible services in the section, collapsed or not.
    pub count: usize,
    pub collapsed: bool,
    /// Cards in display order; empty while collapsed.
    pub cards: Vec<CardView>,
    /// Id of the card currently being dragged in this section.
    pub dragging: Option<String>,
}

/// Everything a presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub sections: Vec<SectionView>,
    pub search_term: String,
    /// Services matching the search across all sections.
    pub total_matches: usize,
    pub editing: bool,
    pub theme_id: String,
    pub cosmetics: CosmeticSettings,
}

impl DashboardView {
    /// True when the search matched nothing (render [`EMPTY_TITLE`]).
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    pub fn section(&self, title: &str) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.title == title)
    }
}
