//! Plain-text presenter for a [`DashboardView`].

use std::fmt::Write;

use homedash_core::dashboard::{DashboardView, EMPTY_HINT, EMPTY_TITLE, SectionView};
use homedash_core::notice::Notice;
use homedash_core::settings::{AnimationLevel, CardSize};

/// Render the whole view: a status line, then one block per section.
pub fn render_view(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "theme: {}  size: {}  animation: {}  opacity: {}%{}{}",
        view.theme_id,
        view.cosmetics.card_size.label(),
        view.cosmetics.animation_level.label(),
        view.cosmetics.opacity.percent(),
        if view.cosmetics.glass { "  glass" } else { "" },
        if view.editing { "  [editing]" } else { "" },
    );
    if !view.search_term.is_empty() {
        let _ = writeln!(
            out,
            "search: \"{}\" ({} match{})",
            view.search_term,
            view.total_matches,
            if view.total_matches == 1 { "" } else { "es" },
        );
    }
    if view.editing {
        render_options(&mut out, view);
    }

    if view.is_empty() {
        let _ = writeln!(out, "\n{EMPTY_TITLE}\n{EMPTY_HINT}");
        return out;
    }
    for section in &view.sections {
        out.push('\n');
        render_section(&mut out, section);
    }
    out
}

fn render_section(out: &mut String, section: &SectionView) {
    let marker = if section.collapsed { '+' } else { '-' };
    let _ = writeln!(out, "{marker} {} ({})", section.title, section.count);
    for card in &section.cards {
        let drag = if section.dragging.as_deref() == Some(card.service.id.as_str()) {
            " *"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "    {} {:<18} {}{drag}",
            card.icon.glyph(),
            card.service.name,
            card.service.url,
        );
        if !card.service.description.is_empty() {
            let _ = writeln!(out, "       {}", card.service.description);
        }
    }
}

/// Editor option rows with the current choice bracketed.
fn render_options(out: &mut String, view: &DashboardView) {
    let sizes: Vec<String> = CardSize::ALL
        .iter()
        .map(|s| bracket(s.label(), *s == view.cosmetics.card_size))
        .collect();
    let levels: Vec<String> = AnimationLevel::ALL
        .iter()
        .map(|l| bracket(l.label(), *l == view.cosmetics.animation_level))
        .collect();
    let _ = writeln!(out, "card size: {}", sizes.join(" "));
    let _ = writeln!(out, "animation: {}", levels.join(" "));
}

fn bracket(label: &str, selected: bool) -> String {
    if selected {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

pub fn render_notices(notices: &[Notice]) -> String {
    notices
        .iter()
        .map(|n| {
            let tag = if n.is_error() { "!" } else { "i" };
            format!("[{tag}] {n}\n")
        })
        .collect()
}
