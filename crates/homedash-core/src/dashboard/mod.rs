//! Dashboard composition: the single owner of all dashboard state.
//!
//! `Dashboard` loads the persisted layout, applies the persisted theme,
//! and exposes one method per UI callback (search, drag and drop, editor
//! operations, theme and cosmetic changes). [`Dashboard::dispatch`] maps an
//! [`Action`] onto those methods for presenters that prefer a single entry
//! point. After any call, [`Dashboard::view`] yields the fresh grouped and
//! filtered snapshot.
//!
//! Validation failures never propagate as errors. They leave state untouched
//! and queue a [`Notice`] for the presenter to show.

mod view;

#[cfg(test)]
mod tests;

pub use view::{CardView, DashboardView, EMPTY_HINT, EMPTY_TITLE, SectionView};

use std::collections::{HashMap, HashSet};

use crate::config::DashboardConfig;
use crate::editor::{EditLock, EditRejection, EditorSession, NewService, Shift};
use crate::error::Result;
use crate::grouping::{effective_categories, filter_services, group_by_category};
use crate::notice::Notice;
use crate::persist;
use crate::reorder::DragTracker;
use crate::service::{Service, ServicePatch};
use crate::settings::{AnimationLevel, CardSize, CosmeticSettings};
use crate::store::Store;
use crate::theme::{StyleSink, Theme, ThemeRegistry, apply_theme};

/// One UI gesture, as delivered by a presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    DragStart { category: String, id: String },
    Drop { category: String, target: String },
    DragEnd { category: String },
    ToggleSection(String),
    /// Header theme picker: applied and persisted immediately.
    SwitchTheme(String),
    Unlock(String),
    /// Lock button while editing; same as `Cancel`.
    Lock,
    Save,
    Cancel,
    AddCategory(String),
    RemoveCategory(String),
    MoveCategory { name: String, shift: Shift },
    SetServiceCategory { id: String, category: String },
    UpdateService { id: String, patch: ServicePatch },
    AddService(NewService),
    RemoveService(String),
    /// Editor theme choice: applied on save.
    ChooseTheme(String),
    SetCardSize(CardSize),
    SetAnimationLevel(AnimationLevel),
    SetOpacity(i64),
    SetGlass(bool),
}

fn rejection_notice(rejection: &EditRejection) -> Notice {
    match rejection {
        EditRejection::WrongPassphrase => Notice::error("Incorrect password", "Please try again"),
        EditRejection::Locked => Notice::error("Layout is locked", "Unlock the editor first"),
        other => Notice::error("Change rejected", other.to_string()),
    }
}

/// Dashboard state container.
pub struct Dashboard<S: Store, V: StyleSink> {
    store: S,
    style: V,
    themes: ThemeRegistry,
    lock: EditLock,
    /// Persisted source of truth.
    services: Vec<Service>,
    /// Persisted custom category order; empty until customized.
    category_order: Vec<String>,
    cosmetics: CosmeticSettings,
    theme_id: String,
    search_term: String,
    session: Option<EditorSession>,
    drags: HashMap<String, DragTracker>,
    collapsed: HashSet<String>,
    notices: Vec<Notice>,
}

impl<S: Store, V: StyleSink> Dashboard<S, V> {
    /// Load state from `store` and apply the persisted theme to `style`.
    pub fn new(
        store: S,
        style: V,
        themes: ThemeRegistry,
        lock: EditLock,
        default_theme: &str,
    ) -> Self {
        let services = persist::load_services(&store);
        let category_order = persist::load_category_order(&store);
        let cosmetics = persist::load_cosmetics(&store);
        let theme_id = persist::load_theme_id(&store, default_theme);
        log::debug!(
            "loaded {} services, {} saved categories, theme '{theme_id}'",
            services.len(),
            category_order.len(),
        );
        let mut dash = Self {
            store,
            style,
            themes,
            lock,
            services,
            category_order,
            cosmetics,
            theme_id,
            search_term: String::new(),
            session: None,
            drags: HashMap::new(),
            collapsed: HashSet::new(),
            notices: Vec::new(),
        };
        dash.apply_current_theme();
        dash
    }

    pub fn from_config(store: S, style: V, config: &DashboardConfig) -> Self {
        Self::new(
            store,
            style,
            config.theme_registry(),
            EditLock::new(config.edit_passphrase.clone()),
            &config.default_theme,
        )
    }

    fn apply_current_theme(&mut self) {
        let applied = apply_theme(&self.themes, &self.theme_id, &mut self.style, &mut self.store);
        self.theme_id = applied.id.clone();
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn style(&self) -> &V {
        &self.style
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Services as currently shown: the session's working copy while
    /// editing, the persisted list otherwise.
    pub fn services(&self) -> &[Service] {
        match &self.session {
            Some(session) => session.services(),
            None => &self.services,
        }
    }

    /// Category order as currently shown.
    pub fn categories(&self) -> Vec<String> {
        match &self.session {
            Some(session) => session.categories().to_vec(),
            None => effective_categories(&self.category_order, &self.services),
        }
    }

    /// Settings in effect (not the unsaved session copy).
    pub fn cosmetics(&self) -> &CosmeticSettings {
        &self.cosmetics
    }

    pub fn theme(&self) -> &Theme {
        self.themes.resolve(&self.theme_id)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // -----------------------------------------------------------------------
    // View
    // -----------------------------------------------------------------------

    /// Grouped, filtered snapshot of the current state.
    pub fn view(&self) -> DashboardView {
        let visible = filter_services(self.services(), &self.search_term);
        let sections = group_by_category(&self.categories(), &visible)
            .into_iter()
            .map(|section| {
                let collapsed = self.collapsed.contains(&section.title);
                let dragging = self
                    .drags
                    .get(&section.title)
                    .and_then(|t| t.dragging())
                    .map(str::to_string);
                SectionView {
                    count: section.services.len(),
                    collapsed,
                    cards: if collapsed {
                        Vec::new()
                    } else {
                        section.services.into_iter().map(CardView::new).collect()
                    },
                    dragging,
                    title: section.title,
                }
            })
            .collect();
        DashboardView {
            sections,
            search_term: self.search_term.clone(),
            total_matches: visible.len(),
            editing: self.is_editing(),
            theme_id: self.theme_id.clone(),
            cosmetics: self.cosmetics,
        }
    }

    // -----------------------------------------------------------------------
    // Header
    // -----------------------------------------------------------------------

    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn toggle_section(&mut self, category: &str) {
        if !self.collapsed.remove(category) {
            self.collapsed.insert(category.to_string());
        }
    }

    /// Apply and persist a theme right away. An open editing session
    /// follows the switch so saving does not revert it.
    pub fn set_theme(&mut self, id: &str) {
        self.theme_id = id.to_string();
        self.apply_current_theme();
        if let Some(session) = self.session.as_mut() {
            session.set_theme(&self.theme_id);
        }
    }

    // -----------------------------------------------------------------------
    // Drag and drop
    // -----------------------------------------------------------------------

    /// Start dragging card `id` in `category`. Refused unless editing;
    /// returns whether the drag started.
    pub fn begin_drag(&mut self, category: &str, id: &str) -> bool {
        let editing = self.is_editing();
        self.drags
            .entry(category.to_string())
            .or_default()
            .start(id, editing)
    }

    /// Drop the dragged card onto `target` in `category`. Returns whether the
    /// order changed.
    ///
    /// Any drop ends every drag in progress. A card dragged from another
    /// section is not moved: reordering is scoped to one category.
    pub fn drop_on(&mut self, category: &str, target: &str) -> bool {
        for (section, tracker) in self.drags.iter_mut() {
            if section != category {
                tracker.end();
            }
        }
        let Some(tracker) = self.drags.get_mut(category) else {
            return false;
        };
        let Some(session) = self.session.as_mut() else {
            tracker.end();
            return false;
        };
        let visible: Vec<Service> = filter_services(session.services(), &self.search_term)
            .into_iter()
            .filter(|s| s.category == category)
            .collect();
        match tracker.drop_on(category, target, &visible) {
            Some(event) => {
                log::debug!("reordered '{}' ({} cards)", event.category, event.services.len());
                session.apply_reorder(&event);
                true
            },
            None => false,
        }
    }

    /// Drag ended without a drop.
    pub fn end_drag(&mut self, category: &str) {
        if let Some(tracker) = self.drags.get_mut(category) {
            tracker.end();
        }
    }

    // -----------------------------------------------------------------------
    // Editing session
    // -----------------------------------------------------------------------

    /// Try to enter an editing session. Returns whether editing is now on.
    pub fn unlock(&mut self, passphrase: &str) -> bool {
        if self.session.is_some() {
            return true;
        }
        if let Err(e) = self.lock.check(passphrase) {
            log::info!("edit mode unlock refused");
            self.notices.push(rejection_notice(&e));
            return false;
        }
        self.session = Some(EditorSession::new(
            self.services.clone(),
            self.categories(),
            self.cosmetics,
            self.theme_id.clone(),
        ));
        log::info!("edit mode enabled");
        self.notices
            .push(Notice::info("Edit mode enabled", "You can now rearrange the layout"));
        true
    }

    /// Persist the session's working copies, apply its theme, and leave
    /// editing. Does nothing outside a session.
    ///
    /// In-memory state is updated even if a write fails; the first write
    /// error is returned after all writes have been attempted.
    pub fn save(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        self.drags.clear();
        let (services, categories, cosmetics, theme_id) = session.into_parts();
        self.services = services;
        self.category_order = categories;
        self.cosmetics = cosmetics;
        self.theme_id = theme_id;

        let results = [
            persist::save_services(&mut self.store, &self.services),
            persist::save_category_order(&mut self.store, &self.category_order),
            persist::save_cosmetics(&mut self.store, &self.cosmetics),
        ];
        self.apply_current_theme();
        let outcome: Result<()> = results.into_iter().collect();
        match &outcome {
            Ok(()) => {
                log::info!("layout saved ({} services)", self.services.len());
                self.notices
                    .push(Notice::info("Layout saved", "Your changes have been stored"));
            },
            Err(e) => {
                log::warn!("layout save incomplete: {e}");
                self.notices.push(Notice::error("Layout not saved", e.to_string()));
            },
        }
        outcome
    }

    /// Discard the session's working copies and leave editing.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            self.drags.clear();
            log::info!("edit mode disabled, changes discarded");
            self.notices
                .push(Notice::info("Edit mode disabled", "The layout is now locked"));
        }
    }

    fn edit<T>(
        &mut self,
        op: impl FnOnce(&mut EditorSession) -> std::result::Result<T, EditRejection>,
    ) -> std::result::Result<T, EditRejection> {
        let result = match self.session.as_mut() {
            Some(session) => op(session),
            None => Err(EditRejection::Locked),
        };
        if let Err(e) = &result {
            log::debug!("edit rejected: {e}");
            self.notices.push(rejection_notice(e));
        }
        result
    }

    pub fn add_category(&mut self, name: &str) -> std::result::Result<(), EditRejection> {
        self.edit(|s| s.add_category(name))
    }

    pub fn remove_category(&mut self, name: &str) -> std::result::Result<(), EditRejection> {
        self.edit(|s| s.remove_category(name))
    }

    pub fn move_category(
        &mut self,
        name: &str,
        shift: Shift,
    ) -> std::result::Result<bool, EditRejection> {
        self.edit(|s| s.move_category(name, shift))
    }

    pub fn set_service_category(
        &mut self,
        id: &str,
        category: &str,
    ) -> std::result::Result<(), EditRejection> {
        self.edit(|s| s.set_service_category(id, category))
    }

    pub fn update_service(
        &mut self,
        id: &str,
        patch: &ServicePatch,
    ) -> std::result::Result<(), EditRejection> {
        self.edit(|s| s.update_service(id, patch))
    }

    pub fn add_service(&mut self, draft: NewService) -> std::result::Result<String, EditRejection> {
        self.edit(|s| s.add_service(draft))
    }

    pub fn remove_service(&mut self, id: &str) -> std::result::Result<Service, EditRejection> {
        self.edit(|s| s.remove_service(id))
    }

    pub fn choose_theme(&mut self, id: &str) -> std::result::Result<(), EditRejection> {
        self.edit(|s| {
            s.set_theme(id);
            Ok(())
        })
    }

    pub fn set_card_size(&mut self, size: CardSize) -> std::result::Result<(), EditRejection> {
        self.edit(|s| {
            s.set_card_size(size);
            Ok(())
        })
    }

    pub fn set_animation_level(
        &mut self,
        level: AnimationLevel,
    ) -> std::result::Result<(), EditRejection> {
        self.edit(|s| {
            s.set_animation_level(level);
            Ok(())
        })
    }

    pub fn set_opacity(&mut self, percent: i64) -> std::result::Result<(), EditRejection> {
        self.edit(|s| {
            s.set_opacity(percent);
            Ok(())
        })
    }

    pub fn set_glass(&mut self, enabled: bool) -> std::result::Result<(), EditRejection> {
        self.edit(|s| {
            s.set_glass(enabled);
            Ok(())
        })
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Run one action. Only persistence during `Save` can fail; rejected
    /// edits surface as notices.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Search(term) => self.search(&term),
            Action::DragStart { category, id } => {
                self.begin_drag(&category, &id);
            },
            Action::Drop { category, target } => {
                self.drop_on(&category, &target);
            },
            Action::DragEnd { category } => self.end_drag(&category),
            Action::ToggleSection(category) => self.toggle_section(&category),
            Action::SwitchTheme(id) => self.set_theme(&id),
            Action::Unlock(passphrase) => {
                self.unlock(&passphrase);
            },
            Action::Lock | Action::Cancel => self.cancel(),
            Action::Save => return self.save(),
            Action::AddCategory(name) => {
                let _ = self.add_category(&name);
            },
            Action::RemoveCategory(name) => {
                let _ = self.remove_category(&name);
            },
            Action::MoveCategory { name, shift } => {
                let _ = self.move_category(&name, shift);
            },
            Action::SetServiceCategory { id, category } => {
                let _ = self.set_service_category(&id, &category);
            },
            Action::UpdateService { id, patch } => {
                let _ = self.update_service(&id, &patch);
            },
            Action::AddService(draft) => {
                let _ = self.add_service(draft);
            },
            Action::RemoveService(id) => {
                let _ = self.remove_service(&id);
            },
            Action::ChooseTheme(id) => {
                let _ = self.choose_theme(&id);
            },
            Action::SetCardSize(size) => {
                let _ = self.set_card_size(size);
            },
            Action::SetAnimationLevel(level) => {
                let _ = self.set_animation_level(level);
            },
            Action::SetOpacity(percent) => {
                let _ = self.set_opacity(percent);
            },
            Action::SetGlass(enabled) => {
                let _ = self.set_glass(enabled);
            },
        }
        Ok(())
    }
}
