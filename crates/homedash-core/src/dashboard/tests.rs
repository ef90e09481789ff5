use super::*;
use crate::catalog::seed_services;
use crate::error::DashError;
use crate::notice::NoticeLevel;
use crate::store::{MemoryStore, Store, keys};
use crate::theme::StyleSheet;

const PASS: &str = "momopc";

fn dashboard() -> Dashboard<MemoryStore, StyleSheet> {
    Dashboard::from_config(MemoryStore::new(), StyleSheet::new(), &DashboardConfig::default())
}

fn editing() -> Dashboard<MemoryStore, StyleSheet> {
    let mut d = dashboard();
    assert!(d.unlock(PASS));
    d.take_notices();
    d
}

/// Memory store that refuses writes to one key.
struct RefusingStore {
    inner: MemoryStore,
    refused: &'static str,
}

impl Store for RefusingStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key == self.refused {
            return Err(DashError::Store(format!("{key}: quota exceeded")));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.inner.remove(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.inner.keys()
    }
}

fn ids(section: &SectionView) -> Vec<&str> {
    section.cards.iter().map(|c| c.service.id.as_str()).collect()
}

// -- startup ----------------------------------------------------------------

#[test]
fn first_run_shows_seed_catalog_grouped() {
    let d = dashboard();
    let view = d.view();
    assert_eq!(view.total_matches, seed_services().len());
    let titles: Vec<&str> = view.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        ["Productivity", "Personal", "Infrastructure", "Security", "Storage", "Media"]
    );
    assert_eq!(ids(view.section("Infrastructure").unwrap()), ["3", "5", "9"]);
    assert!(!view.editing);
}

#[test]
fn startup_applies_persisted_theme() {
    let mut store = MemoryStore::new();
    store.set(keys::THEME, "\"ocean\"").unwrap();
    let d = Dashboard::from_config(store, StyleSheet::new(), &DashboardConfig::default());
    assert_eq!(d.theme().id, "ocean");
    assert_eq!(d.style().theme_class(), Some("ocean"));
    assert!(d.style().var("--primary").is_some());
}

#[test]
fn unknown_persisted_theme_falls_back_to_default() {
    let mut store = MemoryStore::new();
    store.set(keys::THEME, "\"neon\"").unwrap();
    let d = Dashboard::from_config(store, StyleSheet::new(), &DashboardConfig::default());
    assert_eq!(d.view().theme_id, "default");
    assert_eq!(d.store().get(keys::THEME).unwrap().as_deref(), Some("\"default\""));
}

// -- search -----------------------------------------------------------------

#[test]
fn search_filters_and_drops_empty_sections() {
    let mut d = dashboard();
    d.search("DATA");
    let view = d.view();
    assert_eq!(view.total_matches, 1);
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].cards[0].service.name, "Database");
}

#[test]
fn search_with_no_match_is_empty_view() {
    let mut d = dashboard();
    d.search("zzz");
    let view = d.view();
    assert!(view.is_empty());
    assert!(view.sections.is_empty());
    assert_eq!(view.search_term, "zzz");
}

// -- gate -------------------------------------------------------------------

#[test]
fn wrong_passphrase_keeps_layout_locked() {
    let mut d = dashboard();
    assert!(!d.unlock("letmein"));
    assert!(!d.is_editing());
    let notices = d.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].title, "Incorrect password");
}

#[test]
fn unlock_and_lock_emit_notices() {
    let mut d = dashboard();
    assert!(d.unlock(PASS));
    d.dispatch(Action::Lock).unwrap();
    let titles: Vec<String> = d.take_notices().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Edit mode enabled", "Edit mode disabled"]);
    assert!(d.take_notices().is_empty());
}

#[test]
fn edits_outside_a_session_are_rejected() {
    let mut d = dashboard();
    assert_eq!(d.add_category("Dev"), Err(EditRejection::Locked));
    assert!(d.take_notices()[0].is_error());
    assert!(!d.categories().contains(&"Dev".to_string()));
}

// -- drag and drop ----------------------------------------------------------

#[test]
fn drag_requires_editing() {
    let mut d = dashboard();
    assert!(!d.begin_drag("Infrastructure", "9"));
    assert!(!d.drop_on("Infrastructure", "3"));
    assert_eq!(ids(d.view().section("Infrastructure").unwrap()), ["3", "5", "9"]);
}

#[test]
fn drop_reorders_within_category_only() {
    let mut d = editing();
    assert!(d.begin_drag("Infrastructure", "9"));
    assert_eq!(
        d.view().section("Infrastructure").unwrap().dragging.as_deref(),
        Some("9")
    );
    assert!(d.drop_on("Infrastructure", "3"));
    let view = d.view();
    let infra = view.section("Infrastructure").unwrap();
    assert_eq!(ids(infra), ["9", "3", "5"]);
    assert_eq!(infra.dragging, None);
    assert_eq!(ids(view.section("Personal").unwrap()), ["2", "4"]);
}

#[test]
fn drop_in_another_section_releases_the_dragged_card() {
    let mut d = editing();
    assert!(d.begin_drag("Infrastructure", "9"));
    assert!(!d.drop_on("Personal", "2"));
    let view = d.view();
    assert_eq!(view.section("Infrastructure").unwrap().dragging, None);
    assert_eq!(ids(view.section("Infrastructure").unwrap()), ["3", "5", "9"]);
    assert_eq!(ids(view.section("Personal").unwrap()), ["2", "4"]);
}

#[test]
fn drop_on_self_is_a_no_op() {
    let mut d = editing();
    d.begin_drag("Infrastructure", "5");
    assert!(!d.drop_on("Infrastructure", "5"));
    assert_eq!(ids(d.view().section("Infrastructure").unwrap()), ["3", "5", "9"]);
}

#[test]
fn drag_end_returns_to_idle() {
    let mut d = editing();
    d.begin_drag("Personal", "2");
    d.end_drag("Personal");
    assert_eq!(d.view().section("Personal").unwrap().dragging, None);
    assert!(!d.drop_on("Personal", "4"));
}

#[test]
fn drop_respects_search_filter() {
    let mut d = editing();
    d.search("a");
    d.begin_drag("Infrastructure", "5");
    assert!(d.drop_on("Infrastructure", "3"));
    d.search("");
    assert_eq!(ids(d.view().section("Infrastructure").unwrap()), ["5", "3", "9"]);
}

// -- session ----------------------------------------------------------------

#[test]
fn cancel_discards_working_copy() {
    let mut d = editing();
    d.add_category("Dev").unwrap();
    d.set_opacity(40).unwrap();
    d.begin_drag("Personal", "4");
    d.drop_on("Personal", "2");
    d.cancel();
    assert!(!d.categories().contains(&"Dev".to_string()));
    assert_eq!(d.cosmetics().opacity.percent(), 100);
    assert_eq!(d.services(), seed_services().as_slice());
    assert!(d.store().get(keys::SERVICES_LAYOUT).unwrap().is_none());
}

#[test]
fn save_persists_session_and_applies_theme() {
    let mut d = editing();
    d.add_category("Dev").unwrap();
    d.set_service_category("9", "Dev").unwrap();
    d.choose_theme("forest").unwrap();
    d.set_glass(true).unwrap();
    assert_eq!(d.style().theme_class(), Some("default"));
    d.save().unwrap();

    assert!(!d.is_editing());
    assert_eq!(d.style().theme_class(), Some("forest"));
    assert!(d.cosmetics().glass);
    assert_eq!(ids(d.view().section("Dev").unwrap()), ["9"]);
    let saved = persist::load_category_order(d.store());
    assert_eq!(saved.last().map(String::as_str), Some("Dev"));
    assert_eq!(d.take_notices()[0].title, "Layout saved");
}

#[test]
fn failed_save_reports_error_and_still_writes_other_keys() {
    let store = RefusingStore {
        inner: MemoryStore::new(),
        refused: keys::CARD_SIZE,
    };
    let mut d = Dashboard::from_config(store, StyleSheet::new(), &DashboardConfig::default());
    assert!(d.unlock(PASS));
    d.take_notices();
    d.set_glass(true).unwrap();
    d.set_opacity(50).unwrap();

    let err = d.save().unwrap_err();
    assert!(matches!(err, DashError::Store(_)));
    assert!(!d.is_editing());

    let notices = d.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    assert_eq!(notices[0].title, "Layout not saved");
    assert!(notices[0].description.contains("quota exceeded"));

    assert_eq!(d.store().get(keys::GLASS_EFFECT).unwrap().as_deref(), Some("true"));
    assert_eq!(d.store().get(keys::CARD_OPACITY).unwrap().as_deref(), Some("50"));
    assert!(d.store().get(keys::SERVICES_LAYOUT).unwrap().is_some());
}

#[test]
fn remove_category_in_use_produces_notice() {
    let mut d = editing();
    let err = d.remove_category("Media").unwrap_err();
    assert!(matches!(err, EditRejection::CategoryInUse { count: 1, .. }));
    let notices = d.take_notices();
    assert!(notices[0].is_error());
    assert!(notices[0].description.contains("Media"));
}

#[test]
fn add_and_remove_service_in_session() {
    let mut d = editing();
    let id = d
        .add_service(NewService {
            name: "Grafana".into(),
            url: "https://grafana.example.com".into(),
            category: "Infrastructure".into(),
            icon: "monitor".into(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(id, "10");
    assert_eq!(d.view().section("Infrastructure").unwrap().count, 4);
    d.remove_service("8").unwrap();
    assert!(d.view().section("Media").is_none());
    d.remove_category("Media").unwrap();
}

#[test]
fn header_theme_switch_is_immediate_and_survives_save() {
    let mut d = editing();
    d.dispatch(Action::SwitchTheme("mint".into())).unwrap();
    assert_eq!(d.style().theme_class(), Some("mint"));
    assert_eq!(d.store().get(keys::THEME).unwrap().as_deref(), Some("\"mint\""));
    d.save().unwrap();
    assert_eq!(d.theme().id, "mint");
}

// -- sections ---------------------------------------------------------------

#[test]
fn collapsed_section_keeps_count_and_hides_cards() {
    let mut d = dashboard();
    d.toggle_section("Infrastructure");
    let view = d.view();
    let infra = view.section("Infrastructure").unwrap();
    assert!(infra.collapsed);
    assert_eq!(infra.count, 3);
    assert!(infra.cards.is_empty());
    d.toggle_section("Infrastructure");
    assert_eq!(d.view().section("Infrastructure").unwrap().cards.len(), 3);
}

#[test]
fn dispatch_routes_editor_actions() {
    let mut d = dashboard();
    d.dispatch(Action::Unlock(PASS.into())).unwrap();
    d.dispatch(Action::AddCategory("Dev".into())).unwrap();
    d.dispatch(Action::MoveCategory {
        name: "Dev".into(),
        shift: Shift::Up,
    })
    .unwrap();
    d.dispatch(Action::SetCardSize(CardSize::Compact)).unwrap();
    d.dispatch(Action::AddCategory("Dev".into())).unwrap();
    d.dispatch(Action::Save).unwrap();

    let cats = d.categories();
    assert_eq!(cats[cats.len() - 2], "Dev");
    assert_eq!(d.cosmetics().card_size, CardSize::Compact);
    let errors = d.take_notices().into_iter().filter(Notice::is_error).count();
    assert_eq!(errors, 1);
}
