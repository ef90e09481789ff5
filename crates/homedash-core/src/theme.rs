//! Theme registry: named colour schemes applied as CSS custom properties.
//!
//! A theme is four colour values. Applying one writes them to a
//! [`StyleSink`] (the document root in a browser, a [`StyleSheet`] anywhere
//! else), sets the root theme class, and persists the theme id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{Store, StoreExt, keys};

/// Custom property names written by [`apply_theme`], in write order.
pub const STYLE_VARS: [&str; 4] = ["--background", "--primary", "--secondary", "--accent"];

/// Colour scheme for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Stable key persisted in the store (e.g. `"blue"`).
    pub id: String,
    /// Display name for theme pickers.
    pub name: String,
    /// Page background.
    pub background: String,
    /// Primary accent (active elements, highlights).
    pub primary: String,
    /// Card and control surfaces.
    pub secondary: String,
    pub accent: String,
}

impl Theme {
    fn builtin(
        id: &str,
        name: &str,
        background: &str,
        primary: &str,
        secondary: &str,
        accent: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            background: background.into(),
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }

    /// `(property, value)` pairs in [`STYLE_VARS`] order.
    pub fn style_vars(&self) -> [(&'static str, &str); 4] {
        [
            (STYLE_VARS[0], self.background.as_str()),
            (STYLE_VARS[1], self.primary.as_str()),
            (STYLE_VARS[2], self.secondary.as_str()),
            (STYLE_VARS[3], self.accent.as_str()),
        ]
    }
}

/// Ordered set of themes. The first entry is the fallback.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

#[derive(Deserialize)]
struct ThemeFile {
    #[serde(default)]
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// The ten built-in themes, `default` first.
    pub fn builtin() -> Self {
        let themes = vec![
            Theme::builtin(
                "default",
                "Default",
                "hsl(240 10% 3.9%)",
                "hsl(0 0% 98%)",
                "hsl(240 3.7% 15.9%)",
                "hsl(240 3.7% 15.9%)",
            ),
            Theme::builtin(
                "blue",
                "Blue",
                "hsl(214, 32%, 8%)",
                "hsl(214, 84%, 60%)",
                "hsl(214, 32%, 18%)",
                "hsl(214, 84%, 60%)",
            ),
            Theme::builtin(
                "purple",
                "Purple",
                "hsl(260, 32%, 8%)",
                "hsl(260, 84%, 60%)",
                "hsl(260, 32%, 18%)",
                "hsl(260, 84%, 60%)",
            ),
            Theme::builtin(
                "green",
                "Green",
                "hsl(160, 32%, 8%)",
                "hsl(160, 84%, 40%)",
                "hsl(160, 32%, 18%)",
                "hsl(160, 84%, 40%)",
            ),
            Theme::builtin(
                "amber",
                "Amber",
                "hsl(32, 32%, 8%)",
                "hsl(32, 84%, 50%)",
                "hsl(32, 32%, 18%)",
                "hsl(32, 84%, 50%)",
            ),
            Theme::builtin(
                "ocean",
                "Ocean",
                "hsl(200, 40%, 8%)",
                "hsl(195, 85%, 55%)",
                "hsl(200, 35%, 18%)",
                "hsl(180, 70%, 45%)",
            ),
            Theme::builtin(
                "forest",
                "Forest",
                "hsl(140, 30%, 7%)",
                "hsl(130, 60%, 40%)",
                "hsl(140, 25%, 17%)",
                "hsl(90, 50%, 45%)",
            ),
            Theme::builtin(
                "sunset",
                "Sunset",
                "hsl(15, 35%, 8%)",
                "hsl(15, 90%, 58%)",
                "hsl(15, 30%, 18%)",
                "hsl(340, 80%, 60%)",
            ),
            Theme::builtin(
                "lavender",
                "Lavender",
                "hsl(270, 25%, 10%)",
                "hsl(270, 70%, 75%)",
                "hsl(270, 20%, 20%)",
                "hsl(300, 50%, 70%)",
            ),
            Theme::builtin(
                "mint",
                "Mint",
                "hsl(165, 25%, 8%)",
                "hsl(160, 65%, 65%)",
                "hsl(165, 20%, 18%)",
                "hsl(170, 55%, 55%)",
            ),
        ];
        Self { themes }
    }

    /// Built-ins extended by `[[themes]]` tables from a TOML document.
    pub fn from_toml(src: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(src)?;
        Ok(Self::builtin().with_themes(file.themes))
    }

    /// Add themes; an entry whose id already exists replaces it in place.
    pub fn with_themes(mut self, extra: impl IntoIterator<Item = Theme>) -> Self {
        for theme in extra {
            match self.themes.iter_mut().find(|t| t.id == theme.id) {
                Some(slot) => *slot = theme,
                None => self.themes.push(theme),
            }
        }
        self
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Look up `id`, falling back to the first registered theme.
    pub fn resolve(&self, id: &str) -> &Theme {
        match self.get(id) {
            Some(theme) => theme,
            None => {
                let fallback = &self.themes[0];
                log::warn!("theme '{id}' not found -- falling back to {}", fallback.id);
                fallback
            },
        }
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Destination for global style variables.
pub trait StyleSink {
    /// Set one custom property on the root element.
    fn set_property(&mut self, name: &str, value: &str);

    /// Make `class` the one active theme class on the root element.
    fn set_theme_class(&mut self, class: &str);
}

/// In-memory [`StyleSink`] that can render itself as a `:root` CSS block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    vars: BTreeMap<String, String>,
    theme_class: Option<String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn theme_class(&self) -> Option<&str> {
        self.theme_class.as_deref()
    }

    /// Render as CSS.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl StyleSink for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    fn set_theme_class(&mut self, class: &str) {
        self.theme_class = Some(class.to_string());
    }
}

/// Apply the theme `id` (or the fallback) to `sink` and persist its id.
///
/// Never fails: a persistence error is logged and the styles are still
/// applied. Returns the theme that was actually applied.
pub fn apply_theme<'r, S, V>(
    registry: &'r ThemeRegistry,
    id: &str,
    sink: &mut V,
    store: &mut S,
) -> &'r Theme
where
    S: Store + ?Sized,
    V: StyleSink + ?Sized,
{
    let theme = registry.resolve(id);
    for (name, value) in theme.style_vars() {
        sink.set_property(name, value);
    }
    sink.set_theme_class(&theme.id);
    if let Err(e) = store.write_value(keys::THEME, &theme.id) {
        log::warn!("failed to persist theme '{}': {e}", theme.id);
    }
    theme
}
