//! Icon registry.
//!
//! Service records carry a symbolic [`IconKey`]; this module is the single
//! place that turns a key into something a renderer can draw. Unknown keys
//! resolve to [`Icon::FALLBACK`].

use crate::service::IconKey;

/// Well-known card icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    BarChart,
    Calendar,
    Clock,
    Cloud,
    Code,
    Coffee,
    Database,
    Dollar,
    FileText,
    Film,
    Globe,
    Headphones,
    Heart,
    Home,
    Image,
    Lock,
    Mail,
    Monitor,
    Music,
    Server,
    Settings,
    ShoppingCart,
    Smartphone,
    Star,
    Terminal,
    User,
    Users,
    Video,
}

impl Icon {
    /// Icon used when a key does not match any entry.
    pub const FALLBACK: Icon = Icon::Settings;

    pub const ALL: &[Icon] = &[
        Icon::BarChart,
        Icon::Calendar,
        Icon::Clock,
        Icon::Cloud,
        Icon::Code,
        Icon::Coffee,
        Icon::Database,
        Icon::Dollar,
        Icon::FileText,
        Icon::Film,
        Icon::Globe,
        Icon::Headphones,
        Icon::Heart,
        Icon::Home,
        Icon::Image,
        Icon::Lock,
        Icon::Mail,
        Icon::Monitor,
        Icon::Music,
        Icon::Server,
        Icon::Settings,
        Icon::ShoppingCart,
        Icon::Smartphone,
        Icon::Star,
        Icon::Terminal,
        Icon::User,
        Icon::Users,
        Icon::Video,
    ];

    /// Canonical key stored in service records.
    pub fn key(self) -> &'static str {
        match self {
            Icon::BarChart => "bar-chart",
            Icon::Calendar => "calendar",
            Icon::Clock => "clock",
            Icon::Cloud => "cloud",
            Icon::Code => "code",
            Icon::Coffee => "coffee",
            Icon::Database => "database",
            Icon::Dollar => "dollar",
            Icon::FileText => "file-text",
            Icon::Film => "film",
            Icon::Globe => "globe",
            Icon::Headphones => "headphones",
            Icon::Heart => "heart",
            Icon::Home => "home",
            Icon::Image => "image",
            Icon::Lock => "lock",
            Icon::Mail => "mail",
            Icon::Monitor => "monitor",
            Icon::Music => "music",
            Icon::Server => "server",
            Icon::Settings => "settings",
            Icon::ShoppingCart => "shopping-cart",
            Icon::Smartphone => "smartphone",
            Icon::Star => "star",
            Icon::Terminal => "terminal",
            Icon::User => "user",
            Icon::Users => "users",
            Icon::Video => "video",
        }
    }

    /// Single-character glyph for text renderers.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::BarChart => "📊",
            Icon::Calendar => "📅",
            Icon::Clock => "🕒",
            Icon::Cloud => "☁",
            Icon::Code => "⌨",
            Icon::Coffee => "☕",
            Icon::Database => "🗄",
            Icon::Dollar => "$",
            Icon::FileText => "📄",
            Icon::Film => "🎞",
            Icon::Globe => "🌐",
            Icon::Headphones => "🎧",
            Icon::Heart => "♥",
            Icon::Home => "🏠",
            Icon::Image => "🖼",
            Icon::Lock => "🔒",
            Icon::Mail => "✉",
            Icon::Monitor => "🖥",
            Icon::Music => "♪",
            Icon::Server => "▤",
            Icon::Settings => "⚙",
            Icon::ShoppingCart => "🛒",
            Icon::Smartphone => "📱",
            Icon::Star => "★",
            Icon::Terminal => "▮",
            Icon::User => "👤",
            Icon::Users => "👥",
            Icon::Video => "🎬",
        }
    }

    /// Look up a key, ignoring ASCII case and `-`/`_`/space separators.
    pub fn from_key(key: &str) -> Option<Icon> {
        let wanted: String = key
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.key().replace('-', "") == wanted)
    }
}

/// Resolve a record's icon, falling back to [`Icon::FALLBACK`].
pub fn resolve(key: &IconKey) -> Icon {
    Icon::from_key(key.as_str()).unwrap_or_else(|| {
        log::warn!("unknown icon '{key}' -- using {}", Icon::FALLBACK.key());
        Icon::FALLBACK
    })
}
