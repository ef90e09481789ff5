//! Cosmetic settings: card geometry, opacity, animation, glass effect.
//!
//! These are process-wide render hints for the presentation layer. They are
//! persisted independently of the active theme.

use serde::{Deserialize, Serialize};

/// Card footprint in the service grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardSize {
    #[default]
    Default,
    Compact,
    Large,
    Wide,
}

impl CardSize {
    pub const ALL: [CardSize; 4] = [
        CardSize::Default,
        CardSize::Compact,
        CardSize::Large,
        CardSize::Wide,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CardSize::Default => "Default",
            CardSize::Compact => "Compact",
            CardSize::Large => "Large",
            CardSize::Wide => "Wide",
        }
    }
}

/// How much motion the presentation layer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimationLevel {
    Minimal,
    #[default]
    Default,
    Enhanced,
}

impl AnimationLevel {
    pub const ALL: [AnimationLevel; 3] = [
        AnimationLevel::Minimal,
        AnimationLevel::Default,
        AnimationLevel::Enhanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnimationLevel::Minimal => "Minimal",
            AnimationLevel::Default => "Default",
            AnimationLevel::Enhanced => "Enhanced",
        }
    }
}

/// Card opacity in percent, always within `MIN..=MAX`.
///
/// Out-of-range input (including persisted values) is clamped rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct CardOpacity(u8);

impl CardOpacity {
    pub const MIN: u8 = 30;
    pub const MAX: u8 = 100;

    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl Default for CardOpacity {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl From<i64> for CardOpacity {
    fn from(v: i64) -> Self {
        Self::new(v)
    }
}

impl From<CardOpacity> for i64 {
    fn from(o: CardOpacity) -> Self {
        i64::from(o.0)
    }
}

/// All cosmetic knobs as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSettings {
    #[serde(default)]
    pub card_size: CardSize,
    #[serde(default)]
    pub animation_level: AnimationLevel,
    #[serde(default)]
    pub opacity: CardOpacity,
    #[serde(default)]
    pub glass: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_clamps_low_and_high() {
        assert_eq!(CardOpacity::new(0).percent(), 30);
        assert_eq!(CardOpacity::new(-5).percent(), 30);
        assert_eq!(CardOpacity::new(250).percent(), 100);
        assert_eq!(CardOpacity::new(70).percent(), 70);
    }

    #[test]
    fn opacity_deserialization_clamps() {
        let o: CardOpacity = serde_json::from_str("12").unwrap();
        assert_eq!(o.percent(), 30);
        let o: CardOpacity = serde_json::from_str("1000").unwrap();
        assert_eq!(o.percent(), 100);
    }

    #[test]
    fn opacity_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&CardOpacity::new(70)).unwrap(), "70");
    }

    #[test]
    fn enums_serialize_by_variant_name() {
        assert_eq!(serde_json::to_string(&CardSize::Large).unwrap(), "\"Large\"");
        assert_eq!(
            serde_json::to_string(&AnimationLevel::Enhanced).unwrap(),
            "\"Enhanced\""
        );
    }

    #[test]
    fn defaults() {
        let s = CosmeticSettings::default();
        assert_eq!(s.card_size, CardSize::Default);
        assert_eq!(s.animation_level, AnimationLevel::Default);
        assert_eq!(s.opacity.percent(), 100);
        assert!(!s.glass);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s: CosmeticSettings = serde_json::from_str(r#"{"glass":true}"#).unwrap();
        assert!(s.glass);
        assert_eq!(s.card_size, CardSize::Default);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn opacity_always_in_range(v in any::<i64>()) {
                let o = CardOpacity::new(v);
                prop_assert!((CardOpacity::MIN..=CardOpacity::MAX).contains(&o.percent()));
            }
        }
    }
}
