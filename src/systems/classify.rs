//! Name-based exception classification.
//!
//! Shadows and glows are authored as child sprites of the object they belong
//! to and are recognised by their label. The label is inspected once and the
//! result is carried around as a [`SortClass`].

use crate::components::label::Label;

const SHADOW_KEYWORDS: [&str; 1] = ["shadow"];
const GLOW_KEYWORDS: [&str; 3] = ["glow", "light", "effect"];

/// How a node's order is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortClass {
    /// Ordered by its own reference Y.
    #[default]
    Ordinary,
    /// Painted relative to its parent, offset by `shadow_offset`.
    Shadow,
    /// Painted relative to its parent, offset by `glow_offset`.
    GlowEffect,
}

impl SortClass {
    /// Classify an optional label; unlabelled nodes are ordinary.
    pub fn of(label: Option<&Label>) -> Self {
        label.map_or(Self::Ordinary, |l| classify_label(l.name()))
    }

    /// Whether the order is delegated to the parent.
    pub fn follows_parent(self) -> bool {
        !matches!(self, Self::Ordinary)
    }
}

/// Case-insensitive substring match. Shadow keywords win over glow keywords.
pub fn classify_label(label: &str) -> SortClass {
    let lower = label.to_lowercase();
    if SHADOW_KEYWORDS.iter().any(|k| lower.contains(k)) {
        SortClass::Shadow
    } else if GLOW_KEYWORDS.iter().any(|k| lower.contains(k)) {
        SortClass::GlowEffect
    } else {
        SortClass::Ordinary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_is_case_insensitive() {
        assert_eq!(classify_label("Tree_Shadow"), SortClass::Shadow);
        assert_eq!(classify_label("SHADOW"), SortClass::Shadow);
    }

    #[test]
    fn test_glow_keywords() {
        assert_eq!(classify_label("LampGlow"), SortClass::GlowEffect);
        assert_eq!(classify_label("torch light"), SortClass::GlowEffect);
        assert_eq!(classify_label("SparkEffect_02"), SortClass::GlowEffect);
    }

    #[test]
    fn test_shadow_takes_priority_over_glow() {
        assert_eq!(classify_label("GlowShadow"), SortClass::Shadow);
        assert_eq!(classify_label("light_shadow_effect"), SortClass::Shadow);
    }

    #[test]
    fn test_ordinary() {
        assert_eq!(classify_label("Rock"), SortClass::Ordinary);
        assert_eq!(classify_label(""), SortClass::Ordinary);
        assert_eq!(SortClass::of(None), SortClass::Ordinary);
    }

    #[test]
    fn test_substring_match_is_literal() {
        // "Lighthouse" contains "light" and is treated as a glow.
        assert_eq!(classify_label("Lighthouse"), SortClass::GlowEffect);
    }

    #[test]
    fn test_follows_parent() {
        assert!(!SortClass::Ordinary.follows_parent());
        assert!(SortClass::Shadow.follows_parent());
        assert!(SortClass::GlowEffect.follows_parent());
    }
}
