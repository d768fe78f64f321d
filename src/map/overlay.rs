//! Gates the province-fill overlay.

use crate::core::config::Locale;
use fxhash::FxHashSet;

/// Overlay decision: whether the region-fill pass runs, and for which
/// named regions. Geometry comes from the shared
/// [`crate::data::regions::RegionDataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOverlay {
    pub enabled: bool,
    pub names: FxHashSet<String>,
}

impl RegionOverlay {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            names: FxHashSet::default(),
        }
    }
}

/// Enabled iff the locale is domestic, the map is at a big-map zoom, and
/// there is at least one highlighted region. The name set is derived
/// externally from the user's recorded activity locations.
pub fn overlay(locale: Locale, is_big_map: bool, highlighted: &FxHashSet<String>) -> RegionOverlay {
    if locale.is_domestic() && is_big_map && !highlighted.is_empty() {
        RegionOverlay {
            enabled: true,
            names: highlighted.clone(),
        }
    } else {
        RegionOverlay::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_enabled_when_all_conditions_hold() {
        let result = overlay(Locale::Domestic, true, &names(&["Beijing"]));
        assert!(result.enabled);
        assert!(result.names.contains("Beijing"));
    }

    #[test]
    fn test_flipping_any_condition_disables() {
        let highlighted = names(&["Beijing"]);

        assert!(!overlay(Locale::International, true, &highlighted).enabled);
        assert!(!overlay(Locale::Domestic, false, &highlighted).enabled);
        assert!(!overlay(Locale::Domestic, true, &names(&[])).enabled);
    }
}
