use crate::domain::feature::{CATALOG, Feature, FeatureGroup};

/// Resolved enabled/disabled state for every catalog feature group.
///
/// The map is fixed-size and indexed by catalog position, so it always holds
/// exactly one entry per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionMap {
    enabled: [bool; CATALOG.len()],
}

impl SelectionMap {
    /// Every group set to `value`.
    pub fn all(value: bool) -> Self {
        Self { enabled: [value; CATALOG.len()] }
    }

    /// Build from a per-group decision, evaluated in catalog order.
    pub fn from_fn(mut decide: impl FnMut(&FeatureGroup) -> bool) -> Self {
        let mut enabled = [false; CATALOG.len()];
        for (slot, group) in enabled.iter_mut().zip(CATALOG.iter()) {
            *slot = decide(group);
        }
        Self { enabled }
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.enabled[feature.index()]
    }

    /// Enabled groups in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static FeatureGroup> + '_ {
        CATALOG.iter().filter(|group| self.is_enabled(group.feature))
    }

    /// Disabled groups in catalog order.
    pub fn disabled(&self) -> impl Iterator<Item = &'static FeatureGroup> + '_ {
        CATALOG.iter().filter(|group| !self.is_enabled(group.feature))
    }

    pub fn any_enabled(&self) -> bool {
        self.enabled.iter().any(|value| *value)
    }
}
