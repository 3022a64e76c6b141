//! Feature group catalog.

/// Optional bundle of provisioning steps toggled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Inertia,
    MultiStaging,
    Auth,
    DevTools,
    Trailblazer,
}

/// Static catalog entry describing a feature group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGroup {
    pub feature: Feature,
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub disable_flag: &'static str,
    /// Line printed in the final report when the group was installed.
    pub summary: &'static str,
}

/// Catalog in display order.
pub const CATALOG: [FeatureGroup; 5] = [
    FeatureGroup {
        feature: Feature::Inertia,
        key: "inertia",
        display_name: "Inertia Rails",
        description: "React + TypeScript + Tailwind + shadcn/ui + Vite",
        disable_flag: "--skip-inertia",
        summary: "Inertia Rails: React + TypeScript + Tailwind + shadcn/ui",
    },
    FeatureGroup {
        feature: Feature::MultiStaging,
        key: "multistaging",
        display_name: "Multi-staging Environment",
        description: "Kamal deploy + Docker + multi-DB + staging/production configs",
        disable_flag: "--skip-multistaging",
        summary: "Multi-staging: Kamal + Docker + staging/production configs",
    },
    FeatureGroup {
        feature: Feature::Auth,
        key: "auth",
        display_name: "Authentication",
        description: "authentication-zero gem",
        disable_flag: "--skip-auth",
        summary: "Authentication: authentication-zero (run generator to setup)",
    },
    FeatureGroup {
        feature: Feature::DevTools,
        key: "devtools",
        display_name: "Developer Tools",
        description: "RuboCop + Annotaterb + Zellij + Letter Opener",
        disable_flag: "--skip-devtools",
        summary: "Developer Tools: RuboCop, Annotaterb, Zellij, Letter Opener",
    },
    FeatureGroup {
        feature: Feature::Trailblazer,
        key: "trailblazer",
        display_name: "Trailblazer",
        description: "Business logic organization framework",
        disable_flag: "--skip-trailblazer",
        summary: "Trailblazer: Business logic framework",
    },
];

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Inertia,
        Feature::MultiStaging,
        Feature::Auth,
        Feature::DevTools,
        Feature::Trailblazer,
    ];

    /// Catalog entry for this feature.
    pub fn group(self) -> &'static FeatureGroup {
        &CATALOG[self.index()]
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Feature::Inertia => 0,
            Feature::MultiStaging => 1,
            Feature::Auth => 2,
            Feature::DevTools => 3,
            Feature::Trailblazer => 4,
        }
    }
}
