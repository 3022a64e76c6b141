//! Gem declarations contributed by feature groups.

use crate::domain::{Feature, SelectionMap};

/// One `gem` line for the Gemfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GemDeclaration {
    pub name: &'static str,
    pub requirement: Option<&'static str>,
    /// Bundler group, `None` for the default group.
    pub group: Option<&'static str>,
}

impl GemDeclaration {
    const fn new(name: &'static str) -> Self {
        Self { name, requirement: None, group: None }
    }

    const fn with_requirement(mut self, requirement: &'static str) -> Self {
        self.requirement = Some(requirement);
        self
    }

    const fn in_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    fn line(&self) -> String {
        match self.requirement {
            Some(req) => format!("gem \"{}\", \"{}\"", self.name, req),
            None => format!("gem \"{}\"", self.name),
        }
    }
}

const INERTIA_GEMS: &[GemDeclaration] = &[
    GemDeclaration::new("inertia_rails").with_requirement("~> 3.0"),
    GemDeclaration::new("js-routes"),
    GemDeclaration::new("local_time"),
];

const TRAILBLAZER_GEMS: &[GemDeclaration] = &[GemDeclaration::new("trailblazer-rails")];

const AUTH_GEMS: &[GemDeclaration] = &[GemDeclaration::new("authentication-zero")];

const DEVTOOLS_GEMS: &[GemDeclaration] = &[
    GemDeclaration::new("pgreset").in_group("development"),
    GemDeclaration::new("annotaterb").in_group("development"),
    GemDeclaration::new("letter_opener").in_group("development"),
    GemDeclaration::new("solargraph").in_group("development"),
    GemDeclaration::new("solargraph-rails").in_group("development"),
    GemDeclaration::new("rbs").in_group("development"),
    GemDeclaration::new("rubocop").in_group("development"),
    GemDeclaration::new("good_migrations").in_group("development"),
];

fn gems_for(feature: Feature) -> &'static [GemDeclaration] {
    match feature {
        Feature::Inertia => INERTIA_GEMS,
        Feature::Trailblazer => TRAILBLAZER_GEMS,
        Feature::Auth => AUTH_GEMS,
        Feature::DevTools => DEVTOOLS_GEMS,
        Feature::MultiStaging => &[],
    }
}

/// Declarations for every enabled group.
pub fn declarations_for(selection: &SelectionMap) -> Vec<GemDeclaration> {
    // Declaration order: frontend, trailblazer, auth, then the development group.
    [Feature::Inertia, Feature::Trailblazer, Feature::Auth, Feature::DevTools]
        .into_iter()
        .filter(|feature| selection.is_enabled(*feature))
        .flat_map(|feature| gems_for(feature).iter().copied())
        .collect()
}

/// Append declarations missing from `gemfile`. Returns `None` when nothing changes.
pub fn merge_into_gemfile(gemfile: &str, declarations: &[GemDeclaration]) -> Option<String> {
    let missing: Vec<&GemDeclaration> =
        declarations.iter().filter(|decl| !declares_gem(gemfile, decl.name)).collect();
    if missing.is_empty() {
        return None;
    }

    let mut out = gemfile.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }

    let ungrouped: Vec<_> = missing.iter().filter(|decl| decl.group.is_none()).collect();
    if !ungrouped.is_empty() {
        out.push('\n');
        for decl in ungrouped {
            out.push_str(&decl.line());
            out.push('\n');
        }
    }

    let mut groups: Vec<&str> = missing.iter().filter_map(|decl| decl.group).collect();
    groups.dedup();
    for group in groups {
        out.push_str(&format!("\ngroup :{} do\n", group));
        for decl in missing.iter().filter(|decl| decl.group == Some(group)) {
            out.push_str("  ");
            out.push_str(&decl.line());
            out.push('\n');
        }
        out.push_str("end\n");
    }

    Some(out)
}

fn declares_gem(gemfile: &str, name: &str) -> bool {
    let double = format!("gem \"{}\"", name);
    let single = format!("gem '{}'", name);
    gemfile.lines().map(str::trim_start).any(|line| line.starts_with(&double) || line.starts_with(&single))
}
