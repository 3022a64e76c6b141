//! Provisioning plan: the fixed step order and the gate of each step.

use crate::domain::{Feature, SelectionMap};

/// Condition under which a step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    When(Feature),
    Unless(Feature),
}

impl Gate {
    pub fn admits(self, selection: &SelectionMap) -> bool {
        match self {
            Gate::Always => true,
            Gate::When(feature) => selection.is_enabled(feature),
            Gate::Unless(feature) => !selection.is_enabled(feature),
        }
    }
}

/// Idempotent unit of provisioning work that runs after the install boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    InstallFrontend,
    ConfigurePathMappings,
    InstallUiComponents,
    NormalizePackageManager,
    WriteProcessManifest,
    CopyDockerfile,
    CopyServiceConfigs,
    ConfigureDeployDescriptors,
    ConfigureDeploySecrets,
    WriteMultiDatabaseConfig,
    CopyAuxiliaryMigrations,
    WriteSeeds,
    ConfigureProduction,
    CreateStagingEnvironment,
    ProvisionCredentials,
    WriteSimpleDatabaseConfig,
    CopyLinterConfig,
    CopyEnvExample,
    InstallMultiplexerConfig,
    InstallHelperScripts,
    InstallSchemaAnnotations,
    ConfigureDevelopment,
    ConfigureApplication,
}

impl Step {
    /// Total execution order. A step's ordinal is its index here.
    pub const ORDER: [Step; 23] = [
        Step::InstallFrontend,
        Step::ConfigurePathMappings,
        Step::InstallUiComponents,
        Step::NormalizePackageManager,
        Step::WriteProcessManifest,
        Step::CopyDockerfile,
        Step::CopyServiceConfigs,
        Step::ConfigureDeployDescriptors,
        Step::ConfigureDeploySecrets,
        Step::WriteMultiDatabaseConfig,
        Step::CopyAuxiliaryMigrations,
        Step::WriteSeeds,
        Step::ConfigureProduction,
        Step::CreateStagingEnvironment,
        Step::ProvisionCredentials,
        Step::WriteSimpleDatabaseConfig,
        Step::CopyLinterConfig,
        Step::CopyEnvExample,
        Step::InstallMultiplexerConfig,
        Step::InstallHelperScripts,
        Step::InstallSchemaAnnotations,
        Step::ConfigureDevelopment,
        Step::ConfigureApplication,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::InstallFrontend => "install-frontend",
            Step::ConfigurePathMappings => "configure-path-mappings",
            Step::InstallUiComponents => "install-ui-components",
            Step::NormalizePackageManager => "normalize-package-manager",
            Step::WriteProcessManifest => "write-process-manifest",
            Step::CopyDockerfile => "copy-dockerfile",
            Step::CopyServiceConfigs => "copy-service-configs",
            Step::ConfigureDeployDescriptors => "configure-deploy-descriptors",
            Step::ConfigureDeploySecrets => "configure-deploy-secrets",
            Step::WriteMultiDatabaseConfig => "write-multi-database-config",
            Step::CopyAuxiliaryMigrations => "copy-auxiliary-migrations",
            Step::WriteSeeds => "write-seeds",
            Step::ConfigureProduction => "configure-production",
            Step::CreateStagingEnvironment => "create-staging-environment",
            Step::ProvisionCredentials => "provision-credentials",
            Step::WriteSimpleDatabaseConfig => "write-simple-database-config",
            Step::CopyLinterConfig => "copy-linter-config",
            Step::CopyEnvExample => "copy-env-example",
            Step::InstallMultiplexerConfig => "install-multiplexer-config",
            Step::InstallHelperScripts => "install-helper-scripts",
            Step::InstallSchemaAnnotations => "install-schema-annotations",
            Step::ConfigureDevelopment => "configure-development",
            Step::ConfigureApplication => "configure-application",
        }
    }

    pub fn gate(self) -> Gate {
        match self {
            Step::InstallFrontend
            | Step::ConfigurePathMappings
            | Step::InstallUiComponents
            | Step::NormalizePackageManager
            | Step::WriteProcessManifest => Gate::When(Feature::Inertia),
            Step::CopyDockerfile
            | Step::CopyServiceConfigs
            | Step::ConfigureDeployDescriptors
            | Step::ConfigureDeploySecrets
            | Step::WriteMultiDatabaseConfig
            | Step::CopyAuxiliaryMigrations
            | Step::WriteSeeds
            | Step::ConfigureProduction
            | Step::CreateStagingEnvironment
            | Step::ProvisionCredentials => Gate::When(Feature::MultiStaging),
            Step::WriteSimpleDatabaseConfig => Gate::Unless(Feature::MultiStaging),
            Step::CopyLinterConfig
            | Step::CopyEnvExample
            | Step::InstallMultiplexerConfig
            | Step::InstallHelperScripts
            | Step::InstallSchemaAnnotations
            | Step::ConfigureDevelopment => Gate::When(Feature::DevTools),
            Step::ConfigureApplication => Gate::Always,
        }
    }

    pub fn ordinal(self) -> usize {
        Self::ORDER.iter().position(|step| *step == self).unwrap_or(Self::ORDER.len())
    }
}

/// Steps to execute for a selection, in execution order.
pub fn plan(selection: &SelectionMap) -> Vec<Step> {
    Step::ORDER.into_iter().filter(|step| step.gate().admits(selection)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn selection_from_bits(bits: u8) -> SelectionMap {
        SelectionMap::from_fn(|group| bits & (1 << group.feature.index()) != 0)
    }

    #[test]
    fn ordinals_match_order_positions() {
        for (i, step) in Step::ORDER.iter().enumerate() {
            assert_eq!(step.ordinal(), i);
        }
    }

    #[test]
    fn empty_selection_plans_simple_database_and_application() {
        let steps = plan(&SelectionMap::all(false));
        assert_eq!(steps, vec![Step::WriteSimpleDatabaseConfig, Step::ConfigureApplication]);
    }

    #[test]
    fn devtools_disabled_skips_tooling_steps() {
        let selection = SelectionMap::from_fn(|g| g.feature != Feature::DevTools);
        let steps = plan(&selection);
        assert!(steps.contains(&Step::WriteMultiDatabaseConfig));
        for skipped in [Step::CopyLinterConfig, Step::InstallMultiplexerConfig, Step::InstallSchemaAnnotations] {
            assert!(!steps.contains(&skipped));
        }
    }

    #[test]
    fn production_is_configured_before_staging_copy() {
        let steps = plan(&SelectionMap::all(true));
        let production = steps.iter().position(|s| *s == Step::ConfigureProduction).unwrap();
        let staging = steps.iter().position(|s| *s == Step::CreateStagingEnvironment).unwrap();
        assert!(production < staging);
    }

    proptest! {
        #[test]
        fn exactly_one_database_layout_is_planned(bits in 0u8..32) {
            let steps = plan(&selection_from_bits(bits));
            let multi = steps.contains(&Step::WriteMultiDatabaseConfig);
            let simple = steps.contains(&Step::WriteSimpleDatabaseConfig);
            prop_assert!(multi ^ simple);
        }

        #[test]
        fn application_step_runs_once_and_last(bits in 0u8..32) {
            let steps = plan(&selection_from_bits(bits));
            prop_assert_eq!(steps.last(), Some(&Step::ConfigureApplication));
            prop_assert_eq!(steps.iter().filter(|s| **s == Step::ConfigureApplication).count(), 1);
        }

        #[test]
        fn plan_preserves_total_order(bits in 0u8..32) {
            let steps = plan(&selection_from_bits(bits));
            let ordinals: Vec<_> = steps.iter().map(|s| s.ordinal()).collect();
            let mut sorted = ordinals.clone();
            sorted.sort_unstable();
            prop_assert_eq!(ordinals, sorted);
        }
    }
}
