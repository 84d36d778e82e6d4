//! Seeder configuration loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{NS_BASE, Namespaces};

/// Configuration values controlling a seeding run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SECURE_GOODS")]
pub struct SeederSettings {
    /// Base namespace of the ledger model.
    #[ortho_config(default = NS_BASE.to_owned())]
    pub namespace_base: String,
    /// File receiving the registry snapshot; stdout when unset.
    #[ortho_config(cli_long = "snapshot")]
    pub snapshot_path: Option<PathBuf>,
}

/// Errors raised while interpreting [`SeederSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured namespace base is empty or whitespace.
    #[error("namespace base must not be blank")]
    BlankNamespaceBase,
}

impl SeederSettings {
    /// Return the configured namespace base.
    #[must_use]
    pub fn namespace_base(&self) -> &str {
        &self.namespace_base
    }

    /// Return the configured snapshot path, if any.
    #[must_use]
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    /// Namespaces derived from the configured base.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BlankNamespaceBase`] when the base is blank.
    pub fn namespaces(&self) -> Result<Namespaces, SettingsError> {
        let base = self.namespace_base().trim();
        if base.is_empty() {
            return Err(SettingsError::BlankNamespaceBase);
        }
        Ok(Namespaces::new(base))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for seeder configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_args(args: &[&str]) -> SeederSettings {
        let argv = std::iter::once("load-registries")
            .chain(args.iter().copied())
            .map(OsString::from);
        SeederSettings::load_from_iter(argv).expect("config should load")
    }

    fn load_from_empty_args() -> SeederSettings {
        load_from_args(&[])
    }

    fn unset_environment() -> env_lock::EnvGuard<'static> {
        lock_env([
            ("SECURE_GOODS_NAMESPACE_BASE", None::<String>),
            ("SECURE_GOODS_SNAPSHOT_PATH", None::<String>),
        ])
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = unset_environment();

        let settings = load_from_empty_args();
        assert_eq!(settings.namespace_base(), NS_BASE);
        assert!(settings.snapshot_path().is_none());
        assert_eq!(
            settings.namespaces().expect("namespaces"),
            Namespaces::default()
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SECURE_GOODS_NAMESPACE_BASE",
                Some("org.example.goods".to_owned()),
            ),
            (
                "SECURE_GOODS_SNAPSHOT_PATH",
                Some("/tmp/registries.json".to_owned()),
            ),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.namespace_base(), "org.example.goods");
        assert_eq!(
            settings.snapshot_path(),
            Some(Path::new("/tmp/registries.json"))
        );
        assert_eq!(
            settings.namespaces().expect("namespaces").participant(),
            "org.example.goods.participant"
        );
    }

    #[rstest]
    fn command_line_flags_override_environment() {
        let _guard = lock_env([
            (
                "SECURE_GOODS_NAMESPACE_BASE",
                Some("org.example.env".to_owned()),
            ),
            ("SECURE_GOODS_SNAPSHOT_PATH", None),
        ]);

        let settings = load_from_args(&[
            "--namespace-base",
            "org.example.flag",
            "--snapshot",
            "registries.json",
        ]);
        assert_eq!(settings.namespace_base(), "org.example.flag");
        assert_eq!(settings.snapshot_path(), Some(Path::new("registries.json")));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_namespace_base_is_rejected(#[case] base: &str) {
        let settings = SeederSettings {
            namespace_base: base.to_owned(),
            snapshot_path: None,
        };

        assert_eq!(
            settings.namespaces(),
            Err(SettingsError::BlankNamespaceBase)
        );
    }

    #[rstest]
    fn surrounding_whitespace_is_trimmed() {
        let settings = SeederSettings {
            namespace_base: "  org.example.goods ".to_owned(),
            snapshot_path: None,
        };

        assert_eq!(
            settings.namespaces().expect("namespaces").base(),
            "org.example.goods"
        );
    }
}
