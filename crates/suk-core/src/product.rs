//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to name itself, locate its registry and
//! word its hints. The core never reads process-global state on its own; the
//! registry directory and template store root are derived here and injected.

use std::path::{Path, PathBuf};

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Project configuration file name, looked up in the project root
    fn config_file(&self) -> &'static str;

    /// Environment variable naming the registry directory
    fn registry_dir_env(&self) -> &'static str;

    /// `$schema` written into new configuration files
    fn schema_url(&self) -> &'static str;

    /// Hints printed after components were added
    fn next_steps(&self) -> Vec<String>;

    /// Registry source inside a registry directory
    fn registry_index_file(&self) -> &'static str {
        "index.json"
    }

    /// Template store root inside a registry directory
    fn template_dir(&self) -> &'static str {
        "templates/svelte"
    }

    /// Registry directory: the explicit flag wins, then the environment variable
    fn registry_dir(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(self.registry_dir_env()).map(PathBuf::from))
    }

    fn config_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.config_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestProduct;

    impl ProductConfig for TestProduct {
        fn name(&self) -> &'static str {
            "test"
        }
        fn display_name(&self) -> &'static str {
            "Test"
        }
        fn config_file(&self) -> &'static str {
            "test.json"
        }
        fn registry_dir_env(&self) -> &'static str {
            "SUK_TEST_REGISTRY_DIR_UNSET"
        }
        fn schema_url(&self) -> &'static str {
            "https://example.invalid/schema.json"
        }
        fn next_steps(&self) -> Vec<String> {
            vec![]
        }
    }

    #[test]
    fn test_explicit_registry_dir_wins() {
        let dir = TestProduct.registry_dir(Some(Path::new("registry")));
        assert_eq!(dir, Some(PathBuf::from("registry")));
    }

    #[test]
    fn test_no_registry_dir() {
        assert_eq!(TestProduct.registry_dir(None), None);
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            TestProduct.config_path(Path::new("/proj")),
            PathBuf::from("/proj/test.json")
        );
    }
}
