#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tickup::api::clickup::{ClickUpConfig, API_URL};
    use tickup::libs::config::Config;

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            ConfigTestContext { _temp_dir: temp_dir }
        }

        fn teardown(self) {
            // Cleanup is automatic with TempDir
        }
    }

    // Single test so the HOME override is not raced by a parallel test thread.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_defaults_and_roundtrip(_ctx: &mut ConfigTestContext) {
        // No file yet: defaults apply, commands fall back to the public endpoint.
        let config = Config::read().unwrap();
        assert!(config.clickup.is_none());
        assert_eq!(config.clickup.unwrap_or_default().api_url, API_URL);

        let config = Config {
            clickup: Some(ClickUpConfig {
                api_url: "http://localhost:8080/api/v2".to_string(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.clickup.unwrap().api_url, "http://localhost:8080/api/v2");
    }
}
