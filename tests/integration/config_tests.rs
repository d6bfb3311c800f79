//! Loading the shipped example configuration

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use warranty_sync::Config;
    use warranty_sync::config::{CISCO_MAX_BATCH_SIZE, DELL_MAX_BATCH_SIZE};

    fn example_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/warranty_sync.yaml.example")
    }

    fn example() -> Config {
        let content = std::fs::read_to_string(example_path()).unwrap();
        Config::from_yaml_str(&content).unwrap()
    }

    #[test]
    fn test_example_config_is_valid() {
        let config = example();
        config.validate().unwrap();

        assert_eq!(config.cmdb().table_path, "/table/cmdb_ci_hardware");
        assert_eq!(config.cisco().batch_size, CISCO_MAX_BATCH_SIZE);
        assert_eq!(config.dell().batch_size, DELL_MAX_BATCH_SIZE);
        assert_eq!(config.dell().ignored_service_tags, vec!["AMALONE"]);
        assert_eq!(config.http().timeout_secs, Some(60));
    }

    #[test]
    fn test_example_config_loads_from_file() {
        let config = tokio_test::block_on(Config::from_file(example_path())).unwrap();
        assert!(config.cisco().enabled);
        assert!(config.dell().enabled);
    }

    #[test]
    fn test_environment_overrides_secrets() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("WARRANTY_SYNC_CMDB_PASSWORD", "from-env"),
            ("WARRANTY_SYNC_DELL_ENABLED", "false"),
        ]);
        let mut config = example();
        config
            .apply_overrides_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.cmdb().password, "from-env");
        assert!(!config.dell().enabled);
        config.validate().unwrap();
    }

    #[test]
    fn test_oversized_batch_is_rejected() {
        let mut config = example();
        config.sync.cisco.batch_size = CISCO_MAX_BATCH_SIZE + 1;
        assert!(config.validate().is_err());
    }
}
