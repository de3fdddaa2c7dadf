// ABOUTME: Integration tests for configuration parsing and discovery.
// ABOUTME: Tests YAML parsing, token resolution, and init scaffolding.

use cutter::config::*;
use cutter::error::Error;
use cutter::release::ReleaseChannel;
use std::fs;

const FULL: &str = r#"
product: electron
owner: electron
project: electron
nightly_project: nightlies
default_branch: main
remote: upstream
api_url: https://ghe.example.com/api/v3
token:
  env: CUTTER_RELEASE_TOKEN
version:
  command: [python, script/bump-version.py]
notes:
  command: [node, script/release-notes.js]
build:
  command: node script/ci-release-build.js
"#;

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = Config::from_yaml(FULL).unwrap();

        assert_eq!(config.product, "electron");
        assert_eq!(config.nightly_project.as_deref(), Some("nightlies"));
        assert_eq!(config.default_branch, "main");
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.token, SecretValue::from_env("CUTTER_RELEASE_TOKEN"));
        assert_eq!(config.notes.unwrap().command.head, "node");
        assert_eq!(config.build.unwrap().command.len(), 2);
    }

    #[test]
    fn missing_version_command_is_rejected() {
        let yaml = "product: a\nowner: b\nproject: c\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = format!("{FULL}destinations: {{}}\n");
        assert!(matches!(Config::from_yaml(&yaml), Err(Error::Yaml(_))));
    }

    #[test]
    fn literal_token_is_accepted() {
        let yaml = FULL.replace("token:\n  env: CUTTER_RELEASE_TOKEN", "token: ghp_literal");
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.host_token().unwrap(), "ghp_literal");
    }
}

mod tokens {
    use super::*;

    #[test]
    fn token_comes_from_environment() {
        temp_env::with_var("CUTTER_RELEASE_TOKEN", Some("ghp_env"), || {
            let config = Config::from_yaml(FULL).unwrap();
            assert_eq!(config.host_token().unwrap(), "ghp_env");

            let release = config.release_config(ReleaseChannel::Stable, std::path::Path::new("."));
            assert_eq!(release.host_token.as_deref(), Some("ghp_env"));
        });
    }

    #[test]
    fn missing_token_only_fails_when_asked_for() {
        temp_env::with_var_unset("CUTTER_RELEASE_TOKEN", || {
            let config = Config::from_yaml(FULL).unwrap();

            let release = config.release_config(ReleaseChannel::Beta, std::path::Path::new("."));
            assert_eq!(release.host_token, None);

            let err = config.host_token().unwrap_err();
            assert_eq!(
                err.to_string(),
                "missing required environment variable: CUTTER_RELEASE_TOKEN"
            );
        });
    }
}

mod discovery {
    use super::*;

    #[test]
    fn discovers_each_supported_location() {
        for name in [CONFIG_FILENAME, CONFIG_FILENAME_ALT, CONFIG_FILENAME_DIR] {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, FULL).unwrap();

            assert_eq!(Config::find(dir.path()), Some(path));
            assert_eq!(Config::discover(dir.path()).unwrap().owner, "electron");
        }
    }

    #[test]
    fn missing_config_is_reported_with_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(ref p) if p == dir.path()));
    }
}

mod init {
    use super::*;

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "product: old").unwrap();

        let err = init_config(dir.path(), None, None, false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));

        init_config(dir.path(), Some("widget"), None, true).unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap().product, "widget");
    }

    #[test]
    fn init_rejects_blank_names() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_config(dir.path(), Some("  "), None, false).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(!dir.path().join(CONFIG_FILENAME).exists());
    }
}
