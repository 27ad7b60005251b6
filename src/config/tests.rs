use super::*;

use serial_test::serial;

use crate::constants::DEFAULT_MAX_SEQ_LEN;

fn clear_env() {
    // SAFETY: tests mutating process env are serialized via #[serial].
    unsafe {
        env::remove_var(Config::ENV_EMBED_MODEL_DIR);
        env::remove_var(Config::ENV_CLASSIFIER_DIR);
        env::remove_var(Config::ENV_MAX_SEQ_LEN);
    }
}

#[test]
#[serial]
fn test_defaults_when_env_is_empty() {
    clear_env();

    let config = Config::from_env().unwrap();
    assert!(config.embed_model_dir.is_none());
    assert!(config.classifier_dir.is_none());
    assert_eq!(config.max_seq_len, DEFAULT_MAX_SEQ_LEN);
}

#[test]
#[serial]
fn test_model_dirs_come_from_env() {
    clear_env();
    unsafe {
        env::set_var(Config::ENV_EMBED_MODEL_DIR, "/models/minilm");
        env::set_var(Config::ENV_CLASSIFIER_DIR, "/models/rwa-artifact");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.embed_model_dir.as_deref(), Some(PathBuf::from("/models/minilm").as_path()));
    assert_eq!(
        config.classifier_dir.as_deref(),
        Some(PathBuf::from("/models/rwa-artifact").as_path())
    );

    clear_env();
}

#[test]
#[serial]
fn test_blank_path_env_var_is_treated_as_unset() {
    clear_env();
    unsafe {
        env::set_var(Config::ENV_EMBED_MODEL_DIR, "   ");
    }

    let config = Config::from_env().unwrap();
    assert!(config.embed_model_dir.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_max_seq_len_parses_from_env() {
    clear_env();
    unsafe {
        env::set_var(Config::ENV_MAX_SEQ_LEN, "512");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.max_seq_len, 512);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_max_seq_len_is_rejected() {
    clear_env();
    unsafe {
        env::set_var(Config::ENV_MAX_SEQ_LEN, "not-a-number");
    }
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidMaxSeqLen { .. })
    ));

    unsafe {
        env::set_var(Config::ENV_MAX_SEQ_LEN, "0");
    }
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidMaxSeqLen { .. })
    ));

    clear_env();
}

#[test]
fn test_validate_accepts_unset_paths() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_missing_dir() {
    let config = Config {
        embed_model_dir: Some(PathBuf::from("/nonexistent/minilm")),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_rejects_file_as_dir() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = Config {
        classifier_dir: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}
