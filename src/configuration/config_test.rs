use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>()?;

    assert_eq!(
        doc.get("api-url").and_then(|e| return e.as_str()),
        Some("http://127.0.0.1:8000")
    );
    assert_eq!(
        doc.get("mode").and_then(|e| return e.as_str()),
        Some("balanced")
    );
    assert_eq!(
        doc.get("sections").and_then(|e| return e.as_str()),
        Some("score,strengths,gaps,action-plan,jobs,email-draft")
    );
    assert!(doc.get("config-file").is_none());
    assert!(res.contains("[possible values: fast, balanced, detailed]"));

    return Ok(());
}

#[test]
fn it_has_defaults_for_every_key() {
    assert_eq!(Config::default(ConfigKey::ApiURL), "http://127.0.0.1:8000");
    assert_eq!(Config::default(ConfigKey::Mode), "balanced");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["placify", "-c", "./test/config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_config_with_invalid_mode() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["placify", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_config_with_invalid_sections() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "placify",
        "-c",
        "./test/config.example.toml",
        "--sections",
        "score,charts",
    ])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_config_with_non_string_sections() -> Result<()> {
    let matches = cli::build()
        .try_get_matches_from(vec!["placify", "-c", "./test/bad-sections-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;

    let err = res.unwrap_err().to_string();
    assert!(err.contains("invalid value for key 'sections'"));
    return Ok(());
}
