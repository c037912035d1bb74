use std::time::Duration;

use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;
use crate::domain::models::Sport;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # Base URL of the athletics API.
    api-url = "http://localhost:8000"

    # Name requested when signing in to the coach portal.
    coach-name = "Coach"

    # Milliseconds a coach form message stays on screen.
    feedback-timeout = 3000

    # The sport selected at startup. [possible values: boys_soccer, girls_soccer, boys_basketball, girls_basketball, baseball, wrestling]
    sport = "boys_soccer"
    "###);
}

#[test]
fn it_serializes_without_the_config_file_key() {
    let res = Config::serialize_default(cli::build());
    assert!(!res.contains("config-file"));
}

// Config is process wide, so every load happens inside this one test.
#[tokio::test]
async fn it_loads_config_files() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["courtside", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    let err = res.unwrap_err().to_string();
    assert!(err.contains("invalid value for key 'sport': lacrosse"));
    assert!(err.contains("boys_soccer"));

    let matches =
        cli::build().try_get_matches_from(vec!["courtside", "-c", "./test/config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(
        Config::get(ConfigKey::ApiUrl),
        "http://athletics.example.test:9000"
    );
    assert_eq!(Config::get(ConfigKey::CoachName), "Mike Ferraro");
    assert_eq!(Config::sport()?, Sport::GirlsSoccer);
    assert_eq!(Config::feedback_timeout()?, Duration::from_millis(1500));

    let matches = cli::build().try_get_matches_from(vec![
        "courtside",
        "-c",
        "./test/config.example.toml",
        "--coach-name",
        "Dana",
        "--sport",
        "wrestling",
    ])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::CoachName), "Dana");
    assert_eq!(Config::sport()?, Sport::Wrestling);
    assert_eq!(
        Config::get(ConfigKey::ApiUrl),
        "http://athletics.example.test:9000"
    );

    let matches =
        cli::build().try_get_matches_from(vec!["courtside", "-c", "./test/missing.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::ApiUrl), "http://localhost:8000");
    assert_eq!(Config::sport()?, Sport::BoysSoccer);
    assert_eq!(Config::feedback_timeout()?, Duration::from_millis(3000));

    return Ok(());
}
