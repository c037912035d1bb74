use strum::VariantNames;

use super::Sport;

#[test]
fn it_parses_backend_keys() {
    assert_eq!(Sport::parse("boys_soccer"), Some(Sport::BoysSoccer));
    assert_eq!(Sport::parse("girls_basketball"), Some(Sport::GirlsBasketball));
    assert_eq!(Sport::parse(" wrestling "), Some(Sport::Wrestling));
    assert_eq!(Sport::parse("lacrosse"), None);
}

#[test]
fn it_lists_all_six_keys() {
    assert_eq!(
        Sport::VARIANTS,
        &[
            "boys_soccer",
            "girls_soccer",
            "boys_basketball",
            "girls_basketball",
            "baseball",
            "wrestling"
        ]
    );
}

#[test]
fn it_only_flags_soccer_programs() {
    assert!(Sport::BoysSoccer.is_soccer());
    assert!(Sport::GirlsSoccer.is_soccer());
    assert!(!Sport::BoysBasketball.is_soccer());
    assert!(!Sport::Baseball.is_soccer());
    assert!(!Sport::Wrestling.is_soccer());
}

#[test]
fn it_serializes_as_backend_key() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Sport::GirlsSoccer)?, "\"girls_soccer\"");
    assert_eq!(Sport::GirlsSoccer.to_string(), "girls_soccer");
    return Ok(());
}
