use super::*;

#[test]
fn defaults_point_at_author_tools() -> Result<(), CliError> {
    let settings = Settings::load()?;
    assert_eq!(settings.api_base.as_str(), "https://author-tools.ietf.org/");
    assert_eq!(settings.api_base.scheme(), "https");
    Ok(())
}

#[test]
fn default_log_level_is_quiet() -> Result<(), CliError> {
    let settings = Settings::load()?;
    assert_eq!(settings.logging.level, LevelFilter::WARN);
    Ok(())
}

#[test]
fn api_base_can_be_overridden() {
    let base = Url::parse("http://127.0.0.1:8080").expect("url");
    let settings = Settings::with_api_base(base.clone());
    assert_eq!(settings.api_base, base);
    assert_eq!(settings.logging.level, DEFAULT_LOG_LEVEL);
}
