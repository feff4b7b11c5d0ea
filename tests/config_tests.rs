use planwright::config::{PlannerConfig, ScheduleStrategy};

#[tokio::test]
async fn missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlannerConfig::load(dir.path()).await.unwrap();
    assert_eq!(config.extraction.default_timeline_weeks, 8);
    assert_eq!(config.schedule.strategy, ScheduleStrategy::Overlap);
}

#[tokio::test]
async fn save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = PlannerConfig::default();
    config.composer.seed = 42;
    config.schedule.strategy = ScheduleStrategy::DependencyAware;
    config.save(dir.path()).await.unwrap();

    let reloaded = PlannerConfig::load(dir.path()).await.unwrap();
    assert_eq!(reloaded.composer.seed, 42);
    assert_eq!(reloaded.schedule.strategy, ScheduleStrategy::DependencyAware);
}

#[tokio::test]
async fn invalid_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(
        dir.path().join("planwright.toml"),
        "[generation]\ntimeout_secs = 0\n",
    )
    .await
    .unwrap();

    let err = PlannerConfig::load(dir.path()).await.unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}
