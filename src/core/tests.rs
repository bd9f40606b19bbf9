//! Core domain: tests for scoring and configuration errors.

use super::{ConfigError, Score, ScoreSink, positive};

#[test]
fn test_score_accumulates_awards() {
    let mut score = Score::default();

    score.award(100);
    score.award(200);

    assert_eq!(score.points, 300);
    assert_eq!(score.enemies_defeated, 2);

    score.reset();
    assert_eq!(score, Score::default());
}

#[test]
fn test_positive_rejects_nan() {
    assert!(positive(0.5));
    assert!(!positive(0.0));
    assert!(!positive(-1.0));
    assert!(!positive(f32::NAN));
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::MaxCombo(0).to_string(),
        "max_combo must be at least 1, got 0"
    );
    assert_eq!(
        ConfigError::BodySize {
            width: 0.0,
            height: 80.0
        }
        .to_string(),
        "body size must be positive, got 0x80"
    );
}
