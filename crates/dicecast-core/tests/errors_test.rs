use dicecast_core::errors::{
    error_code, ConfigError, DicecastError, DicecastErrorCode, HistoryError, IngestError,
};

#[test]
fn coded_strings_carry_codes() {
    let err = IngestError::MalformedRound {
        index: 2,
        reason: "missing id".into(),
    };
    assert_eq!(err.error_code(), error_code::MALFORMED_ROUND);
    assert_eq!(
        err.coded_string(),
        "[MALFORMED_ROUND] malformed round at index 2: missing id"
    );
}

#[test]
fn top_level_error_delegates_codes() {
    let err: DicecastError = IngestError::FeedUnavailable {
        reason: "timeout".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::FEED_UNAVAILABLE);
    assert_eq!(err.to_string(), "round feed unavailable: timeout");

    let err: DicecastError = ConfigError::ParseError {
        message: "bad".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);

    let json_err = serde_json::from_str::<u32>("x").unwrap_err();
    let err: DicecastError = json_err.into();
    assert_eq!(err.error_code(), error_code::SERIALIZATION_ERROR);
}

#[test]
fn history_error_codes() {
    let short = HistoryError::InsufficientHistory {
        needed: 6,
        available: 4,
    };
    assert_eq!(short.error_code(), error_code::INSUFFICIENT_HISTORY);
    assert_eq!(
        short.coded_string(),
        "[INSUFFICIENT_HISTORY] insufficient history: need 6 rounds, have 4"
    );
    assert_eq!(
        HistoryError::EmptyStore.error_code(),
        error_code::EMPTY_STORE
    );
}
