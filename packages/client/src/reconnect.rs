//! Reconnection policy.
//!
//! Pure functions deciding whether a failed session is retried.

use crate::error::ClientError;

/// Check if the client should exit immediately based on the error type.
///
/// A participant the server refused will be refused again, so retrying is
/// pointless.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::Rejected(_) | ClientError::InvalidClientId(_)
    )
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `failed_attempts` - How many attempts have failed so far
/// * `max_attempts` - The maximum number of attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    failed_attempts: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    failed_attempts < max_attempts
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinrow_server::domain::IdentityError;

    #[test]
    fn test_should_exit_immediately_when_rejected() {
        // テスト項目: サーバーに受付を拒否された場合、即座に終了すべきと判定される
        // given (前提条件):
        let error = ClientError::Rejected("Game is full".to_string());

        // when (操作):
        let result = should_exit_immediately(&error);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_exit_immediately_with_invalid_client_id() {
        // テスト項目: 不正な client id の場合、即座に終了すべきと判定される
        // given (前提条件):
        let error = ClientError::InvalidClientId(IdentityError::Empty);

        // when (操作):
        let result = should_exit_immediately(&error);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_not_exit_immediately_on_connection_error() {
        // テスト項目: 接続エラーの場合、即座には終了しない
        // given (前提条件):
        let error = ClientError::ConnectionError("Connection lost".to_string());

        // when (操作):
        let result = should_exit_immediately(&error);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_should_attempt_reconnect_within_limit() {
        // テスト項目: 試行回数が上限未満なら再接続する
        // given (前提条件):
        let error = ClientError::ConnectionError("Connection lost".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 4, 5);

        // then (期待する結果):
        assert!(result);
    }

    #[test]
    fn test_should_not_attempt_reconnect_at_limit() {
        // テスト項目: 試行回数が上限に達したら再接続しない
        // given (前提条件):
        let error = ClientError::ConnectionError("Connection lost".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 5, 5);

        // then (期待する結果):
        assert!(!result);
    }

    #[test]
    fn test_should_not_attempt_reconnect_when_rejected() {
        // テスト項目: 受付を拒否された場合は試行回数に関わらず再接続しない
        // given (前提条件):
        let error = ClientError::Rejected("Game is full".to_string());

        // when (操作):
        let result = should_attempt_reconnect(&error, 0, 5);

        // then (期待する結果):
        assert!(!result);
    }
}
