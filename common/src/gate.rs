//! 認証ゲートの状態
//!
//! セッション確認は参考情報のみ。確認が終わるまでは子要素を描画せず、
//! 終わった後は周囲のコンテキストが持つ認証フラグだけで判定する。

use crate::error::SessionCheckError;
use serde::{Deserialize, Serialize};

/// セッション確認の応答
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionValidity {
    pub valid: bool,
}

/// セッション確認の進行状況
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Probe {
    #[default]
    Pending,
    Settled,
}

impl Probe {
    /// 確認結果を受け取る（失敗はログのみ、判定には使わない）
    pub fn settle(result: Result<SessionValidity, SessionCheckError>) -> Self {
        match result {
            Ok(validity) if !validity.valid => {
                tracing::debug!("session probe reports no valid session");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "error fetching session");
            }
        }
        Probe::Settled
    }
}

/// ゲートの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// ローディング表示のみ
    Pending,
    /// 子要素を描画
    Authorized,
    /// エラールートへ移動
    Redirect,
}

impl GateState {
    pub fn resolve(probe: Probe, is_authenticated: bool) -> Self {
        match (probe, is_authenticated) {
            (Probe::Pending, _) => GateState::Pending,
            (Probe::Settled, true) => GateState::Authorized,
            (Probe::Settled, false) => GateState::Redirect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_probe_hides_children_either_way() {
        assert_eq!(GateState::resolve(Probe::Pending, false), GateState::Pending);
        assert_eq!(GateState::resolve(Probe::Pending, true), GateState::Pending);
    }

    #[test]
    fn test_unauthenticated_redirects_after_probe() {
        let probe = Probe::settle(Ok(SessionValidity { valid: false }));
        assert_eq!(GateState::resolve(probe, false), GateState::Redirect);
    }

    #[test]
    fn test_probe_error_defers_to_flag() {
        let probe = Probe::settle(Err(SessionCheckError::Network("offline".into())));
        assert_eq!(probe, Probe::Settled);
        assert_eq!(GateState::resolve(probe, true), GateState::Authorized);
        assert_eq!(GateState::resolve(probe, false), GateState::Redirect);
    }

    #[test]
    fn test_probe_result_does_not_override_flag() {
        // 確認がvalidでもフラグがfalseなら入れない
        let probe = Probe::settle(Ok(SessionValidity { valid: true }));
        assert_eq!(GateState::resolve(probe, false), GateState::Redirect);
    }

    #[test]
    fn test_session_validity_wire_format() {
        let validity: SessionValidity = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(validity.valid);
        let empty: SessionValidity = serde_json::from_str("{}").unwrap();
        assert!(!empty.valid);
    }
}
