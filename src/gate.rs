//! CLI版の認証ゲート
//!
//! セッション確認が終わるまではスピナーのみ。結果は参考情報で、
//! 判定は設定にトークンがあるかどうかだけで行う。
//! `session` コマンドだけは確認そのものの失敗もエラーとして報告する。

use crate::client::ApiClient;
use crate::error::{RecipeBookError, Result};
use crate::render::spinner;
use recipe_book_common::{GateState, Probe, SessionCheckError, SessionValidity};

type ProbeResult = std::result::Result<SessionValidity, SessionCheckError>;

/// 確認結果と認証フラグから通過可否を決める
pub fn decide(probe_result: ProbeResult, is_authenticated: bool) -> Result<()> {
    let probe = Probe::settle(probe_result);
    match GateState::resolve(probe, is_authenticated) {
        GateState::Authorized => Ok(()),
        GateState::Pending | GateState::Redirect => Err(RecipeBookError::NotAuthenticated),
    }
}

async fn probe(client: &ApiClient) -> ProbeResult {
    let progress = spinner("Verificando sessão...");
    let result = client.get_session_validity().await;
    progress.finish_and_clear();
    result
}

/// セッション確認を一度だけ行い、通過できなければエラー
pub async fn authorize(client: &ApiClient, is_authenticated: bool) -> Result<()> {
    decide(probe(client).await, is_authenticated)
}

/// 確認結果をそのまま報告する（確認の失敗もエラー）
pub fn report(probe_result: ProbeResult, is_authenticated: bool) -> Result<SessionValidity> {
    let validity = probe_result?;
    decide(Ok(validity), is_authenticated)?;
    Ok(validity)
}

/// `session` コマンド
pub async fn status(client: &ApiClient, is_authenticated: bool) -> Result<SessionValidity> {
    report(probe(client).await, is_authenticated)
}
