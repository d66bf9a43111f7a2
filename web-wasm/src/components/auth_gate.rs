//! 認証ゲート
//!
//! マウント時にセッション確認を一度だけ投げ、終わるまではローディングのみ表示。
//! 子要素はまだマウントしないので、保護されたページの取得処理も走らない。

use crate::api::get_session_validity;
use crate::auth::use_auth;
use crate::components::loading::Loading;
use crate::components::redirect::Redirect;
use crate::config::WebConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_book_common::{GateState, Probe, AUTH_ERROR_PATH};

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<WebConfig>();
    let (probe, set_probe) = signal(Probe::Pending);

    spawn_local(async move {
        let settled = Probe::settle(get_session_validity(&config).await);
        // アンマウント済みなら捨てる
        let _ = set_probe.try_set(settled);
    });

    let state = Memo::new(move |_| GateState::resolve(probe.get(), auth.is_authenticated.get()));

    move || match state.get() {
        GateState::Pending => view! { <Loading /> }.into_any(),
        GateState::Authorized => children().into_any(),
        GateState::Redirect => view! { <Redirect path=AUTH_ERROR_PATH /> }.into_any(),
    }
}
