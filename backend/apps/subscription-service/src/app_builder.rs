//! # アプリケーション構築
//!
//! ルーター定義とレイヤー構成を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};
use subcheck_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        ReadinessState,
        SubscriptionTaskState,
        health_check,
        list_subscription_tasks,
        not_found,
        readiness_check,
        verify_subscription,
    },
    middleware::cors,
    usecase::SubscriptionTaskUseCase,
};

/// ルーターを構築する
///
/// 既知のパスに対する未対応メソッドも含め、ルートに一致しない
/// リクエストは全てプレーンテキストの 404 になる。
/// axum の `get` は HEAD にも応答するため、HEAD は明示的に 404 へ振り分ける。
pub fn build_app(
    usecase: Arc<dyn SubscriptionTaskUseCase>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    let task_state = Arc::new(SubscriptionTaskState { usecase });

    Router::new()
        .route("/health", get(health_check).head(not_found).fallback(not_found))
        .merge(
            Router::new()
                .route(
                    "/health/ready",
                    get(readiness_check).head(not_found).fallback(not_found),
                )
                .with_state(readiness_state),
        )
        .route(
            "/api/subscription-tasks",
            get(list_subscription_tasks).head(not_found).fallback(not_found),
        )
        .route(
            "/api/subscriptions/tasks/{id}",
            get(verify_subscription).head(not_found).fallback(not_found),
        )
        .with_state(task_state)
        .fallback(not_found)
        // レイヤー順序: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. CanonicalLogLineLayer: リクエスト完了時に 1 行サマリログを出力
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 5. cors: OPTIONS への応答と CORS ヘッダーの付与
        .layer(from_fn(cors))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
