//! # Subscription Service サーバー
//!
//! Telegram Mini App から呼び出されるタスク達成検証 API。
//!
//! ## 起動方法
//!
//! ```bash
//! SUBSCRIPTION_PORT=8080 DATABASE_URL=postgres://localhost/subcheck \
//!     cargo run -p subcheck-subscription-service
//! ```
//!
//! 設定項目は [`config`] を参照。

mod config;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use config::SubscriptionConfig;
use subcheck_infra::{
    TelegramApiClient,
    db,
    repository::{PostgresSubscriptionTaskRepository, PostgresUserSubscriptionRepository},
};
use subcheck_shared::observability::{TracingConfig, init_tracing};
use subcheck_subscription_service::{
    build_app,
    handler::ReadinessState,
    usecase::SubscriptionTaskUseCaseImpl,
};
use tokio::net::TcpListener;

/// Subscription Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("subscription-service");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = SubscriptionConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Subscription Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    let usecase = SubscriptionTaskUseCaseImpl::new(
        Arc::new(PostgresSubscriptionTaskRepository::new(pool.clone())),
        Arc::new(PostgresUserSubscriptionRepository::new(pool)),
        Arc::new(TelegramApiClient::new(&config.telegram_api_base_url)),
    );

    let app = build_app(Arc::new(usecase), readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Subscription Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
