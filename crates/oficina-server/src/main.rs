use sqlx::PgPool;

use oficina_server::auth::AuthConfig;
use oficina_server::{routes, AppState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🔧 Oficina API initializing...");

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    let auth = AuthConfig::new(
        secrets.get("JWT_SECRET"),
        secrets.get("ADMIN_USERNAME"),
        secrets.get("ADMIN_PASSWORD"),
    );

    let state = AppState::new(pool, auth);
    let router = routes::router(state);

    tracing::info!("🚀 Oficina API ready, docs at /api-docs");

    Ok(router.into())
}
