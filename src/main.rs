use std::sync::Arc;

use anyhow::Result;
use publish_guard::{
    application::{
        ports::{
            authorization::AuthorizationOracle,
            content::{ItemStore, LanguageRegistry},
            identity::IdentityProvider,
            time::Clock,
        },
        security::with_security_disabled,
        services::{CheckSecurity, PublishAuthorizationGate, PublishItemPipeline},
    },
    config::AppConfig,
    infrastructure::{plan::PublishPlan, time::SystemClock},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut config = AppConfig::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_plan_path(path);
    }

    let plan = PublishPlan::load(config.plan_path())?;
    let settings = plan.settings_or(config.publishing());
    tracing::info!(
        plan = %config.plan_path().display(),
        check_security = settings.check_security,
        require_target_delete_right = settings.require_target_delete_right,
        items = plan.publish.len(),
        "starting dry-run publish"
    );

    let store = Arc::new(plan.item_store());
    let item_store: Arc<dyn ItemStore> = Arc::clone(&store) as Arc<dyn ItemStore>;
    let languages: Arc<dyn LanguageRegistry> = store;
    let oracle: Arc<dyn AuthorizationOracle> = Arc::new(plan.oracle());
    let identities: Arc<dyn IdentityProvider> = Arc::new(plan.identity_provider());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let gate = Arc::new(PublishAuthorizationGate::new(oracle, languages, settings));
    let pipeline = Arc::new(
        PublishItemPipeline::new(clock)
            .with_processor(Arc::new(CheckSecurity::new(gate, identities, item_store))),
    );

    // Content is read with security disabled; the gate re-enables it for its
    // own rights queries.
    let report =
        with_security_disabled(pipeline.run_batch(plan.publish.clone(), plan.options())).await;
    tracing::info!(
        published = report.published,
        skipped = report.skipped,
        failed = report.failed,
        "dry-run publish finished"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
