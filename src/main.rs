use anyhow::Context;
use stockroom_fixtures::config::{Config, LogFormat};
use stockroom_fixtures::core::entity_id;
use stockroom_fixtures::fixtures::FixtureContext;
use stockroom_fixtures::modules::products::{ProductCategoryRequest, ProductRequest};
use stockroom_fixtures::modules::purchases::{
    PurchaseOrderItemRequest, PurchaseOrderRequest, PurchaseOrderStatus,
};
use stockroom_fixtures::modules::vendors::VendorRequest;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing; RUST_LOG overrides LOG_LEVEL
    let level = &config.app.log_level;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("stockroom_fixtures={level},stockroom_smoke={level}").into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting stockroom smoke journey");
    tracing::info!("Backend: {}", config.api.api_url(""));

    let mut ctx = FixtureContext::from_config(&config.api)?;
    ctx.bootstrap(&config.identity)
        .await
        .context("Session bootstrap failed")?;

    let journey = run_journey(&mut ctx).await;

    // Tear down whatever was created, even when the journey failed midway
    let teardown = ctx.teardown().await;

    journey?;
    let deleted = teardown.context("Fixture teardown failed")?;
    tracing::info!("Smoke journey passed ({} fixtures cleaned up)", deleted);

    Ok(())
}

async fn run_journey(ctx: &mut FixtureContext) -> anyhow::Result<()> {
    let category = ctx
        .products()
        .create_category(&ProductCategoryRequest {
            name: "Smoke Category".to_string(),
            ..Default::default()
        })
        .await?;
    let category_id = entity_id(&category).context("category has no id")?;

    let product = ctx
        .products()
        .create(&ProductRequest::expensive(&category_id))
        .await?;
    let product_id = entity_id(&product).context("product has no id")?;

    let vendor = ctx
        .vendors()
        .create(&VendorRequest {
            name: "Smoke Vendor".to_string(),
            ..Default::default()
        })
        .await?;
    let vendor_id = entity_id(&vendor).context("vendor has no id")?;

    let order = ctx
        .purchase_orders()
        .create(
            "Smoke Purchase Order",
            &PurchaseOrderRequest::new(
                vendor_id,
                vec![PurchaseOrderItemRequest::new(product_id, 5)],
            ),
        )
        .await?;
    let order_id = entity_id(&order).context("purchase order has no id")?;

    let updated = ctx
        .purchase_orders()
        .update_status(&order_id, PurchaseOrderStatus::Ordered.as_str())
        .await?
        .context("status update was skipped")?;

    anyhow::ensure!(
        updated["status"] == PurchaseOrderStatus::Ordered.as_str(),
        "purchase order status is {}, expected ordered",
        updated["status"]
    );

    Ok(())
}
