use clap::Parser;
use paybridge::config::Config;
use paybridge::payments::PaymentService;
use paybridge::providers::ProviderService;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Charge a card through one payment provider family
#[derive(Debug, Parser)]
#[command(name = "paybridge", version)]
struct Args {
    /// Provider family to charge through (PagSeguro, MercadoPago, Stripe)
    provider: String,

    /// Payment amount
    amount: Decimal,

    /// Card number
    card_number: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paybridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting Paybridge payment demo");
    tracing::info!("Environment: {}", config.app.env);

    let providers = ProviderService::from_config(&config);
    let factory = providers.select(&args.provider)?;
    let service = PaymentService::new(factory);

    tracing::info!("Charging through provider: {}", service.provider());

    let outcome = service
        .process_payment(args.amount, &args.card_number)
        .await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
