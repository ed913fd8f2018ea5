use fivesim::{FiveSimClient, FiveSimClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client: FiveSimClient = FiveSimClientBuilder::from_env()?.build()?;
    let balance = client.balance().await?;
    println!(
        "balance: {}, rating: {}, frozen_balance: {}",
        balance.balance, balance.rating, balance.frozen_balance
    );

    Ok(())
}
