//! Buys one activation number, checks it for an SMS once and cancels it.
//!
//! Set `RUST_LOG=fivesim=debug` to see every request/response pair.

use fivesim::{
    ActivationOptions, BuyActivation, Category, FiveSimClientBuilder, FiveSimError,
    NumberSelector, OrderId, PriceFilter, ProductName, country_name,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = FiveSimClientBuilder::from_env()?.build()?;
    let iso = std::env::var("FIVESIM_COUNTRY").unwrap_or_else(|_| "BR".to_owned());
    let country = country_name(&iso)?;
    let product = ProductName::new(
        std::env::var("FIVESIM_PRODUCT").unwrap_or_else(|_| "yahoo".to_owned()),
    )?;

    println!("balance: {:?}", client.balance().await?);
    println!(
        "activation orders: {}",
        client.order_history(Category::Activation).await?
    );
    let prices = client
        .prices(&PriceFilter {
            country: Some(country.to_owned()),
            product: Some(product.as_str().to_owned()),
        })
        .await?;
    println!("prices: {prices}");

    let request = BuyActivation::new(NumberSelector::new(country, &product)).with_options(
        ActivationOptions {
            max_price: Some("10".to_owned()),
            ..Default::default()
        },
    );
    let order = match client.buy_activation_number(&request).await {
        Ok(order) => order,
        Err(FiveSimError::NoNumbersAvailable) => {
            println!("no free phones for {product:?} in {country}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!("order: {order}");

    let id = order["id"]
        .as_u64()
        .map(OrderId::from)
        .ok_or("order response has no numeric id")?;
    match client.check_sms(&id).await {
        Ok(order) => println!("sms: {}", order["sms"]),
        Err(err) if err.is_sms_pending() => println!("no SMS yet"),
        Err(err) => println!("check failed: {err}"),
    }
    println!("cancel: {}", client.cancel_order(&id).await?);

    Ok(())
}
