//! Typed async Rust client for the 5sim.net SMS-activation API.
//!
//! The crate has three layers: a domain layer of strong types, a transport
//! layer describing each API call on the wire, and a small client layer that
//! sends requests and turns responses into `Result`s.
//!
//! Business states such as "no SMS yet" or "order cancelled" are variants of
//! [`FiveSimError`], so callers match on the outcome they care about:
//!
//! ```rust,no_run
//! use fivesim::{ApiToken, BuyActivation, FiveSimClient, NumberSelector, OrderId, ProductName};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FiveSimClient::new(ApiToken::new("...")?);
//!     let product = ProductName::new("telegram")?;
//!     let order = client
//!         .buy_activation_number(&BuyActivation::new(NumberSelector::new("brazil", &product)))
//!         .await?;
//!     let id = order["id"].as_u64().map(OrderId::from).ok_or("missing order id")?;
//!     match client.check_sms(&id).await {
//!         Ok(order) => println!("sms: {}", order["sms"]),
//!         Err(err) if err.is_sms_pending() => println!("nothing yet, poll again"),
//!         Err(err) => return Err(err.into()),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{FiveSimClient, FiveSimClientBuilder, FiveSimError};
pub use domain::{
    ANY, ActivationOptions, ApiToken, Balance, BuyActivation, BuyHosting, Category, Language,
    NumberSelector, OrderId, PhoneNumber, PriceFilter, ProductName, ValidationError,
    VendorWithdraw, country_name, iso_country,
};
pub use transport::{ApiRequest, HttpMethod};
