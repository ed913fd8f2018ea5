use serde::Deserialize;
use serde_json::{Value, json};

use super::number::TransportNumber;
use super::request::ApiRequest;
use crate::domain::{Balance, Category, ProductName};

const PROFILE: &str = "user/profile";
const MAX_PRICES: &str = "user/max-prices";

#[derive(Debug, Clone, Deserialize)]
struct BalanceJson {
    balance: TransportNumber,
    rating: TransportNumber,
    frozen_balance: TransportNumber,
}

pub fn encode_profile() -> ApiRequest {
    ApiRequest::get(PROFILE)
}

pub fn encode_order_history(category: Category) -> ApiRequest {
    ApiRequest::get("user/orders").with_query("category", category.as_str())
}

pub fn encode_payments() -> ApiRequest {
    ApiRequest::get("user/payments")
}

pub fn encode_max_prices() -> ApiRequest {
    ApiRequest::get(MAX_PRICES)
}

pub fn encode_set_max_price(product: &ProductName, price: f64) -> ApiRequest {
    ApiRequest::post(
        MAX_PRICES,
        json!({ "product_name": product.as_str(), "price": price }),
    )
}

pub fn encode_delete_max_price(product: &ProductName) -> ApiRequest {
    ApiRequest::delete(MAX_PRICES, Some(json!({ "product_name": product.as_str() })))
}

/// Project `balance`, `rating` and `frozen_balance` out of a profile object.
pub fn decode_balance(profile: &Value) -> Result<Balance, serde_json::Error> {
    let parsed = BalanceJson::deserialize(profile)?;
    Ok(Balance {
        balance: parsed.balance.into_f64(),
        rating: parsed.rating.into_f64(),
        frozen_balance: parsed.frozen_balance.into_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpMethod;

    #[test]
    fn order_history_sends_category() {
        let request = encode_order_history(Category::Activation);
        assert_eq!(request.resource(), "user/orders");
        assert_eq!(
            request.query(),
            &[("category".to_owned(), "activation".to_owned())]
        );
    }

    #[test]
    fn max_price_requests_carry_product_body() {
        let product = ProductName::new("yahoo").unwrap();

        let set = encode_set_max_price(&product, 10.5);
        assert_eq!(set.method(), HttpMethod::Post);
        assert_eq!(
            set.body(),
            Some(&json!({ "product_name": "yahoo", "price": 10.5 }))
        );

        let delete = encode_delete_max_price(&product);
        assert_eq!(delete.method(), HttpMethod::Delete);
        assert_eq!(delete.resource(), "user/max-prices");
        assert_eq!(delete.body(), Some(&json!({ "product_name": "yahoo" })));
    }

    #[test]
    fn decode_balance_projects_three_fields() {
        let profile = json!({
            "id": 1,
            "email": "user@example.com",
            "balance": 100.5,
            "rating": 96,
            "frozen_balance": "2.25",
            "default_country": { "name": "russia" }
        });
        let balance = decode_balance(&profile).unwrap();
        assert_eq!(
            balance,
            Balance {
                balance: 100.5,
                rating: 96.0,
                frozen_balance: 2.25,
            }
        );
    }

    #[test]
    fn decode_balance_requires_all_fields() {
        let profile = json!({ "balance": 1, "rating": 2 });
        assert!(decode_balance(&profile).is_err());
    }
}
