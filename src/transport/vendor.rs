use serde_json::json;

use super::request::ApiRequest;
use crate::domain::{Category, VendorWithdraw};

pub fn encode_vendor_statistics() -> ApiRequest {
    ApiRequest::get("user/vendor")
}

pub fn encode_vendor_wallets() -> ApiRequest {
    ApiRequest::get("vendor/wallets")
}

pub fn encode_vendor_orders(category: Category) -> ApiRequest {
    ApiRequest::get("vendor/orders").with_query("category", category.as_str())
}

pub fn encode_vendor_payments() -> ApiRequest {
    ApiRequest::get("vendor/payments")
}

pub fn encode_vendor_withdraw(request: &VendorWithdraw) -> ApiRequest {
    ApiRequest::post(
        "vendor/withdraw",
        json!({
            "receiver": request.receiver,
            "method": request.method,
            "amount": request.amount,
            "fee": request.fee,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpMethod;

    #[test]
    fn withdraw_posts_all_fields() {
        let request = encode_vendor_withdraw(&VendorWithdraw {
            receiver: "79001234567".to_owned(),
            method: "qiwi".to_owned(),
            amount: "100".to_owned(),
            fee: "fkwallet".to_owned(),
        });
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.resource(), "vendor/withdraw");
        assert_eq!(
            request.body(),
            Some(&json!({
                "receiver": "79001234567",
                "method": "qiwi",
                "amount": "100",
                "fee": "fkwallet",
            }))
        );
    }

    #[test]
    fn vendor_orders_sends_category() {
        let request = encode_vendor_orders(Category::Hosting);
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(
            request.query(),
            &[("category".to_owned(), "hosting".to_owned())]
        );
    }
}
