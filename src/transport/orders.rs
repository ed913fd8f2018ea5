use serde::Deserialize;
use serde_json::Value;

use super::request::ApiRequest;
use crate::domain::{BuyActivation, BuyHosting, OrderId, PhoneNumber, ProductName};

/// Resources starting with this prefix get their `status` field inspected.
pub const SMS_CHECK_PREFIX: &str = "user/check/";

/// Order state reported by `user/check/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsCheckStatus {
    Pending,
    Canceled,
    Timeout,
    Finished,
    Banned,
    Received { has_sms: bool },
    Other(String),
}

#[derive(Debug, Clone, Deserialize)]
struct SmsCheckJson {
    status: Value,
    #[serde(default)]
    sms: Option<Vec<Value>>,
}

pub fn encode_buy_activation(request: &BuyActivation) -> ApiRequest {
    let selector = &request.selector;
    let options = &request.options;
    ApiRequest::get(format!(
        "user/buy/activation/{}/{}/{}",
        selector.country(),
        selector.operator(),
        selector.product()
    ))
    .with_optional_query("forwarding", options.forwarding.as_deref())
    .with_optional_query("number", options.number.as_deref())
    .with_optional_query("reuse", options.reuse.as_deref())
    .with_optional_query("voice", options.voice.as_deref())
    .with_optional_query("ref", options.reference.as_deref())
    .with_optional_query("maxPrice", options.max_price.as_deref())
}

pub fn encode_buy_hosting(request: &BuyHosting) -> ApiRequest {
    let selector = &request.selector;
    ApiRequest::get(format!(
        "user/buy/hosting/{}/{}/{}",
        selector.country(),
        selector.operator(),
        selector.product()
    ))
}

pub fn encode_reuse(product: &ProductName, number: &PhoneNumber) -> ApiRequest {
    ApiRequest::get(format!(
        "user/reuse/{}/{}",
        product.as_str(),
        number.as_str()
    ))
}

pub fn encode_check_sms(id: &OrderId) -> ApiRequest {
    ApiRequest::get(format!("{SMS_CHECK_PREFIX}{id}"))
}

pub fn encode_finish(id: &OrderId) -> ApiRequest {
    ApiRequest::get(format!("user/finish/{id}"))
}

pub fn encode_cancel(id: &OrderId) -> ApiRequest {
    ApiRequest::get(format!("user/cancel/{id}"))
}

pub fn encode_ban(id: &OrderId) -> ApiRequest {
    ApiRequest::get(format!("user/ban/{id}"))
}

pub fn encode_sms_inbox(id: &OrderId) -> ApiRequest {
    ApiRequest::get(format!("user/sms/inbox/{id}"))
}

pub fn is_sms_check(resource: &str) -> bool {
    resource.starts_with(SMS_CHECK_PREFIX)
}

/// Read `status` (exact, case-sensitive) and, for `RECEIVED`, whether `sms` has entries.
///
/// Only a missing `status` key is an error; a non-string value is an unknown status.
pub fn decode_sms_check_status(order: &Value) -> Result<SmsCheckStatus, serde_json::Error> {
    let parsed = SmsCheckJson::deserialize(order)?;
    let status = match parsed.status {
        Value::String(status) => status,
        other => return Ok(SmsCheckStatus::Other(other.to_string())),
    };
    Ok(match status.as_str() {
        "PENDING" => SmsCheckStatus::Pending,
        "CANCELED" => SmsCheckStatus::Canceled,
        "TIMEOUT" => SmsCheckStatus::Timeout,
        "FINISHED" => SmsCheckStatus::Finished,
        "BANNED" => SmsCheckStatus::Banned,
        "RECEIVED" => SmsCheckStatus::Received {
            has_sms: parsed.sms.is_some_and(|sms| !sms.is_empty()),
        },
        _ => SmsCheckStatus::Other(status),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{ActivationOptions, NumberSelector};

    #[test]
    fn buy_activation_omits_unset_filters() {
        let product = ProductName::new("yahoo").unwrap();
        let request = encode_buy_activation(&BuyActivation::new(NumberSelector::new(
            "brazil", &product,
        )));
        assert_eq!(request.resource(), "user/buy/activation/brazil/any/yahoo");
        assert!(request.query().is_empty());
        assert!(request.body().is_none());
    }

    #[test]
    fn buy_activation_sends_set_filters_in_order() {
        let product = ProductName::new("telegram").unwrap();
        let request = encode_buy_activation(
            &BuyActivation::new(NumberSelector::new("russia", &product)).with_options(
                ActivationOptions {
                    reuse: Some("1".to_owned()),
                    voice: Some(String::new()),
                    reference: Some("partner".to_owned()),
                    max_price: Some("10".to_owned()),
                    ..Default::default()
                },
            ),
        );
        assert_eq!(
            request.query(),
            &[
                ("reuse".to_owned(), "1".to_owned()),
                ("ref".to_owned(), "partner".to_owned()),
                ("maxPrice".to_owned(), "10".to_owned()),
            ]
        );
    }

    #[test]
    fn order_paths() {
        let id = OrderId::from(42);
        assert_eq!(encode_check_sms(&id).resource(), "user/check/42");
        assert_eq!(encode_finish(&id).resource(), "user/finish/42");
        assert_eq!(encode_cancel(&id).resource(), "user/cancel/42");
        assert_eq!(encode_ban(&id).resource(), "user/ban/42");
        assert_eq!(encode_sms_inbox(&id).resource(), "user/sms/inbox/42");

        let product = ProductName::new("yahoo").unwrap();
        let number = PhoneNumber::new("79001234567").unwrap();
        assert_eq!(
            encode_reuse(&product, &number).resource(),
            "user/reuse/yahoo/79001234567"
        );
        assert_eq!(
            encode_buy_hosting(&BuyHosting::default()).resource(),
            "user/buy/hosting/any/any/any"
        );
    }

    #[test]
    fn sms_check_prefix_detection() {
        assert!(is_sms_check("user/check/1"));
        assert!(!is_sms_check("user/checkout"));
        assert!(!is_sms_check("user/profile"));
    }

    #[test]
    fn decode_status_variants() {
        let cases = [
            ("PENDING", SmsCheckStatus::Pending),
            ("CANCELED", SmsCheckStatus::Canceled),
            ("TIMEOUT", SmsCheckStatus::Timeout),
            ("FINISHED", SmsCheckStatus::Finished),
            ("BANNED", SmsCheckStatus::Banned),
            ("pending", SmsCheckStatus::Other("pending".to_owned())),
        ];
        for (status, expected) in cases {
            let order = json!({ "id": 1, "status": status, "sms": [] });
            assert_eq!(decode_sms_check_status(&order).unwrap(), expected);
        }
    }

    #[test]
    fn decode_received_checks_sms_list() {
        let empty = json!({ "status": "RECEIVED", "sms": [] });
        assert_eq!(
            decode_sms_check_status(&empty).unwrap(),
            SmsCheckStatus::Received { has_sms: false }
        );

        let missing = json!({ "status": "RECEIVED", "sms": null });
        assert_eq!(
            decode_sms_check_status(&missing).unwrap(),
            SmsCheckStatus::Received { has_sms: false }
        );

        let full = json!({ "status": "RECEIVED", "sms": [{ "code": "1234" }] });
        assert_eq!(
            decode_sms_check_status(&full).unwrap(),
            SmsCheckStatus::Received { has_sms: true }
        );
    }

    #[test]
    fn decode_requires_status_key() {
        assert!(decode_sms_check_status(&json!({ "sms": [] })).is_err());
        assert!(decode_sms_check_status(&json!("RECEIVED")).is_err());
    }

    #[test]
    fn decode_non_string_status_as_unknown() {
        let cases = [
            (json!({ "status": null, "sms": [] }), "null"),
            (json!({ "status": 5, "sms": [] }), "5"),
            (json!({ "status": ["RECEIVED"] }), r#"["RECEIVED"]"#),
        ];
        for (order, expected) in cases {
            assert_eq!(
                decode_sms_check_status(&order).unwrap(),
                SmsCheckStatus::Other(expected.to_owned())
            );
        }
    }
}
