use super::request::ApiRequest;
use crate::domain::{ANY, Language, NumberSelector, PriceFilter};

pub fn encode_products(selector: &NumberSelector) -> ApiRequest {
    ApiRequest::get(format!(
        "guest/products/{}/{}",
        selector.country(),
        selector.operator()
    ))
}

pub fn encode_prices(filter: &PriceFilter) -> ApiRequest {
    ApiRequest::get("guest/prices")
        .with_optional_query("country", selected(filter.country.as_deref()))
        .with_optional_query("product", selected(filter.product.as_deref()))
}

pub fn encode_notifications(lang: Language) -> ApiRequest {
    ApiRequest::get(format!("guest/flash/{}", lang.as_str()))
}

pub fn encode_countries() -> ApiRequest {
    ApiRequest::get("guest/countries")
}

/// `any` means "no filter" for the prices endpoint.
fn selected(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| *value != ANY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_path_uses_selector() {
        let selector = NumberSelector::default().with_country("brazil");
        assert_eq!(
            encode_products(&selector).resource(),
            "guest/products/brazil/any"
        );
    }

    #[test]
    fn prices_omits_any_and_missing_filters() {
        let request = encode_prices(&PriceFilter::default());
        assert!(request.query().is_empty());

        let request = encode_prices(&PriceFilter {
            country: Some("any".to_owned()),
            product: Some("yahoo".to_owned()),
        });
        assert_eq!(
            request.query(),
            &[("product".to_owned(), "yahoo".to_owned())]
        );

        let request = encode_prices(&PriceFilter {
            country: Some("brazil".to_owned()),
            product: Some("yahoo".to_owned()),
        });
        assert_eq!(
            request.query(),
            &[
                ("country".to_owned(), "brazil".to_owned()),
                ("product".to_owned(), "yahoo".to_owned()),
            ]
        );
    }

    #[test]
    fn notifications_path_uses_language() {
        assert_eq!(
            encode_notifications(Language::Ru).resource(),
            "guest/flash/ru"
        );
    }
}
