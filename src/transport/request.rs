use serde_json::Value;
use url::Url;

/// HTTP method chosen for an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// One logical call against the 5sim API.
///
/// `resource` is appended to the client's base URL verbatim. Query pairs keep
/// insertion order and are only sent when at least one is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    resource: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    delete: bool,
}

impl ApiRequest {
    /// A request without body; sent as GET.
    pub fn get(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            query: Vec::new(),
            body: None,
            delete: false,
        }
    }

    /// A request with a JSON body; sent as POST.
    pub fn post(resource: impl Into<String>, body: Value) -> Self {
        Self {
            body: Some(body),
            ..Self::get(resource)
        }
    }

    /// A deletion; sent as DELETE with the body if one is given.
    pub fn delete(resource: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            body,
            delete: true,
            ..Self::get(resource)
        }
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter only when `value` is present and non-empty.
    pub fn with_optional_query(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with_query(key, value),
            _ => self,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// DELETE wins over POST; POST is used whenever a body is present.
    pub fn method(&self) -> HttpMethod {
        if self.delete {
            HttpMethod::Delete
        } else if self.body.is_some() {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        }
    }

    /// Absolute URL: `base_url + resource`, plus the encoded query.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{base_url}{}", self.resource))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const BASE: &str = "https://5sim.net/v1/";

    #[test]
    fn method_selection() {
        assert_eq!(ApiRequest::get("user/profile").method(), HttpMethod::Get);
        assert_eq!(
            ApiRequest::post("vendor/withdraw", json!({})).method(),
            HttpMethod::Post
        );
        assert_eq!(
            ApiRequest::delete("user/max-prices", Some(json!({}))).method(),
            HttpMethod::Delete
        );
        assert_eq!(
            ApiRequest::delete("user/max-prices", None).method(),
            HttpMethod::Delete
        );
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let url = ApiRequest::get("guest/prices").url(BASE).unwrap();
        assert_eq!(url.as_str(), "https://5sim.net/v1/guest/prices");
    }

    #[test]
    fn url_encodes_query_in_insertion_order() {
        let url = ApiRequest::get("guest/prices")
            .with_query("product", "a b&c")
            .with_query("country", "brazil")
            .url(BASE)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://5sim.net/v1/guest/prices?product=a+b%26c&country=brazil"
        );
    }

    #[test]
    fn optional_query_skips_missing_and_empty_values() {
        let request = ApiRequest::get("x")
            .with_optional_query("a", None)
            .with_optional_query("b", Some(""))
            .with_optional_query("c", Some("1"));
        assert_eq!(request.query(), &[("c".to_owned(), "1".to_owned())]);
    }

    #[test]
    fn url_rejects_invalid_base() {
        assert!(ApiRequest::get("user/profile").url("not a url/").is_err());
    }
}
