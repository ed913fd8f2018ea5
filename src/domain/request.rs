use crate::domain::value::{ANY, ProductName};

/// Order category accepted by the order history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hosting,
    Activation,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hosting => "hosting",
            Self::Activation => "activation",
        }
    }
}

/// Language of the guest notification feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

/// Country / operator / product triple used in buy and catalog paths.
///
/// Every part defaults to `any`. Blank values are normalized to `any`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSelector {
    country: String,
    operator: String,
    product: String,
}

impl Default for NumberSelector {
    fn default() -> Self {
        Self {
            country: ANY.to_owned(),
            operator: ANY.to_owned(),
            product: ANY.to_owned(),
        }
    }
}

impl NumberSelector {
    /// Select a product in a country, on any operator.
    pub fn new(country: impl Into<String>, product: &ProductName) -> Self {
        Self::default()
            .with_country(country)
            .with_product(product.as_str())
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = or_any(country.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = or_any(operator.into());
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = or_any(product.into());
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn product(&self) -> &str {
        &self.product
    }
}

/// Filters for `guest/prices`. Unset or `any` values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceFilter {
    pub country: Option<String>,
    pub product: Option<String>,
}

/// Optional filters for buying an activation number.
///
/// `reuse` and `voice` are forwarded verbatim; the service defines their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationOptions {
    pub forwarding: Option<String>,
    pub number: Option<String>,
    pub reuse: Option<String>,
    pub voice: Option<String>,
    pub reference: Option<String>,
    pub max_price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyActivation {
    pub selector: NumberSelector,
    pub options: ActivationOptions,
}

impl BuyActivation {
    pub fn new(selector: NumberSelector) -> Self {
        Self {
            selector,
            options: ActivationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ActivationOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyHosting {
    pub selector: NumberSelector,
}

/// Vendor payout request. Amounts are passed through as the service expects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorWithdraw {
    pub receiver: String,
    pub method: String,
    pub amount: String,
    pub fee: String,
}

fn or_any(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        ANY.to_owned()
    } else {
        trimmed.to_owned()
    }
}
