use std::fmt;

use crate::domain::validation::ValidationError;

/// Wildcard accepted by 5sim for country, operator and product path segments.
pub const ANY: &str = "any";

#[derive(Clone, PartialEq, Eq, Hash)]
/// 5sim API bearer token.
///
/// Sent exactly as given; only blank tokens are rejected. `Debug` never prints the secret.
pub struct ApiToken(String);

impl ApiToken {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "token";

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Order id returned by the buy endpoints (`id` field).
///
/// Invariant: non-empty after trimming.
pub struct OrderId(String);

impl OrderId {
    pub const FIELD: &'static str = "id";

    /// Create a validated [`OrderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated order id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Product (service) name such as `telegram` or `yahoo`.
///
/// Invariant: non-empty after trimming.
pub struct ProductName(String);

impl ProductName {
    pub const FIELD: &'static str = "product_name";

    /// Create a validated [`ProductName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number as the service prints it (digits, no formatting applied).
///
/// Invariant: non-empty after trimming.
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const FIELD: &'static str = "number";

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
