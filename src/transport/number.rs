use serde::Deserialize;
use serde::de::Error as DeError;

/// Numeric field returned by 5sim as either a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportNumber(f64);

impl TransportNumber {
    pub fn into_f64(self) -> f64 {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

impl<'de> Deserialize<'de> for TransportNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(value) => Ok(Self(value)),
            NumberOrString::String(value) => value
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected numeric string, got {value:?}"))),
        }
    }
}
