use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Device family the customer is shopping from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Ios,
    Android,
    #[default]
    Other,
}

impl From<&str> for DeviceClass {
    fn from(value: &str) -> Self {
        match value {
            "ios" => DeviceClass::Ios,
            "android" => DeviceClass::Android,
            _ => DeviceClass::Other,
        }
    }
}

// Unknown, null or non-string devices map to `Other` instead of failing the request.
impl<'de> Deserialize<'de> for DeviceClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = lenient(deserializer)?;
        Ok(raw.as_deref().map(DeviceClass::from).unwrap_or_default())
    }
}

/// Reads an optional field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Valid(T),
        Invalid(IgnoredAny),
    }

    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Valid(value) => Some(value),
        Lenient::Invalid(_) => None,
    })
}

/// What is known about the paying customer. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerProfile {
    #[serde(deserialize_with = "lenient")]
    pub age: Option<u32>,
    /// ISO region code, e.g. `US` or `EU`.
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    pub device: DeviceClass,
    /// Opaque payment history. Not used for scoring.
    pub previous_payments: Option<serde_json::Value>,
}
