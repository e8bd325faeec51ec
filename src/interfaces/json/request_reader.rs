use crate::domain::order::OrderData;
use crate::domain::profile::CustomerProfile;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

pub const MISSING_ORDER_DATA: &str = "Missing required order data";

/// Body of a checkout call: `{"orderData": {...}, "userProfile": {...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub order_data: Option<OrderData>,
    #[serde(default)]
    pub user_profile: Option<CustomerProfile>,
}

impl CheckoutRequest {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Checks the fields the orchestrator relies on and splits the request.
    ///
    /// A missing profile is treated as an empty one.
    pub fn into_validated(self) -> Result<(OrderData, CustomerProfile)> {
        let order = self
            .order_data
            .filter(|order| !order.items.is_empty() && !order.customer_email.trim().is_empty())
            .ok_or_else(|| PaymentError::ValidationError(MISSING_ORDER_DATA.to_string()))?;
        Ok((order, self.user_profile.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::DeviceClass;

    #[test]
    fn test_valid_request() {
        let body = r#"{
            "orderData": {
                "total": 120,
                "currency": "EUR",
                "items": [{"variantId": 1, "quantity": 1}],
                "customerEmail": "jane@example.com"
            },
            "userProfile": {"age": 28, "device": "android"}
        }"#;
        let (order, profile) = CheckoutRequest::from_reader(body.as_bytes())
            .unwrap()
            .into_validated()
            .unwrap();

        assert_eq!(order.currency, "EUR");
        assert_eq!(profile.age, Some(28));
        assert_eq!(profile.device, DeviceClass::Android);
    }

    #[test]
    fn test_missing_profile_defaults() {
        let body = r#"{"orderData": {"total": 1, "items": [{"variantId": 1, "quantity": 1}], "customerEmail": "a@b.c"}}"#;
        let (_, profile) = CheckoutRequest::from_reader(body.as_bytes())
            .unwrap()
            .into_validated()
            .unwrap();
        assert_eq!(profile, CustomerProfile::default());
    }

    #[test]
    fn test_rejects_incomplete_orders() {
        let bodies = [
            r#"{}"#,
            r#"{"orderData": {"total": 1, "customerEmail": "a@b.c"}}"#,
            r#"{"orderData": {"total": 1, "items": [], "customerEmail": "a@b.c"}}"#,
            r#"{"orderData": {"total": 1, "items": [{"variantId": 1, "quantity": 1}]}}"#,
            r#"{"orderData": {"total": 1, "items": [{"variantId": 1, "quantity": 1}], "customerEmail": "  "}}"#,
        ];
        for body in bodies {
            let result = CheckoutRequest::from_reader(body.as_bytes())
                .unwrap()
                .into_validated();
            assert!(
                matches!(&result, Err(PaymentError::ValidationError(msg)) if msg == MISSING_ORDER_DATA),
                "{body}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CheckoutRequest::from_reader("{not json".as_bytes()),
            Err(PaymentError::JsonError(_))
        ));
    }
}
