use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::{
    config::LiqPayKeys,
    dto::payments::CheckoutResponse,
    error::{AppError, AppResult},
};

pub const CHECKOUT_URL: &str = "https://www.liqpay.ua/api/3/checkout";
pub const DEFAULT_DESCRIPTION: &str = "Оплата замовлення PlatanSad";

/// Callback statuses that mean the money was taken.
const PAID_STATUSES: &[&str] = &["success", "sandbox"];

/// Field order matters: the signature covers the exact encoded bytes.
#[derive(Debug, Serialize)]
struct CheckoutParams<'a> {
    public_key: &'a str,
    version: &'static str,
    action: &'static str,
    amount: String,
    currency: &'static str,
    description: &'a str,
    order_id: &'a str,
    sandbox: &'static str,
    language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    server_url: Option<&'a str>,
}

#[derive(Debug)]
pub struct CheckoutRequest<'a> {
    pub order_id: &'a str,
    pub amount: f64,
    pub description: Option<&'a str>,
    pub result_url: Option<&'a str>,
    pub server_url: Option<&'a str>,
}

/// Decoded callback document. Only the fields the shop acts on are kept.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackPayload {
    pub order_id: Option<String>,
    pub status: Option<String>,
}

impl CallbackPayload {
    pub fn is_paid(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| PAID_STATUSES.contains(&status))
    }
}

/// Sandbox LiqPay signer.
#[derive(Debug, Clone)]
pub struct LiqPayClient {
    public_key: String,
    private_key: String,
}

impl LiqPayClient {
    pub fn new(keys: &LiqPayKeys) -> Self {
        Self {
            public_key: keys.public_key.clone(),
            private_key: keys.private_key.clone(),
        }
    }

    /// `base64(sha1(private_key + data + private_key))`
    pub fn sign(&self, data: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(self.private_key.as_bytes());
        hasher.update(data.as_bytes());
        hasher.update(self.private_key.as_bytes());
        general_purpose::STANDARD.encode(hasher.finalize())
    }

    pub fn checkout(&self, request: CheckoutRequest<'_>) -> AppResult<CheckoutResponse> {
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }
        if request.order_id.trim().is_empty() {
            return Err(AppError::BadRequest("order_id is required".into()));
        }

        let params = CheckoutParams {
            public_key: &self.public_key,
            version: "3",
            action: "pay",
            amount: format_amount(request.amount),
            currency: "UAH",
            description: request.description.unwrap_or(DEFAULT_DESCRIPTION),
            order_id: request.order_id,
            sandbox: "1",
            language: "uk",
            result_url: request.result_url.filter(|url| !url.is_empty()),
            server_url: request.server_url.filter(|url| !url.is_empty()),
        };

        let json = serde_json::to_string(&params)?;
        let data = general_purpose::STANDARD.encode(json.as_bytes());
        let signature = self.sign(&data);

        Ok(CheckoutResponse {
            data,
            signature,
            checkout_url: CHECKOUT_URL.to_string(),
        })
    }

    pub fn verify(&self, data: &str, signature: &str) -> bool {
        !signature.is_empty() && self.sign(data) == signature
    }

    pub fn decode(&self, data: &str) -> AppResult<CallbackPayload> {
        let bytes = general_purpose::STANDARD
            .decode(data)
            .map_err(|_| AppError::BadRequest("Invalid callback data".into()))?;
        serde_json::from_slice(&bytes)
            .map_err(|_| AppError::BadRequest("Invalid callback data".into()))
    }
}

/// Whole amounts keep one decimal place (`100.0`), others print as is.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> LiqPayClient {
        LiqPayClient::new(&LiqPayKeys::default())
    }

    #[test]
    fn checkout_data_is_compact_ordered_json() {
        let client = client();
        let resp = client
            .checkout(CheckoutRequest {
                order_id: "order-1",
                amount: 250.0,
                description: None,
                result_url: None,
                server_url: Some("https://shop.example/api/liqpay/callback"),
            })
            .expect("checkout");

        let raw = general_purpose::STANDARD.decode(&resp.data).expect("base64");
        let json = String::from_utf8(raw).expect("utf8");
        assert!(json.starts_with(r#"{"public_key":"sandbox_i00000000000","version":"3","action":"pay","amount":"250.0","currency":"UAH""#));
        assert!(json.contains(r#""sandbox":"1","language":"uk""#));
        assert!(json.contains(DEFAULT_DESCRIPTION));
        assert!(!json.contains("result_url"));
        assert!(json.ends_with(r#""server_url":"https://shop.example/api/liqpay/callback"}"#));
        assert_eq!(resp.signature, client.sign(&resp.data));
        assert_eq!(resp.checkout_url, CHECKOUT_URL);
    }

    #[test]
    fn signature_verification_detects_tampering() {
        let client = client();
        let data = general_purpose::STANDARD.encode(r#"{"order_id":"o1","status":"success"}"#);
        let signature = client.sign(&data);
        assert!(client.verify(&data, &signature));
        assert!(!client.verify(&data, "forged"));
        assert!(!client.verify(&data, ""));

        let other = LiqPayClient {
            public_key: "pub".into(),
            private_key: "another".into(),
        };
        assert!(!other.verify(&data, &signature));
    }

    #[test]
    fn decodes_callback_payload() {
        let client = client();
        let data = general_purpose::STANDARD
            .encode(r#"{"order_id":"o1","status":"sandbox","amount":10}"#);
        let payload = client.decode(&data).expect("payload");
        assert_eq!(payload.order_id.as_deref(), Some("o1"));
        assert!(payload.is_paid());

        assert!(client.decode("%%%").is_err());
        let failure = CallbackPayload {
            order_id: None,
            status: Some("failure".into()),
        };
        assert!(!failure.is_paid());
    }

    #[test]
    fn amount_formatting() {
        assert_eq!(format_amount(100.0), "100.0");
        assert_eq!(format_amount(99.5), "99.5");
    }

    #[test]
    fn rejects_non_positive_amount() {
        let result = client().checkout(CheckoutRequest {
            order_id: "o1",
            amount: 0.0,
            description: None,
            result_url: None,
            server_url: None,
        });
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
