//! Payment signature check for checkout callbacks.
//!
//! The gateway signs `order_id|payment_id` with HMAC-SHA256 under the key
//! secret and hands the lowercase hex digest to the client. Delimiter and
//! field order must match the gateway byte for byte.

use crate::error::PaymentError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

pub fn canonical_message(order_id: &str, payment_id: &str) -> String {
    format!("{}|{}", order_id, payment_id)
}

fn mac_for(order_id: &str, payment_id: &str, secret: &[u8]) -> Result<HmacSha256, PaymentError> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| PaymentError::Verification("could not initialise HMAC".to_string()))?;
    mac.update(canonical_message(order_id, payment_id).as_bytes());
    Ok(mac)
}

/// Hex signature the gateway would issue for this order/payment pair.
pub fn sign_payment(order_id: &str, payment_id: &str, secret: &[u8]) -> Result<String, PaymentError> {
    let mac = mac_for(order_id, payment_id, secret)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// `Ok(false)` unless `signature` is byte-for-byte the gateway's lowercase
/// hex digest. No trimming, no case folding.
pub fn verify_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &[u8],
) -> Result<bool, PaymentError> {
    let expected = hex::encode(mac_for(order_id, payment_id, secret)?.finalize().into_bytes());
    Ok(expected.as_bytes().ct_eq(signature.as_bytes()).unwrap_u8() == 1)
}
