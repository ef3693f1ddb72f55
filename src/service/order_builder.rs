use crate::domain::payment::PaymentInitRequest;
use crate::error::PaymentError;
use crate::gateways::OrderPayload;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

pub const RECEIPT_PREFIX: &str = "txn_";
pub const MAX_RECEIPT_LEN: usize = 40;
/// The gateway stores order amounts as a signed 32-bit integer.
pub const MAX_AMOUNT_MINOR: i64 = i32::MAX as i64;

/// How sub-minor-unit digits are resolved when converting to minor units.
/// Amounts with at most two fractional digits convert exactly under both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MinorUnitRounding {
    /// Toward zero: 10.019 becomes 1001.
    #[default]
    Truncate,
    /// Banker's rounding: 10.005 becomes 1000, 10.015 becomes 1002.
    HalfEven,
}

impl MinorUnitRounding {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Some(Self::Truncate),
            "half_even" | "bankers" => Some(Self::HalfEven),
            _ => None,
        }
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Truncate => RoundingStrategy::ToZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

pub fn normalize_amount(amount: Decimal, rounding: MinorUnitRounding) -> Result<i64, PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidAmount(format!("amount must be > 0, got {}", amount)));
    }

    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| PaymentError::InvalidAmount("amount overflows minor units".to_string()))?
        .round_dp_with_strategy(0, rounding.strategy());

    let minor = minor
        .to_i64()
        .filter(|m| *m <= MAX_AMOUNT_MINOR)
        .ok_or_else(|| {
            PaymentError::InvalidAmount(format!("amount {} exceeds gateway maximum", amount))
        })?;

    if minor == 0 {
        return Err(PaymentError::InvalidAmount(format!(
            "amount {} is below one minor unit",
            amount
        )));
    }
    Ok(minor)
}

pub fn generate_receipt() -> String {
    format!("{}{}", RECEIPT_PREFIX, uuid::Uuid::new_v4())
}

fn resolve_receipt(receipt_id: Option<&str>) -> Result<String, PaymentError> {
    match receipt_id {
        None => Ok(generate_receipt()),
        Some(r) if r.trim().is_empty() => {
            Err(PaymentError::Validation("receiptId must not be blank".to_string()))
        }
        Some(r) if r.chars().count() > MAX_RECEIPT_LEN => Err(PaymentError::Validation(format!(
            "receiptId must be at most {} characters",
            MAX_RECEIPT_LEN
        ))),
        Some(r) => Ok(r.to_string()),
    }
}

fn validate_currency(currency: &str) -> Result<(), PaymentError> {
    if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(PaymentError::Validation(format!(
            "currency must be an ISO 4217 code, got {:?}",
            currency
        )))
    }
}

pub fn build_order_payload(
    req: &PaymentInitRequest,
    rounding: MinorUnitRounding,
) -> Result<OrderPayload, PaymentError> {
    let amount = normalize_amount(req.amount, rounding)?;
    validate_currency(&req.currency)?;
    let receipt = resolve_receipt(req.receipt_id.as_deref())?;

    let notes = req
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| BTreeMap::from([("description".to_string(), d.to_string())]));

    Ok(OrderPayload {
        amount,
        currency: req.currency.clone(),
        receipt,
        notes,
    })
}
