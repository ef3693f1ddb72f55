use crate::config::GatewayCredentials;
use crate::domain::payment::{PaymentInitRequest, PaymentInitResponse, PaymentVerifyRequest};
use crate::error::PaymentError;
use crate::gateways::OrderGateway;
use crate::service::order_builder::{build_order_payload, MinorUnitRounding};
use crate::service::signature::verify_signature;
use secrecy::ExposeSecret;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub credentials: GatewayCredentials,
    pub rounding: MinorUnitRounding,
    pub gateway: Arc<dyn OrderGateway>,
}

impl PaymentService {
    pub fn new(credentials: GatewayCredentials, gateway: Arc<dyn OrderGateway>) -> Self {
        Self {
            credentials,
            rounding: MinorUnitRounding::default(),
            gateway,
        }
    }

    pub fn with_rounding(mut self, rounding: MinorUnitRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub async fn create_order(&self, req: PaymentInitRequest) -> Result<PaymentInitResponse, PaymentError> {
        let payload = build_order_payload(&req, self.rounding)?;

        let order = self.gateway.create_order(&payload).await.map_err(|e| {
            tracing::error!(
                gateway = self.gateway.name(),
                receipt = %payload.receipt,
                code = %e.code,
                status = ?e.http_status,
                "order creation failed"
            );
            PaymentError::Gateway(e)
        })?;

        tracing::info!(
            gateway = self.gateway.name(),
            order_id = %order.id,
            receipt = %payload.receipt,
            amount_minor = order.amount,
            currency = %order.currency,
            "order created"
        );

        Ok(PaymentInitResponse {
            order_id: order.id,
            currency: order.currency,
            amount: order.amount,
            key_id: self.credentials.key_id.clone(),
            receipt_id: order.receipt.unwrap_or(payload.receipt),
        })
    }

    /// A mismatched signature is `Ok(false)`. Settling the payment on `true`
    /// is up to the caller.
    pub fn verify_payment(&self, req: &PaymentVerifyRequest) -> Result<bool, PaymentError> {
        for (field, value) in [
            ("orderId", &req.order_id),
            ("paymentId", &req.payment_id),
            ("signature", &req.signature),
        ] {
            if value.trim().is_empty() {
                return Err(PaymentError::Validation(format!("{} is required", field)));
            }
        }

        let verified = verify_signature(
            &req.order_id,
            &req.payment_id,
            &req.signature,
            self.credentials.key_secret.expose_secret().as_bytes(),
        )?;

        if verified {
            tracing::info!(order_id = %req.order_id, payment_id = %req.payment_id, "payment signature verified");
        } else {
            tracing::warn!(order_id = %req.order_id, payment_id = %req.payment_id, "payment signature mismatch");
        }
        Ok(verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::mock::{MockBehavior, MockGateway};
    use crate::service::signature::sign_payment;

    fn service(gateway: Arc<MockGateway>) -> PaymentService {
        PaymentService::new(GatewayCredentials::new("rzp_test_key", "s3cr3t"), gateway)
    }

    fn verify_req(order_id: &str, payment_id: &str, signature: &str) -> PaymentVerifyRequest {
        PaymentVerifyRequest {
            order_id: order_id.to_string(),
            payment_id: payment_id.to_string(),
            signature: signature.to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_amount_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::default());
        let svc = service(gateway.clone());
        let req = PaymentInitRequest {
            amount: "0".parse().unwrap(),
            currency: "INR".to_string(),
            receipt_id: None,
            description: None,
        };

        let err = svc.create_order(req).await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidAmount(_)));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn gateway_error_is_forwarded_untouched() {
        let gateway = Arc::new(MockGateway::new(MockBehavior::AlwaysFailure));
        let svc = service(gateway);
        let req = PaymentInitRequest {
            amount: "10".parse().unwrap(),
            currency: "INR".to_string(),
            receipt_id: Some("rcpt_1".to_string()),
            description: None,
        };

        match svc.create_order(req).await {
            Err(PaymentError::Gateway(e)) => {
                assert_eq!(e.code, "MOCK_DECLINED");
                assert_eq!(e.message, "mock decline");
                assert_eq!(e.http_status, Some(400));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_fields_are_validation_errors() {
        let svc = service(Arc::new(MockGateway::default()));
        for req in [
            verify_req("", "pay_1", "abc"),
            verify_req("order_1", " ", "abc"),
            verify_req("order_1", "pay_1", ""),
        ] {
            assert!(matches!(svc.verify_payment(&req), Err(PaymentError::Validation(_))));
        }
    }

    #[test]
    fn verifies_with_configured_secret() {
        let svc = service(Arc::new(MockGateway::default()));
        let sig = sign_payment("order_1", "pay_1", b"s3cr3t").unwrap();
        assert!(svc.verify_payment(&verify_req("order_1", "pay_1", &sig)).unwrap());

        let foreign = sign_payment("order_1", "pay_1", b"other").unwrap();
        assert!(!svc.verify_payment(&verify_req("order_1", "pay_1", &foreign)).unwrap());
    }
}
