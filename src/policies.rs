use crate::client::InsuranceClient;
use crate::errors::Error;
use crate::models::{validate_beneficiary_split, Beneficiary};
use reqwest::Method;
use serde_json::{json, Value};

/// Policy issuance and lifecycle operations.
pub struct Policies<'a> {
    client: &'a InsuranceClient,
}

impl<'a> Policies<'a> {
    pub(crate) fn new(client: &'a InsuranceClient) -> Self {
        Self { client }
    }

    /// Issue a policy for an approved application.
    pub async fn issue(&self, application_id: &str) -> Result<Value, Error> {
        let data = json!({
            "application_id": application_id,
        });
        self.client
            .send(Method::POST, "policies", &[], Some(&data))
            .await
    }

    pub async fn list(&self) -> Result<Value, Error> {
        self.client.send(Method::GET, "policies", &[], None).await
    }

    pub async fn get(&self, policy_id: &str) -> Result<Value, Error> {
        self.client
            .send(Method::GET, &format!("policies/{}", policy_id), &[], None)
            .await
    }

    /// Replace the beneficiaries that receive payment on a claim payout.
    ///
    /// Updating a policy's beneficiaries replaces any added in the past. The
    /// percentages must sum to 100; a bad split fails with `Error::Validation`
    /// before any request is made.
    pub async fn add_beneficiaries(
        &self,
        policy_id: &str,
        beneficiaries: &[Beneficiary],
    ) -> Result<Value, Error> {
        validate_beneficiary_split(beneficiaries)?;
        let data = Value::Array(beneficiaries.iter().map(|b| b.details()).collect());
        tracing::info!(
            "Updating {} beneficiaries on policy {}",
            beneficiaries.len(),
            policy_id
        );
        self.client
            .send(
                Method::PUT,
                &format!("policies/{}/beneficiaries", policy_id),
                &[],
                Some(&data),
            )
            .await
    }

    pub async fn list_beneficiaries(&self, policy_id: &str) -> Result<Value, Error> {
        self.client
            .send(
                Method::GET,
                &format!("policies/{}/beneficiaries", policy_id),
                &[],
                None,
            )
            .await
    }

    pub async fn list_events(&self, policy_id: &str) -> Result<Value, Error> {
        self.client
            .send(
                Method::GET,
                &format!("policies/{}/events", policy_id),
                &[],
                None,
            )
            .await
    }

    /// Cancel a policy, stating the reason.
    pub async fn cancel(&self, policy_id: &str, reason: &str) -> Result<Value, Error> {
        let data = json!({ "reason": reason });
        self.client
            .send(
                Method::POST,
                &format!("policies/{}/cancel", policy_id),
                &[],
                Some(&data),
            )
            .await
    }

    /// Replace the policy's cover with a newly quoted package.
    pub async fn replace(&self, policy_id: &str, quote_package_id: &str) -> Result<Value, Error> {
        let data = json!({ "quote_package_id": quote_package_id });
        self.client
            .send(
                Method::POST,
                &format!("policies/{}/replace", policy_id),
                &[],
                Some(&data),
            )
            .await
    }

    /// Adjust the monthly billing amount, in cents.
    pub async fn update_billing_amount(
        &self,
        policy_id: &str,
        billing_amount: i64,
    ) -> Result<Value, Error> {
        let data = json!({ "billing_amount": billing_amount });
        self.client
            .send(
                Method::POST,
                &format!("policies/{}/billing_amount", policy_id),
                &[],
                Some(&data),
            )
            .await
    }
}
