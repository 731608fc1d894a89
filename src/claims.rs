use crate::client::InsuranceClient;
use crate::errors::Error;
use reqwest::Method;
use serde_json::{json, Value};

/// Claim management.
pub struct Claims<'a> {
    client: &'a InsuranceClient,
}

impl<'a> Claims<'a> {
    pub(crate) fn new(client: &'a InsuranceClient) -> Self {
        Self { client }
    }

    /// Open a claim, optionally linked to a policy and/or policyholder
    /// straight away. Unset links are sent as null.
    pub async fn open(
        &self,
        policy_id: Option<&str>,
        policy_holder_id: Option<&str>,
    ) -> Result<Value, Error> {
        let data = json!({
            "policy_id": policy_id,
            "policy_holder_id": policy_holder_id,
        });
        self.client
            .send(Method::POST, "claims", &[], Some(&data))
            .await
    }

    pub async fn get(&self, claim_id: &str) -> Result<Value, Error> {
        self.client
            .send(Method::GET, &format!("claims/{}", claim_id), &[], None)
            .await
    }

    /// List claims, optionally filtered by claim status and approval status.
    pub async fn list(
        &self,
        status: Option<&str>,
        approval_status: Option<&str>,
    ) -> Result<Value, Error> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            params.push(("claim_status", status.to_string()));
        }
        if let Some(approval) = approval_status {
            params.push(("approval_status", approval.to_string()));
        }
        self.client.send(Method::GET, "claims", &params, None).await
    }

    /// Link a policy to an open claim.
    pub async fn link_policy(&self, claim_id: &str, policy_id: &str) -> Result<Value, Error> {
        let data = json!({ "policy_id": policy_id });
        self.client
            .send(
                Method::POST,
                &format!("claims/{}/policy", claim_id),
                &[],
                Some(&data),
            )
            .await
    }

    /// Link a policyholder to an open claim.
    pub async fn link_policy_holder(
        &self,
        claim_id: &str,
        policy_holder_id: &str,
    ) -> Result<Value, Error> {
        let data = json!({ "policy_holder_id": policy_holder_id });
        self.client
            .send(
                Method::POST,
                &format!("claims/{}/policyholder", claim_id),
                &[],
                Some(&data),
            )
            .await
    }

    /// Request the claim's event feed to be (re)linked.
    pub async fn link_events(&self, claim_id: &str) -> Result<Value, Error> {
        self.client
            .send(
                Method::POST,
                &format!("claims/{}/events", claim_id),
                &[],
                None,
            )
            .await
    }
}
