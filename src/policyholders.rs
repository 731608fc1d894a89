use crate::client::InsuranceClient;
use crate::errors::Error;
use crate::models::PersonDetails;
use reqwest::Method;
use serde_json::{json, Value};

/// Policyholder registration and lookup.
pub struct Policyholders<'a> {
    client: &'a InsuranceClient,
}

impl<'a> Policyholders<'a> {
    pub(crate) fn new(client: &'a InsuranceClient) -> Self {
        Self { client }
    }

    /// Register a policyholder.
    ///
    /// The request body is exactly the person's wire mapping, including any
    /// extension fields.
    pub async fn create(&self, person: &PersonDetails) -> Result<Value, Error> {
        let data = person.details();
        self.client
            .send(Method::POST, "policyholders", &[], Some(&data))
            .await
    }

    pub async fn list(&self) -> Result<Value, Error> {
        self.client.send(Method::GET, "policyholders", &[], None).await
    }

    pub async fn get(&self, policyholder_id: &str) -> Result<Value, Error> {
        self.client
            .send(
                Method::GET,
                &format!("policyholders/{}", policyholder_id),
                &[],
                None,
            )
            .await
    }

    /// Update a policyholder's contact details.
    ///
    /// Both keys are always sent, null when unset, which is the wire shape
    /// the API expects for this endpoint.
    pub async fn update(
        &self,
        policyholder_id: &str,
        email: Option<&str>,
        cellphone: Option<&str>,
    ) -> Result<Value, Error> {
        let data = json!({
            "email": email,
            "cellphone": cellphone,
        });
        self.client
            .send(
                Method::PATCH,
                &format!("policyholders/{}", policyholder_id),
                &[],
                Some(&data),
            )
            .await
    }

    pub async fn list_events(&self, policyholder_id: &str) -> Result<Value, Error> {
        self.client
            .send(
                Method::GET,
                &format!("policyholders/{}/events", policyholder_id),
                &[],
                None,
            )
            .await
    }
}
