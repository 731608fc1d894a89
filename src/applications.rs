use crate::client::InsuranceClient;
use crate::errors::Error;
use reqwest::Method;
use serde_json::{json, Value};

/// Applications tie a policyholder to a chosen quote package.
pub struct Applications<'a> {
    client: &'a InsuranceClient,
}

impl<'a> Applications<'a> {
    pub(crate) fn new(client: &'a InsuranceClient) -> Self {
        Self { client }
    }

    /// Apply for a policy against a generated quote package.
    ///
    /// # Arguments
    ///
    /// * `policyholder_id` - The registered policyholder.
    /// * `quote_package_id` - The quote package to apply for.
    /// * `monthly_premium` - Premium in cents, normally the quote's suggested premium.
    /// * `serial_number` - Device serial for gadget cover; sent as null when absent.
    pub async fn create(
        &self,
        policyholder_id: &str,
        quote_package_id: &str,
        monthly_premium: i64,
        serial_number: Option<&str>,
    ) -> Result<Value, Error> {
        let data = json!({
            "policyholder_id": policyholder_id,
            "quote_package_id": quote_package_id,
            "monthly_premium": monthly_premium,
            "serial_number": serial_number,
        });
        self.client
            .send(Method::POST, "applications", &[], Some(&data))
            .await
    }
}
