use crate::client::InsuranceClient;
use crate::errors::{Error, ResultExt};
use crate::models::{GadgetModel, ProductModule};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeSet;

/// Quote generation plus the gadget catalog helpers.
pub struct Quotes<'a> {
    client: &'a InsuranceClient,
}

impl<'a> Quotes<'a> {
    pub(crate) fn new(client: &'a InsuranceClient) -> Self {
        Self { client }
    }

    /// Generate a quote for the given product module.
    ///
    /// `fields` must be a JSON object carrying the module's required fields;
    /// extra fields are passed through to the API unvalidated. The `type`
    /// discriminator is filled in from the module when absent. Missing
    /// required fields fail with `Error::InsufficientData` before any network
    /// I/O.
    pub async fn generate(&self, module: ProductModule, fields: Value) -> Result<Value, Error> {
        let mut data = match fields {
            Value::Object(map) => map,
            other => {
                return Err(Error::Validation(format!(
                    "quote fields must be a JSON object, got {}",
                    other
                )))
            }
        };
        if !data.contains_key("type") {
            data.insert(
                "type".to_string(),
                Value::String(module.type_id().to_string()),
            );
        }

        let missing = module.missing_fields(&data);
        if !missing.is_empty() {
            return Err(Error::InsufficientData(missing));
        }

        tracing::info!("Generating {} quote", module.type_id());
        self.client
            .send(Method::POST, "quotes", &[], Some(&Value::Object(data)))
            .await
    }

    /// List the models available in the root_gadgets module.
    pub async fn list_models(&self) -> Result<Vec<GadgetModel>, Error> {
        let data = self
            .client
            .send(Method::GET, "modules/root_gadgets/models", &[], None)
            .await
            .context("fetching gadget model catalog")?;
        serde_json::from_value(data)
            .map_err(|e| Error::Transport(format!("Failed to parse model catalog: {}", e)))
    }

    /// Manufacturers present in the catalog, deduplicated.
    pub async fn list_brands(&self) -> Result<BTreeSet<String>, Error> {
        let models = self.list_models().await?;
        Ok(models.into_iter().map(|m| m.make).collect())
    }

    /// Model names for one manufacturer.
    pub async fn list_models_by_brand(&self, brand: &str) -> Result<BTreeSet<String>, Error> {
        let models = self.list_models().await?;
        Ok(models
            .into_iter()
            .filter(|m| m.make == brand)
            .map(|m| m.name)
            .collect())
    }

    /// Insured value of the named model in currency units.
    ///
    /// The catalog carries values in cents. An unknown model name fails with
    /// `Error::NotFound`.
    pub async fn get_model_value(&self, name: &str) -> Result<f64, Error> {
        let models = self.list_models().await?;
        let model = models
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| Error::NotFound(format!("no gadget model named '{}'", name)))?;
        Ok(model.value as f64 / 100.0)
    }
}
