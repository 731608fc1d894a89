//! Root Insurance API Client Library
//!
//! This library wraps the Root Insurance REST API: quote generation,
//! policyholder registration, application submission, policy issuance,
//! beneficiary management, and claims.
//!
//! # Modules
//!
//! - `resources`: API resource namespaces.
//! - `applications`: Application resource.
//! - `claims`: Claim resource.
//! - `client`: The `InsuranceClient` transport.
//! - `config`: Configuration and credential resolution.
//! - `errors`: Error handling types.
//! - `models`: Identification, person, beneficiary, and catalog models.
//! - `policies`: Policy resource.
//! - `policyholders`: Policyholder resource.
//! - `quotes`: Quote resource and gadget catalog helpers.
//!
//! To issue a policy, follow these steps:
//!
//! ```no_run
//! # async fn run() -> Result<(), root_insurance::Error> {
//! use root_insurance::{
//!     Beneficiary, IdType, Identification, InsuranceClient, PersonDetails, ProductModule,
//! };
//! use serde_json::json;
//!
//! let client = InsuranceClient::from_env()?;
//!
//! // 1. Quote the thing to be insured.
//! let quotes = client
//!     .quotes()
//!     .generate(ProductModule::Gadget, json!({"model_name": "iPhone 6s 64GB LTE"}))
//!     .await?;
//! let package = &quotes[0];
//!
//! // 2. Register the policyholder.
//! let person = PersonDetails::new(
//!     Identification::new(IdType::Id, "6801015800084", "ZA")?,
//!     "Erlich",
//!     "Bachman",
//! );
//! let holder = client.policyholders().create(&person).await?;
//!
//! // 3. Apply for the quoted package.
//! let application = client
//!     .applications()
//!     .create(
//!         holder["policyholder_id"].as_str().unwrap(),
//!         package["quote_package_id"].as_str().unwrap(),
//!         package["suggested_premium"].as_i64().unwrap(),
//!         Some("device-serial"),
//!     )
//!     .await?;
//!
//! // 4. Issue the policy and add beneficiaries.
//! let policy = client
//!     .policies()
//!     .issue(application["application_id"].as_str().unwrap())
//!     .await?;
//! let beneficiary = Beneficiary::new(person.clone(), 100.0)?;
//! client
//!     .policies()
//!     .add_beneficiaries(policy["policy_id"].as_str().unwrap(), &[beneficiary])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod resources;

// Re-export primary modules for shared use in tests and demos
pub mod applications;
pub mod claims;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod policies;
pub mod policyholders;
pub mod quotes;

pub use client::InsuranceClient;
pub use config::{Config, Credentials};
pub use errors::{Error, ResultExt};
pub use models::{
    validate_beneficiary_split, Beneficiary, GadgetModel, IdType, Identification, PersonDetails,
    ProductModule,
};
