use anyhow::{anyhow, Result};
use root_insurance::{
    Beneficiary, IdType, Identification, InsuranceClient, PersonDetails, ProductModule,
};
use serde_json::json;

/// Walks the full sandbox flow: quote, policyholder, application, policy,
/// beneficiaries.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Policy Issuance Walkthrough ===\n");

    let client = InsuranceClient::from_env()?;

    // 1. Quote the gadget
    let quotes = client
        .quotes()
        .generate(
            ProductModule::Gadget,
            json!({"model_name": "iPhone 6s 64GB LTE"}),
        )
        .await?;
    let package = quotes
        .get(0)
        .ok_or_else(|| anyhow!("quotes endpoint returned no packages"))?;
    let quote_package_id = package["quote_package_id"]
        .as_str()
        .ok_or_else(|| anyhow!("quote package missing id"))?;
    println!("✓ Quote package: {}", quote_package_id);

    // 2. Register the policyholder
    let person = PersonDetails::new(
        Identification::new(IdType::Id, "6801015800084", "ZA")?,
        "Erlich",
        "Bachman",
    )
    .with_email("erlich@aviato.com")
    .with_cellphone("+27821234567");
    let holder = client.policyholders().create(&person).await?;
    let policyholder_id = holder["policyholder_id"]
        .as_str()
        .ok_or_else(|| anyhow!("policyholder response missing id"))?;
    println!("✓ Policyholder: {}", policyholder_id);

    // 3. Apply for the quoted package at the suggested premium
    let premium = package["suggested_premium"]
        .as_i64()
        .ok_or_else(|| anyhow!("quote package missing suggested premium"))?;
    let application = client
        .applications()
        .create(policyholder_id, quote_package_id, premium, Some("1234567890"))
        .await?;
    let application_id = application["application_id"]
        .as_str()
        .ok_or_else(|| anyhow!("application response missing id"))?;
    println!("✓ Application: {}", application_id);

    // 4. Issue the policy
    let policy = client.policies().issue(application_id).await?;
    let policy_id = policy["policy_id"]
        .as_str()
        .ok_or_else(|| anyhow!("policy response missing id"))?;
    println!("✓ Policy issued: {}", policy_id);

    // 5. Add a sole beneficiary
    let beneficiary = Beneficiary::new(person, 100.0)?;
    client
        .policies()
        .add_beneficiaries(policy_id, &[beneficiary])
        .await?;
    println!("✓ Beneficiaries updated");

    Ok(())
}
