use anyhow::Result;
use root_insurance::InsuranceClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("=== Gadget Catalog Browser ===\n");

    // Needs ROOT_API_KEY (or ROOT_APP_ID/ROOT_APP_SECRET) in the environment
    let client = InsuranceClient::from_env()?;

    let brands = client.quotes().list_brands().await?;
    println!("✓ {} brands available", brands.len());

    let apple_models = client.quotes().list_models_by_brand("Apple").await?;
    println!("✓ {} Apple models:", apple_models.len());
    for name in apple_models.iter().take(10) {
        println!("    {}", name);
    }

    let value = client
        .quotes()
        .get_model_value("iPhone 6 Plus 128GB LTE")
        .await?;
    println!("\niPhone 6 Plus 128GB LTE is insured for {:.2}", value);

    Ok(())
}
