use anyhow::Result;
use rust_license_scan::config::Config;
use rust_license_scan::scan::scan_license_input;

/// Wisconsin sample license used when no argument is given. Other public
/// sample images that work well:
/// - New York: https://redbus2us.com/wp-content/uploads/2010/05/Requirements-to-get-driving-license-for-H4-Visa-holders-No-SSN.jpg
/// - California: https://www.dmv.ca.gov/portal/uploads/2020/06/fed_noncompliant_img-1024x657.jpg
/// - New Hampshire (challenging): https://i.insider.com/5e2767af3ac0c912ec19043e?width=600&format=jpeg&auto=webp
/// - Pennsylvania: https://www.starpointscreening.com/images/content/Pennsylvania_DL.jpg
/// - Minnesota: https://dps.mn.gov/divisions/dvs/PublishingImages/new-cards/mn-adult-dl.jpg
const SAMPLE_LICENSE_URL: &str = "https://www.jsonline.com/gcdn/-mm-/2f3e2286b1f5ae873c26d3f6d9fcaeb663199d00/c=0-43-1393-830/local/-/media/2017/11/21/WIGroup/Milwaukee/636468858661208331-MJS-LICENSE.jpg";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_license_scan=debug".into()),
        )
        .init();

    println!("=== Driver's License Scan ===\n");

    // Load environment variables (OPENAI_API_KEY)
    let config = Config::from_env()?;

    // Accept a URL or a local file path; fall back to the sample license
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SAMPLE_LICENSE_URL.to_string());

    println!("Scanning {}\n", input);

    let record = scan_license_input(&input, &config).await?;

    println!("✓ Extraction complete:\n");
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
