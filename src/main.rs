use crate::options::Args;
use anyhow::Context;
use clap::Parser;
use std::time::Duration;
use vatsync::batch::load_customers;
use vatsync::chargebee::{UpdaterConfig, update_vat_numbers};

mod options {
    use std::path::PathBuf;

    #[derive(Debug, clap::Parser)]
    #[command(
        name = "vatsync",
        about = "Update VAT numbers and billing addresses of Chargebee customers"
    )]
    pub struct Args {
        /// The Chargebee site name, i.e. the subdomain of `<site>.chargebee.com`.
        #[arg(long, env = "CHARGEBEE_SITE")]
        pub site: String,
        /// API key used as Basic auth user name.
        #[arg(long, env = "CHARGEBEE_API_KEY", hide_env_values = true)]
        pub api_key: String,
        /// File the outcome of every customer is appended to.
        #[arg(long, short = 'l', env = "VATSYNC_LOG_FILE", default_value = "vat_update_log.txt")]
        pub log_file: PathBuf,
        /// Per-request timeout in seconds.
        #[arg(long, default_value = "30")]
        pub timeout_seconds: u64,
        /// A JSON object mapping each customer email to its fields, e.g.
        /// `{"billing@acme.de": {"vat_number": "DE123456789", "city": "Berlin"}}`.
        pub customers: PathBuf,
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Args {
        site,
        api_key,
        log_file,
        timeout_seconds,
        customers: customers_file,
    } = Args::parse();

    let file = std::fs::File::open(&customers_file).with_context(|| {
        format!("Could not open customers file at '{}'", customers_file.display())
    })?;
    let customers = load_customers(std::io::BufReader::new(file)).with_context(|| {
        format!("Could not read customers from '{}'", customers_file.display())
    })?;

    let config = UpdaterConfig::new(site, api_key)
        .log_file(log_file)
        .timeout(Duration::from_secs(timeout_seconds));
    let report = update_vat_numbers(&config, customers).context("VAT update run failed")?;

    println!(
        "{} customer(s) updated, {} failed; see {}",
        report.succeeded(),
        report.failed(),
        config.log_file.display()
    );
    for (email, error) in report.failures() {
        println!("  {email}: {error}");
    }
    Ok(())
}
