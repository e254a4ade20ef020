use clap::Parser;
use fresh_lunch::utils::error::{ErrorSeverity, LunchError};
use fresh_lunch::utils::{logger, validation::Validate};
use fresh_lunch::{Catalog, CliConfig, FileSystemLoader};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fresh-lunch CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::error!(
            "Query failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: &CliConfig) -> Result<(), LunchError> {
    config.validate()?;
    let date = config.query_date()?;

    let loader = FileSystemLoader::new(&config.data_dir);
    let mut catalog = Catalog::default();
    catalog
        .load_ingredients(&loader, &config.ingredients)
        .await?
        .load_recipes(&loader, &config.recipes)
        .await?;
    catalog.assemble_lunches()?;

    let output = if config.lunches {
        serde_json::to_string_pretty(&catalog.lunches_eligible_on(date)?)?
    } else {
        serde_json::to_string_pretty(&catalog.recipes_eligible_on(date)?)?
    };

    tracing::info!("Query for {} complete", date);
    println!("{}", output);
    Ok(())
}
