use anyhow::Result;
use iedb::{
    IedbClient, QueryOutcome,
    config::{self, Config, OutputFormat},
    query::QueryRequest,
    table::ResultTable,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[derive(Serialize)]
struct JsonResult<'a> {
    tool: &'a str,
    method: &'a str,
    table: &'a ResultTable,
}

fn print_table(request: &QueryRequest, table: &ResultTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            println!("# {} {}", request.category(), request.method());
            print!("{}", table.to_tsv());
        }
        OutputFormat::Json => {
            let record = JsonResult {
                tool: request.category().tool(),
                method: request.method(),
                table,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }
    Ok(())
}

async fn run_query(client: &IedbClient, request: &QueryRequest, config: &Config) -> Result<()> {
    let outcome = client.submit(request).await?;

    if config.client.strict {
        let table = outcome.into_result()?;
        return print_table(request, &table, config.output.format);
    }

    match outcome {
        QueryOutcome::Success(table) => print_table(request, &table, config.output.format)?,
        QueryOutcome::Failure(failure) => eprintln!(
            "Error: {} query returned non-200 status code {}",
            request.category(),
            failure.status
        ),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    let filter = EnvFilter::try_new(&log_level)?;

    // Tables go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        "Running {} queries against {}",
        config.queries.len(),
        config.client.base_url
    );

    let client = IedbClient::new(&config.client)?;
    for request in &config.queries {
        run_query(&client, request, &config).await?;
    }

    Ok(())
}
