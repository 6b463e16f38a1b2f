use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use toolsmith::cli::{Cli, Commands};
use toolsmith::config::Config;
use toolsmith::domain::{ApiKeyLocation, AuthConfig, AuthType, ImportOutcome};
use toolsmith::import::{self, FormatKind, ProviderOverrides};
use toolsmith::registry::HttpRegistryClient;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolsmith")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolsmith.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Read the input document from a file path, or stdin when the path is `-`
fn read_document(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read document from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
    }
}

/// Turn the raw auth flags into an override, rejecting unknown values
fn build_auth_override(
    auth_type: Option<&str>,
    api_key_location: Option<&str>,
    api_key_name: Option<&str>,
    api_key_value: Option<&str>,
) -> Result<Option<AuthConfig>> {
    if auth_type.is_none()
        && api_key_location.is_none()
        && api_key_name.is_none()
        && api_key_value.is_none()
    {
        return Ok(None);
    }

    let parsed_type = match auth_type {
        Some(raw) => {
            AuthType::from_str(raw).ok_or_else(|| eyre!("Unknown auth type: {}", raw))?
        }
        None => AuthType::ApiKey,
    };
    let parsed_location = match api_key_location {
        Some(raw) => ApiKeyLocation::from_str(raw)
            .ok_or_else(|| eyre!("Unknown API key location: {}", raw))?,
        None => ApiKeyLocation::default(),
    };

    Ok(Some(AuthConfig {
        auth_type: parsed_type,
        api_key_location: parsed_location,
        api_key_name: api_key_name.unwrap_or("").to_string(),
        api_key_value: api_key_value.unwrap_or("").to_string(),
    }))
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Import {
            file,
            provider_id,
            name,
            base_url,
            auth_type,
            api_key_location,
            api_key_name,
            api_key_value,
        } => {
            let auth = build_auth_override(
                auth_type.as_deref(),
                api_key_location.as_deref(),
                api_key_name.as_deref(),
                api_key_value.as_deref(),
            )?;
            let overrides = ProviderOverrides {
                name: name.clone(),
                base_url: base_url.clone(),
                auth,
            };
            handle_import(file, *provider_id, overrides, config).await
        }
        Commands::Preview { file } => handle_preview(file),
    }
}

async fn handle_import(
    file: &Path,
    provider_id: Option<u64>,
    overrides: ProviderOverrides,
    config: &Config,
) -> Result<()> {
    let raw = read_document(file)?;
    let registry = HttpRegistryClient::new(config.registry.to_client_config())?;

    info!(
        "Importing {} against {}",
        file.display(),
        config.registry.base_url
    );

    match import::run_import(&raw, provider_id, &overrides, &registry).await {
        ImportOutcome::Success { count } => {
            println!(
                "{} {} record(s) handed to the registry",
                "Imported:".green(),
                count
            );
            Ok(())
        }
        ImportOutcome::Failure { reason } => {
            println!("{} {}", "Import failed:".red(), reason);
            std::process::exit(1);
        }
    }
}

fn handle_preview(file: &Path) -> Result<()> {
    let raw = read_document(file)?;
    let preview = import::preview(&raw)?;

    if preview.kind == FormatKind::NativeBundle {
        println!(
            "{} export bundle with {} provider entr{}",
            "Detected:".cyan(),
            preview.bundle_entries,
            if preview.bundle_entries == 1 { "y" } else { "ies" }
        );
        println!("Bundles are forwarded to the registry verbatim; nothing to synthesize.");
        return Ok(());
    }

    if let Some(provider) = &preview.provider {
        println!("{} {} ({})", "Provider:".green(), provider.name, provider.code);
        if provider.has_base_url() {
            println!("  base url: {}", provider.base_url);
        } else {
            println!("  base url: {}", "(none found, supply with -b)".yellow());
        }
    }

    println!("{} {} tool(s)", "Synthesized:".green(), preview.tools.len());
    for tool in &preview.tools {
        println!(
            "  {:6} {}  {} ({})",
            tool.http_method.as_str().cyan(),
            tool.endpoint_path,
            tool.name,
            tool.code
        );
        for param in &tool.parameters {
            println!(
                "         - {} [{}]{}",
                param.name,
                param.param_type.as_str(),
                if param.required { " required" } else { "" }
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
