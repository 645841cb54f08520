//! # Command Handlers
//!
//! Remote commands go through [`fmdash::connect`]; `defaults` and `validate` never touch the
//! network.

use anyhow::{Context, Result, bail};
use fmdash::dashboard::{defaults, exchange, validator};
use fmdash::domain::ConfigurationDocument;
use fmdash::domain::config::ClientConfig;
use std::path::Path;
use tracing::info;

pub async fn show(config: &ClientConfig) -> Result<()> {
    let service = fmdash::connect(config)?;
    print_document(&*service.load().await);
    Ok(())
}

pub fn print_defaults() {
    print_document(defaults::default_document());
}

pub async fn visible(config: &ClientConfig, section: &str) -> Result<()> {
    let service = fmdash::connect(config)?;
    service.load().await;
    for item in service.visible_items(section) {
        println!("{}", item.name);
    }
    Ok(())
}

pub async fn check(config: &ClientConfig, section: &str, item: &str) -> Result<()> {
    let service = fmdash::connect(config)?;
    service.load().await;
    println!("{}", if service.is_item_visible(section, item) { "visible" } else { "hidden" });
    Ok(())
}

pub async fn set(config: &ClientConfig, section: &str, item: &str, visible: bool) -> Result<()> {
    let service = fmdash::connect(config)?;
    // The whole section is sent back, so it must come from the service and not the defaults.
    service
        .load_remote()
        .await
        .with_context(|| format!("Could not update '{item}' in section '{section}'"))?;
    if !service.set_item_visibility(section, item, visible).await {
        bail!("Could not update '{item}' in section '{section}'");
    }
    info!(section, item, visible, "Card visibility updated");
    Ok(())
}

pub async fn reset(config: &ClientConfig) -> Result<()> {
    let service = fmdash::connect(config)?;
    print_document(&*service.reset().await);
    Ok(())
}

pub async fn export(config: &ClientConfig, output: Option<&Path>) -> Result<()> {
    let service = fmdash::connect(config)?;
    let document = service.load().await;
    match output {
        Some(path) => {
            exchange::export_to_file(&document, path)?;
            info!(path = %path.display(), "Configuration exported");
        },
        None => print_document(&document),
    }
    Ok(())
}

pub async fn import(config: &ClientConfig, file: &Path, push: bool) -> Result<()> {
    let document = read_backup(file)?;
    if !push {
        return Ok(());
    }

    let service = fmdash::connect(config)?;
    if !service.save(document).await {
        bail!("The configuration service did not accept {}", file.display());
    }
    println!("Pushed {}", file.display());
    Ok(())
}

pub fn validate(file: &Path) -> Result<()> {
    read_backup(file).map(drop)
}

/// Parses `file` and prints a summary plus any repeated names.
fn read_backup(file: &Path) -> Result<ConfigurationDocument> {
    let document = exchange::import_from_file(file)
        .with_context(|| format!("{} is not a usable configuration", file.display()))?;

    println!(
        "Valid configuration: {} sections, {} items",
        document.sections.len(),
        document.item_count()
    );
    for duplicate in validator::find_duplicates(&document) {
        println!("warning: repeated {duplicate}, only the first one is used");
    }
    Ok(document)
}

fn print_document(document: &ConfigurationDocument) {
    println!("{}", exchange::export_configuration(document));
}
