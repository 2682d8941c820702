//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("products_path", &ctx.config.api.products_path);
    ctx.output
        .kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());

    ctx.output.info("[images]");
    ctx.output.kv("content_type", &ctx.config.images.content_type);
    ctx.output.kv("file_name", &ctx.config.images.file_name);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    // JSON mode writes pos.json with the same defaults.
    let path = if ctx.output.is_json() {
        ctx.cwd.join("pos.json")
    } else {
        ctx.default_config_path()
    };

    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    if ctx.output.is_json() {
        CliConfig::default().save(&path.to_string_lossy())?;
        ctx.output
            .json(&serde_json::json!({ "created": path.display().to_string() }));
    } else {
        std::fs::write(&path, generate_default_config())?;
        ctx.output
            .success(&format!("Created config file: {}", path.display()));
    }

    Ok(())
}
