//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, ClientConfig, ConverterKind};
use crate::convert::ModelHint;
use crate::error::{Error, Result};
use crate::handler::{FetchOptions, ResourceHandler};
use crate::http::RequestConfig;
use crate::types::{JsonValue, OptionStringExt};
use futures::StreamExt;
use serde_json::json;
use std::io::Write;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command, printing one JSON document per line to stdout
    pub async fn run(&self) -> Result<()> {
        let handler = self.handler()?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(&handler, &mut out).await
    }

    /// Client config from the config file and command-line overrides
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.cli.config, &self.cli.base_url) {
            (Some(path), _) => load_config(path)?,
            (None, Some(base_url)) => ClientConfig::new(base_url),
            (None, None) => {
                return Err(Error::config(
                    "No API configured (use --config or --base-url)",
                ))
            }
        };

        if let Some(base_url) = self.cli.base_url.clone().none_if_empty() {
            config.base_url = base_url;
        }
        if let Some(prefix) = &self.cli.prefix {
            config.prefix.clone_from(prefix);
        }
        if self.cli.raw {
            config.converter = ConverterKind::Raw;
        }
        config.media.variants.extend(self.cli.accept.iter().copied());

        config.validate()?;
        Ok(config)
    }

    /// Handler wired from [`Runner::client_config`]
    pub fn handler(&self) -> Result<ResourceHandler> {
        self.client_config()?.resource_handler()
    }

    /// Run the command against `handler`, writing output to `out`
    pub async fn run_with<W: Write>(&self, handler: &ResourceHandler, out: &mut W) -> Result<()> {
        let model = self.cli.model.clone().none_if_empty().map(ModelHint::new);

        match &self.cli.command {
            Commands::Get { resource } => {
                let converted = handler
                    .fetch_one(resource, model, FetchOptions::new())
                    .await?;
                emit(out, &converted.to_json())
            }
            Commands::List { resource, limit } => {
                let mut items = handler.fetch_many(resource, model, *limit, FetchOptions::new());
                let mut count = 0usize;
                while let Some(item) = items.next().await {
                    emit(out, &item?.to_json())?;
                    count += 1;
                }
                info!("Listed {count} item(s) from {}", handler.prefix_resource(resource));
                Ok(())
            }
            Commands::Create { resource, data } => {
                let data: JsonValue = serde_json::from_str(data)?;
                let created = handler
                    .create(resource, data, model, FetchOptions::new())
                    .await?;
                emit(out, &created.to_json())
            }
            Commands::Put { resource } => {
                let ok = handler.put_as_bool(resource, RequestConfig::new()).await?;
                emit_bool(out, handler, resource, ok)
            }
            Commands::Delete { resource } => {
                let ok = handler.delete_as_bool(resource, RequestConfig::new()).await?;
                emit_bool(out, handler, resource, ok)
            }
            Commands::Check { resource } => {
                let ok = handler
                    .mutate_as_bool(resource, None, RequestConfig::new())
                    .await?;
                emit_bool(out, handler, resource, ok)
            }
        }
    }
}

fn emit<W: Write>(out: &mut W, value: &JsonValue) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}

fn emit_bool<W: Write>(
    out: &mut W,
    handler: &ResourceHandler,
    resource: &str,
    ok: bool,
) -> Result<()> {
    let path = handler.prefix_resource(resource);
    debug!("{path} -> {ok}");
    emit(out, &json!({ "resource": path, "ok": ok }))
}
