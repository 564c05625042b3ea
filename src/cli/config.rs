//
//  unsplash-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! These commands read and write the configuration file only. Environment
//! variables and command-line overrides are never persisted.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::auth::mask;
use crate::config::{Config, KEYS, SECRET_KEYS};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the value of a key
    Get(GetArgs),

    /// Set a key
    Set(SetArgs),

    /// List every key (secrets masked)
    #[command(visible_alias = "ls")]
    List,

    /// Print the path of the configuration file
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Dotted key, e.g. `credentials.access_key`
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Dotted key, e.g. `api.base_url`
    pub key: String,

    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn load() -> Result<Config> {
        Config::load_from(&Config::config_path()?)
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let config = Self::load()?;
        if !KEYS.contains(&args.key.as_str()) {
            anyhow::bail!(
                "Unknown config key '{}'. Valid keys: {}",
                args.key,
                KEYS.join(", ")
            );
        }
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Self::load()?;
        config.set(&args.key, args.value.as_str())?;
        config.save()?;

        let shown = display_value(&args.key, &args.value);
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                shown
            );
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Self::load()?;
        let entries: Vec<(&str, Option<String>)> = KEYS
            .iter()
            .map(|key| (*key, config.get(key).map(|v| display_value(key, &v))))
            .collect();

        if global.json {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), serde_json::json!(value)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        } else {
            for (key, value) in entries {
                match value {
                    Some(value) => println!("{} = {}", style(key).cyan(), value),
                    None => println!("{} = {}", style(key).cyan(), style("(not set)").dim()),
                }
            }
        }
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;
        if global.json {
            let result = serde_json::json!({ "path": path });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}

fn display_value(key: &str, value: &str) -> String {
    if SECRET_KEYS.contains(&key) {
        mask(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_are_masked() {
        assert_eq!(
            display_value("credentials.bearer_token", "abcdefghij"),
            "abcd****"
        );
        assert_eq!(
            display_value("credentials.access_key", "abcdefghij"),
            "abcdefghij"
        );
    }
}
