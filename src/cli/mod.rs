//
//  unsplash-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod collection;
mod config;
mod photo;
mod search;
mod stats;
mod user;

pub use api::ApiCommand;
pub use collection::CollectionCommand;
pub use config::ConfigCommand;
pub use photo::PhotoCommand;
pub use search::SearchCommand;
pub use stats::StatsCommand;
pub use user::UserCommand;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::api::common::DEFAULT_PER_PAGE;
use crate::api::{Pagination, UnsplashClient};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// Unsplash from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "unsplash",
    version,
    about = "Browse and search Unsplash from the command line",
    long_about = "unsplash is a CLI for the Unsplash API.\n\n\
                  It lists, searches and inspects photos, users and collections, \
                  and likes or updates photos when given a user bearer token.",
    propagate_version = true,
    after_help = "Use 'unsplash <command> --help' for more information about a command.\n\
                  Set UNSPLASH_DEBUG=debug to log every request."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Application access key (overrides config and UNSPLASH_ACCESS_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub access_key: Option<String>,

    /// User bearer token for like, unlike and update (overrides config and
    /// UNSPLASH_BEARER_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub bearer_token: Option<String>,

    /// API host to talk to
    #[arg(long, global = true, value_name = "URL", hide = true)]
    pub base_url: Option<String>,
}

impl GlobalOptions {
    pub fn output(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }

    /// Loads the configuration and applies the command-line overrides.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(key) = &self.access_key {
            config.set("credentials.access_key", key.as_str())?;
        }
        if let Some(token) = &self.bearer_token {
            config.set("credentials.bearer_token", token.as_str())?;
        }
        if let Some(url) = &self.base_url {
            config.set("api.base_url", url.as_str())?;
        }
        Ok(())
    }

    /// Builds a client from the effective configuration.
    pub fn client(&self) -> Result<UnsplashClient> {
        UnsplashClient::from_config(&self.config()?)
    }
}

/// Paging flags shared by every listing command.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number (starting at 1)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Results per page (at most 30)
    #[arg(long, short = 'n', default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

impl PageArgs {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.per_page)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List, view, like and update photos
    #[command(visible_alias = "p")]
    Photo(PhotoCommand),

    /// View public profiles and their photos
    #[command(visible_alias = "u")]
    User(UserCommand),

    /// Browse collections
    #[command(visible_alias = "c")]
    Collection(CollectionCommand),

    /// Search photos, collections and users
    #[command(visible_alias = "s")]
    Search(SearchCommand),

    /// Site-wide statistics
    Stats(StatsCommand),

    /// Make a raw GET request and print the response body
    Api(ApiCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Show version information
    Version,
}
