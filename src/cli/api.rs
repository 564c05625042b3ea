//
//  unsplash-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends a GET request through the same pipeline as every other command
//! (`client_id` attached, status checked) and prints the body undecoded.
//! Useful for endpoints the other commands do not cover and for debugging.
//!
//! ## Examples
//!
//! ```bash
//! # A photo, pretty-printed
//! unsplash api photos/Dwu85P9SOIk
//!
//! # Query parameters
//! unsplash api topics -F per_page=5 -F order_by=featured
//!
//! # Print the status line too
//! unsplash api stats/total --include
//! ```

use anyhow::{bail, Result};
use clap::Args;

use super::GlobalOptions;
use crate::api::{Endpoint, QueryParams, RawResponse};
use crate::output::pretty_body;

#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path, e.g. `photos/random` (relative to the API host)
    pub endpoint: String,

    /// Add a query parameter in `name=value` form
    #[arg(long, short = 'F', action = clap::ArgAction::Append, value_name = "NAME=VALUE")]
    pub field: Vec<String>,

    /// Print the HTTP status before the body
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Print the body exactly as received, even when it is JSON
    #[arg(long)]
    pub raw: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let params = self.parse_fields()?;
        let client = global.client()?;
        let endpoint = Endpoint::get(self.endpoint.as_str()).params(params);

        let response = client.fetch_raw(&endpoint).await.into_result()?;

        if self.include {
            println!("HTTP {}", response.status);
            if let Some(content_type) = &response.content_type {
                println!("Content-Type: {content_type}");
            }
            println!();
        }

        println!("{}", render_body(&response, self.raw));
        Ok(())
    }

    fn parse_fields(&self) -> Result<QueryParams> {
        self.field
            .iter()
            .map(|field| match field.split_once('=') {
                Some((name, value)) if !name.is_empty() => {
                    Ok((name.to_string(), Some(value.to_string())))
                }
                _ => bail!("Invalid field '{}'. Expected name=value", field),
            })
            .collect()
    }
}

/// Pretty-prints JSON bodies unless `raw` is set; anything else is printed
/// as text.
fn render_body(response: &RawResponse, raw: bool) -> String {
    if raw || !response.is_json() {
        response.text()
    } else {
        pretty_body(&response.body)
    }
}
