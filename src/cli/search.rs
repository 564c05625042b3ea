//
//  unsplash-client
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search commands.
//!
//! Table output prints a one-line summary followed by the page of matches.
//! JSON output prints the whole page including `total` and `total_pages`.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::{GlobalOptions, PageArgs};
use crate::api::{Orientation, SearchResults};
use crate::output::{format_count, OutputFormat, OutputWriter, TableRow};

#[derive(Args, Debug)]
pub struct SearchCommand {
    #[command(subcommand)]
    pub command: SearchSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SearchSubcommand {
    /// Search photos
    Photos(PhotosArgs),

    /// Search collections
    Collections(QueryArgs),

    /// Search users
    Users(QueryArgs),
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Search terms
    pub query: String,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct PhotosArgs {
    /// Search terms
    pub query: String,

    #[command(flatten)]
    pub page: PageArgs,

    /// Only search within these collection IDs (comma-separated or repeated)
    #[arg(long = "collection", value_delimiter = ',')]
    pub collections: Vec<String>,

    #[arg(long, value_enum, default_value_t = Orientation::Landscape)]
    pub orientation: Orientation,
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();

        match &self.command {
            SearchSubcommand::Photos(args) => {
                let collections: Vec<&str> = args.collections.iter().map(String::as_str).collect();
                let pagination = args.page.pagination();
                let results = client
                    .search_photos(&args.query, pagination, &collections, args.orientation)
                    .await
                    .into_result()?;
                write_results(&output, &results, pagination.page())
            }
            SearchSubcommand::Collections(args) => {
                let pagination = args.page.pagination();
                let results = client
                    .search_collections(&args.query, pagination)
                    .await
                    .into_result()?;
                write_results(&output, &results, pagination.page())
            }
            SearchSubcommand::Users(args) => {
                let pagination = args.page.pagination();
                let results = client
                    .search_users(&args.query, pagination)
                    .await
                    .into_result()?;
                write_results(&output, &results, pagination.page())
            }
        }
    }
}

fn write_results<T: Serialize + TableRow>(
    output: &OutputWriter,
    results: &SearchResults<T>,
    page: u32,
) -> Result<()> {
    match output.format() {
        OutputFormat::Json => crate::output::write_json(results),
        OutputFormat::Table => {
            output.write_info(&summary(results, page));
            if results.total_pages > 0 && u64::from(page) > results.total_pages {
                output.write_warning(&format!(
                    "Page {} is past the last page ({})",
                    page, results.total_pages
                ));
            }
            output.write_list(&results.results)
        }
    }
}

fn summary<T>(results: &SearchResults<T>, page: u32) -> String {
    format!(
        "{} results (page {} of {})",
        format_count(results.total),
        page,
        results.total_pages.max(1)
    )
}
