//
//  unsplash-client
//  cli/collection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Collection commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use super::{GlobalOptions, PageArgs};
use crate::api::Collection;
use crate::output::{
    format_bool, format_count, or_dash, print_field, print_header, print_optional_field,
    truncate, TableOutput, TableRow,
};

#[derive(Args, Debug)]
pub struct CollectionCommand {
    #[command(subcommand)]
    pub command: CollectionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CollectionSubcommand {
    /// List collections
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a collection
    View(ViewArgs),

    /// List the photos in a collection
    Photos(PhotosArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only featured collections
    #[arg(long)]
    pub featured: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Collection ID
    pub id: String,

    /// Look the ID up among curated collections
    #[arg(long)]
    pub curated: bool,
}

#[derive(Args, Debug)]
pub struct PhotosArgs {
    /// Collection ID
    pub id: String,

    #[command(flatten)]
    pub page: PageArgs,
}

impl CollectionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            CollectionSubcommand::List(args) => self.list(args, global).await,
            CollectionSubcommand::View(args) => self.view(args, global).await,
            CollectionSubcommand::Photos(args) => self.photos(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let collections = client
            .list_collections(args.page.pagination(), args.featured)
            .await
            .into_result()?;
        global.output().write_list(&collections)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let collection = client
            .collection(&args.id, args.curated)
            .await
            .into_result()?;
        global.output().write(&collection)
    }

    async fn photos(&self, args: &PhotosArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let photos = client
            .collection_photos(&args.id, args.page.pagination())
            .await
            .into_result()?;
        global.output().write_list(&photos)
    }
}

impl TableRow for Collection {
    fn headers() -> &'static [&'static str] {
        &["ID", "Title", "Photos", "Curator", "Visibility"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let visibility = if self.private { "private" } else { "public" };
        let visibility = if color && self.private {
            style(visibility).yellow().to_string()
        } else {
            visibility.to_string()
        };

        vec![
            self.id.clone(),
            truncate(&self.title, 40),
            format_count(self.total_photos),
            or_dash(self.user.as_ref().map(|u| u.username.as_str())),
            visibility,
        ]
    }
}

impl TableOutput for Collection {
    fn print_table(&self, color: bool) {
        print_header(&self.title);
        println!();

        print_optional_field("Description", self.description.as_deref(), color);
        print_field("ID", &self.id, color);
        print_field("Photos", &format_count(self.total_photos), color);
        if let Some(user) = &self.user {
            print_field(
                "Curator",
                &format!("{} (@{})", user.display_name(), user.username),
                color,
            );
        }
        print_field("Featured", &format_bool(self.featured, color), color);
        print_field("Curated", &format_bool(self.curated, color), color);
        print_field("Private", &format_bool(self.private, color), color);

        if let Some(tags) = self.tags.as_ref().filter(|tags| !tags.is_empty()) {
            let titles: Vec<&str> = tags.iter().map(|tag| tag.title.as_str()).collect();
            print_field("Tags", &titles.join(", "), color);
        }

        if let Some(links) = &self.links {
            println!();
            print_field("Web URL", links.html.as_str(), color);
        }
        if let Some(published) = self.published_at {
            print_field("Published", &published.format("%Y-%m-%d").to_string(), color);
        }
    }
}
