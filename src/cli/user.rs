//
//  unsplash-client
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User profile commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::photo::print_stat;
use super::{GlobalOptions, PageArgs};
use crate::api::common::DEFAULT_STATS_QUANTITY;
use crate::api::users::PhotoStatsOptions;
use crate::api::{Order, Portfolio, Resolution, User, UserStatistics};
use crate::output::{
    format_count, or_dash, print_field, print_header, print_optional_field, TableOutput, TableRow,
};

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Show a public profile
    View(UsernameArgs),

    /// Print the user's portfolio link
    Portfolio(UsernameArgs),

    /// List photos uploaded by the user
    Photos(PhotosArgs),

    /// List photos the user liked
    Likes(LikesArgs),

    /// List the user's collections
    Collections(CollectionsArgs),

    /// Show download and view totals for the user
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct UsernameArgs {
    pub username: String,
}

#[derive(Args, Debug)]
pub struct PhotosArgs {
    pub username: String,

    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long, value_enum, default_value_t = Order::Latest)]
    pub order: Order,

    /// Embed per-photo statistics (JSON output only)
    #[arg(long)]
    pub stats: bool,

    /// Days of history for --stats
    #[arg(long, default_value_t = DEFAULT_STATS_QUANTITY)]
    pub quantity: u32,
}

#[derive(Args, Debug)]
pub struct LikesArgs {
    pub username: String,

    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long, value_enum, default_value_t = Order::Latest)]
    pub order: Order,
}

#[derive(Args, Debug)]
pub struct CollectionsArgs {
    pub username: String,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    pub username: String,

    #[arg(long, value_enum, default_value_t = Resolution::Days)]
    pub resolution: Resolution,

    /// Number of days of history
    #[arg(long, default_value_t = DEFAULT_STATS_QUANTITY)]
    pub quantity: u32,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UserSubcommand::View(args) => self.view(args, global).await,
            UserSubcommand::Portfolio(args) => self.portfolio(args, global).await,
            UserSubcommand::Photos(args) => self.photos(args, global).await,
            UserSubcommand::Likes(args) => self.likes(args, global).await,
            UserSubcommand::Collections(args) => self.collections(args, global).await,
            UserSubcommand::Stats(args) => self.stats(args, global).await,
        }
    }

    async fn view(&self, args: &UsernameArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let user = client.user(&args.username).await.into_result()?;
        global.output().write(&user)
    }

    async fn portfolio(&self, args: &UsernameArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let portfolio: Portfolio = client.user_portfolio(&args.username).await.into_result()?;
        global.output().write(&portfolio)
    }

    async fn photos(&self, args: &PhotosArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let stats = PhotoStatsOptions {
            include: args.stats,
            quantity: args.quantity,
            ..Default::default()
        };
        let photos = client
            .user_photos(&args.username, args.page.pagination(), args.order, stats)
            .await
            .into_result()?;
        global.output().write_list(&photos)
    }

    async fn likes(&self, args: &LikesArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let photos = client
            .user_likes(&args.username, args.page.pagination(), args.order)
            .await
            .into_result()?;
        global.output().write_list(&photos)
    }

    async fn collections(&self, args: &CollectionsArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let collections = client
            .user_collections(&args.username, args.page.pagination())
            .await
            .into_result()?;
        global.output().write_list(&collections)
    }

    async fn stats(&self, args: &StatsArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let stats = client
            .user_statistics(&args.username, args.resolution, args.quantity)
            .await
            .into_result()?;
        global.output().write(&stats)
    }
}

impl TableRow for User {
    fn headers() -> &'static [&'static str] {
        &["Username", "Name", "Photos", "Likes", "Location"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.username.clone(),
            or_dash(self.name.as_deref()),
            format_count(self.total_photos),
            format_count(self.total_likes),
            or_dash(self.location.as_deref()),
        ]
    }
}

impl TableOutput for User {
    fn print_table(&self, color: bool) {
        print_header(&format!("{} (@{})", self.display_name(), self.username));
        println!();

        print_optional_field("Bio", self.bio.as_deref(), color);
        print_optional_field("Location", self.location.as_deref(), color);
        print_optional_field("Portfolio", self.portfolio_url.as_deref(), color);
        print_optional_field("Instagram", self.instagram_username.as_deref(), color);
        print_optional_field("Twitter", self.twitter_username.as_deref(), color);

        println!();
        print_field("Photos", &format_count(self.total_photos), color);
        print_field("Likes", &format_count(self.total_likes), color);
        print_field("Collections", &format_count(self.total_collections), color);

        println!();
        print_field("Web URL", self.links.html.as_str(), color);
    }
}

impl TableOutput for UserStatistics {
    fn print_table(&self, color: bool) {
        print_header(&format!("Statistics for @{}", self.username));
        println!();
        print_stat("Downloads", &self.downloads, color);
        print_stat("Views", &self.views, color);
        if let Some(likes) = &self.likes {
            print_stat("Likes", likes, color);
        }
    }
}
