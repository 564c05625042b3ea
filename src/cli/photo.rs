//
//  unsplash-client
//  cli/photo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Photo commands.
//!
//! Read commands need only an access key. `like`, `unlike` and `update` act on
//! behalf of a user and need a bearer token (`--bearer-token`,
//! `UNSPLASH_BEARER_TOKEN` or `credentials.bearer_token`).

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use super::{GlobalOptions, PageArgs};
use crate::api::common::DEFAULT_STATS_QUANTITY;
use crate::api::photos::{ExifUpdate, LikeResponse, LocationUpdate};
use crate::api::stats::StatDetail;
use crate::api::{
    DownloadLink, Order, Orientation, Photo, PhotoSize, PhotoStatistics, PhotoUpdate,
    RandomPhotoFilters, Resolution,
};
use crate::output::{
    format_bool, format_count, or_dash, print_field, print_header, print_optional_field,
    truncate, OutputFormat, TableOutput, TableRow,
};

#[derive(Args, Debug)]
pub struct PhotoCommand {
    #[command(subcommand)]
    pub command: PhotoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PhotoSubcommand {
    /// List the editorial feed
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a photo with EXIF and location
    View(ViewArgs),

    /// Show one or more random photos
    Random(RandomArgs),

    /// Show download, view and like statistics
    Stats(StatsArgs),

    /// Register a download and print the file URL
    Download(IdArgs),

    /// Like a photo (needs a bearer token)
    Like(IdArgs),

    /// Remove your like from a photo (needs a bearer token)
    Unlike(IdArgs),

    /// Update a photo you own (needs a bearer token)
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Sort order
    #[arg(long, value_enum, default_value_t = Order::Latest)]
    pub order: Order,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Photo ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Photo ID
    pub id: String,

    /// Also print the image URL of this size
    #[arg(long, value_enum)]
    pub size: Option<PhotoSize>,
}

#[derive(Args, Debug)]
pub struct RandomArgs {
    /// Number of photos (1-30); without it a single photo is shown
    #[arg(long, short = 'c', value_parser = clap::value_parser!(u32).range(1..=30))]
    pub count: Option<u32>,

    /// Limit to these collection IDs (comma-separated or repeated)
    #[arg(long = "collection", value_delimiter = ',')]
    pub collections: Vec<String>,

    /// Limit to featured photos
    #[arg(long)]
    pub featured: bool,

    /// Limit to one photographer
    #[arg(long)]
    pub username: Option<String>,

    /// Limit to photos matching a search term
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    #[arg(long, value_enum)]
    pub orientation: Option<Orientation>,
}

impl RandomArgs {
    fn filters(&self) -> RandomPhotoFilters {
        let mut filters = RandomPhotoFilters::new().collections(self.collections.iter().cloned());
        if self.featured {
            filters = filters.featured(true);
        }
        if let Some(username) = &self.username {
            filters = filters.username(username);
        }
        if let Some(query) = &self.query {
            filters = filters.query(query);
        }
        if let Some(orientation) = self.orientation {
            filters = filters.orientation(orientation);
        }
        filters
    }
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Photo ID
    pub id: String,

    #[arg(long, value_enum, default_value_t = Resolution::Days)]
    pub resolution: Resolution,

    /// Number of days of history
    #[arg(long, default_value_t = DEFAULT_STATS_QUANTITY)]
    pub quantity: u32,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Photo ID
    pub id: String,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Show the photo on your profile
    #[arg(long)]
    pub show_on_profile: Option<bool>,

    /// Replace the tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,

    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Location name
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Camera make
    #[arg(long)]
    pub make: Option<String>,

    /// Camera model
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub exposure_time: Option<String>,

    #[arg(long)]
    pub aperture: Option<String>,

    #[arg(long)]
    pub focal_length: Option<String>,

    #[arg(long)]
    pub iso: Option<u32>,
}

impl UpdateArgs {
    fn to_update(&self) -> PhotoUpdate {
        PhotoUpdate {
            description: self.description.clone(),
            show_on_profile: self.show_on_profile,
            tags: self.tags.clone(),
            location: LocationUpdate {
                latitude: self.latitude,
                longitude: self.longitude,
                name: self.location.clone(),
                city: self.city.clone(),
                country: self.country.clone(),
                confidential: None,
            },
            exif: ExifUpdate {
                make: self.make.clone(),
                model: self.model.clone(),
                exposure_time: self.exposure_time.clone(),
                aperture_value: self.aperture.clone(),
                focal_length: self.focal_length.clone(),
                iso_speed_ratings: self.iso,
            },
        }
    }
}

impl PhotoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PhotoSubcommand::List(args) => self.list(args, global).await,
            PhotoSubcommand::View(args) => self.view(args, global).await,
            PhotoSubcommand::Random(args) => self.random(args, global).await,
            PhotoSubcommand::Stats(args) => self.stats(args, global).await,
            PhotoSubcommand::Download(args) => self.download(args, global).await,
            PhotoSubcommand::Like(args) => self.like(args, global, true).await,
            PhotoSubcommand::Unlike(args) => self.like(args, global, false).await,
            PhotoSubcommand::Update(args) => self.update(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let photos = client
            .list_photos(args.page.pagination(), args.order)
            .await
            .into_result()?;
        global.output().write_list(&photos)
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let photo = client.photo(&args.id).await.into_result()?;
        let output = global.output();
        output.write(&photo)?;

        if let (Some(size), OutputFormat::Table) = (args.size, output.format()) {
            println!();
            print_field("Image", photo.url(size).as_str(), output.color_enabled());
        }
        Ok(())
    }

    async fn random(&self, args: &RandomArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let filters = args.filters();
        let output = global.output();

        match args.count {
            Some(count) => {
                let photos = client.random_photos(&filters, count).await.into_result()?;
                output.write_list(&photos)
            }
            None => {
                let photo = client.random_photo(&filters).await.into_result()?;
                output.write(&photo)
            }
        }
    }

    async fn stats(&self, args: &StatsArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let stats = client
            .photo_statistics(&args.id, args.resolution, args.quantity)
            .await
            .into_result()?;
        global.output().write(&stats)
    }

    async fn download(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let link = client.track_download(&args.id).await.into_result()?;
        global.output().write(&link)
    }

    async fn like(&self, args: &IdArgs, global: &GlobalOptions, like: bool) -> Result<()> {
        let client = global.client()?;
        let response = if like {
            client.like_photo(&args.id).await
        } else {
            client.unlike_photo(&args.id).await
        }
        .into_result()?;

        let output = global.output();
        match output.format() {
            OutputFormat::Json => output.write(&response),
            OutputFormat::Table => {
                let verb = if like { "Liked" } else { "Unliked" };
                output.write_success(&format!(
                    "{} photo {} ({} likes)",
                    verb, response.photo.id, response.photo.likes
                ));
                Ok(())
            }
        }
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let update = args.to_update();
        if update.to_params().is_empty() {
            bail!("Nothing to update. Pass at least one field, e.g. --description");
        }

        let client = global.client()?;
        let photo = client.update_photo(&args.id, &update).await.into_result()?;

        let output = global.output();
        match output.format() {
            OutputFormat::Json => output.write(&photo),
            OutputFormat::Table => {
                output.write_success(&format!("Updated photo {}", photo.id));
                Ok(())
            }
        }
    }
}

impl TableRow for Photo {
    fn headers() -> &'static [&'static str] {
        &["ID", "Photographer", "Size", "Likes", "Description"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        let description = self.description.as_deref().or(self.alt_description.as_deref());
        vec![
            self.id.clone(),
            self.user.display_name().to_string(),
            format!("{}x{}", self.width, self.height),
            format_count(self.likes),
            truncate(&or_dash(description), 50),
        ]
    }
}

impl TableOutput for Photo {
    fn print_table(&self, color: bool) {
        let title = self
            .description
            .as_deref()
            .or(self.alt_description.as_deref())
            .unwrap_or(&self.id);
        print_header(title);
        println!();

        print_field("ID", &self.id, color);
        print_field(
            "Photographer",
            &format!("{} (@{})", self.user.display_name(), self.user.username),
            color,
        );
        print_field("Size", &format!("{}x{}", self.width, self.height), color);
        print_optional_field("Color", self.color.as_deref(), color);
        print_field("Likes", &format_count(self.likes), color);
        if let Some(views) = self.views {
            print_field("Views", &format_count(views), color);
        }
        if let Some(downloads) = self.downloads {
            print_field("Downloads", &format_count(downloads), color);
        }
        print_field("Liked by you", &format_bool(self.liked_by_user, color), color);

        if let Some(location) = &self.location {
            let place = location.name.as_deref().or(location.city.as_deref());
            print_optional_field("Location", place, color);
        }

        if let Some(exif) = &self.exif {
            print_optional_field("Camera", exif.name.as_deref().or(exif.model.as_deref()), color);
            print_optional_field("Exposure", exif.exposure_time.as_deref(), color);
            print_optional_field("Aperture", exif.aperture.as_deref(), color);
            print_optional_field("Focal length", exif.focal_length.as_deref(), color);
            if let Some(iso) = exif.iso {
                print_field("ISO", &iso.to_string(), color);
            }
        }

        println!();
        print_field("Web URL", self.links.html.as_str(), color);
        print_field("Created", &self.created_at.format("%Y-%m-%d").to_string(), color);
    }
}

impl TableOutput for PhotoStatistics {
    fn print_table(&self, color: bool) {
        print_header(&format!("Statistics for {}", self.id));
        println!();
        print_stat("Downloads", &self.downloads, color);
        print_stat("Views", &self.views, color);
        if let Some(likes) = &self.likes {
            print_stat("Likes", likes, color);
        }
    }
}

/// Prints a total with the change over its history window.
pub(crate) fn print_stat(label: &str, stat: &StatDetail, color: bool) {
    let history = &stat.historical;
    let change = if color {
        style(format!("{:+}", history.change)).green().to_string()
    } else {
        format!("{:+}", history.change)
    };
    print_field(
        label,
        &format!(
            "{} ({} over {} {})",
            format_count(stat.total),
            change,
            history.quantity,
            history.resolution
        ),
        color,
    );
}

impl TableOutput for DownloadLink {
    fn print_table(&self, _color: bool) {
        match &self.url {
            Some(url) => println!("{url}"),
            None => println!("-"),
        }
    }
}

impl TableOutput for LikeResponse {
    fn print_table(&self, color: bool) {
        print_field("Photo", &self.photo.id, color);
        print_field("Likes", &format_count(self.photo.likes), color);
        print_field("Liked by you", &format_bool(self.photo.liked_by_user, color), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> PhotoSubcommand {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Commands::Photo(cmd) => cmd.command,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_random_args_build_filters() {
        let PhotoSubcommand::Random(args) = parse(&[
            "unsplash",
            "photo",
            "random",
            "--collection",
            "1,2",
            "--orientation",
            "portrait",
            "--featured",
        ]) else {
            panic!("expected random");
        };

        let params = args.filters().to_params();
        assert_eq!(params.get("collections"), Some("1,2"));
        assert_eq!(params.get("orientation"), Some("portrait"));
        assert_eq!(params.get("featured"), Some("true"));
        assert_eq!(params.get("username"), None);
        assert_eq!(args.count, None);
    }

    #[test]
    fn test_random_count_is_bounded() {
        let result = Cli::try_parse_from(["unsplash", "photo", "random", "--count", "31"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_args_map_to_params() {
        let PhotoSubcommand::Update(args) = parse(&[
            "unsplash",
            "photo",
            "update",
            "abc",
            "--tags",
            "fog,valley",
            "--latitude",
            "-17.82",
            "--iso",
            "200",
        ]) else {
            panic!("expected update");
        };

        let params = args.to_update().to_params();
        assert_eq!(params.get("tags"), Some("fog,valley"));
        assert_eq!(params.get("location[latitude]"), Some("-17.82"));
        assert_eq!(params.get("exif[iso_speed_ratings]"), Some("200"));
        assert_eq!(params.get("description"), None);
    }

    #[test]
    fn test_list_defaults() {
        let PhotoSubcommand::List(args) = parse(&["unsplash", "photo", "list"]) else {
            panic!("expected list");
        };
        assert_eq!(args.order, Order::Latest);
        assert_eq!((args.page.page, args.page.per_page), (1, 10));
    }
}
