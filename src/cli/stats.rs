//
//  unsplash-client
//  cli/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site-wide statistics commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;
use crate::api::{MonthStats, TotalStats};
use crate::output::{format_count, print_field, print_header, TableOutput};

#[derive(Args, Debug)]
pub struct StatsCommand {
    #[command(subcommand)]
    pub command: StatsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StatsSubcommand {
    /// Totals since launch
    Total,

    /// Activity over the past 30 days
    Month,
}

impl StatsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let output = global.output();
        match self.command {
            StatsSubcommand::Total => output.write(&client.total_stats().await.into_result()?),
            StatsSubcommand::Month => output.write(&client.month_stats().await.into_result()?),
        }
    }
}

impl TableOutput for TotalStats {
    fn print_table(&self, color: bool) {
        print_header("Unsplash totals");
        println!();
        for (label, value) in [
            ("Photos", self.photos),
            ("Downloads", self.downloads),
            ("Views", self.views),
            ("Likes", self.likes),
            ("Photographers", self.photographers),
            ("Pixels", self.pixels),
            ("Downloads per second", self.downloads_per_second),
            ("Views per second", self.views_per_second),
            ("Developers", self.developers),
            ("Applications", self.applications),
            ("API requests", self.requests),
        ] {
            print_field(label, &format_count(value), color);
        }
    }
}

impl TableOutput for MonthStats {
    fn print_table(&self, color: bool) {
        print_header("Last 30 days");
        println!();
        for (label, value) in [
            ("Downloads", self.downloads),
            ("Views", self.views),
            ("Likes", self.likes),
            ("New photos", self.new_photos),
            ("New photographers", self.new_photographers),
            ("New pixels", self.new_pixels),
            ("New developers", self.new_developers),
            ("New applications", self.new_applications),
            ("API requests", self.new_requests),
        ] {
            print_field(label, &format_count(value), color);
        }
    }
}
