//
//  kongo
//  cli/consumer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo consumer`: consumers on pre-1.0 Kong.

use anyhow::Result;
use chrono::DateTime;
use clap::{Args, Subcommand};

use crate::api::common::ListResponse;
use crate::api::resources::Consumer;
use crate::output::{print_field, TableBuilder, TableOutput};

use super::{interrupt_token, write_page, GlobalOptions};

#[derive(Args, Debug)]
pub struct ConsumerCommand {
    #[command(subcommand)]
    pub command: ConsumerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConsumerSubcommand {
    /// List consumers
    #[command(visible_alias = "ls")]
    List,

    /// Show a consumer
    #[command(visible_alias = "view")]
    Get(IdArgs),

    /// Delete a consumer
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Consumer id or username
    pub id: String,
}

impl ConsumerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let consumers = client.consumers().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            ConsumerSubcommand::List => {
                let (page, _) = consumers.list().await?;
                write_page(&writer, &page)
            }
            ConsumerSubcommand::Get(args) => {
                let (consumer, _) = consumers.get(&args.id).await?;
                writer.write(&consumer)
            }
            ConsumerSubcommand::Delete(args) => {
                consumers.delete(&args.id).await?;
                writer.write_success(&format!("Deleted consumer {}", args.id));
                Ok(())
            }
        }
    }
}

/// Legacy `created_at` values are milliseconds since the epoch.
fn format_created(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|at| at.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

impl TableOutput for ListResponse<Consumer> {
    fn print_table(&self, color: bool) {
        if self.data.is_empty() {
            println!("No consumers found");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["ID", "Username", "Custom ID", "Created"])
            .rows(self.data.iter().map(|consumer| {
                [
                    or_dash(&consumer.id),
                    or_dash(&consumer.username),
                    or_dash(&consumer.custom_id),
                    format_created(consumer.created_at),
                ]
            }))
            .print();
    }
}

impl TableOutput for Consumer {
    fn print_table(&self, color: bool) {
        print_field("ID", &or_dash(&self.id), color);
        print_field("Username", &or_dash(&self.username), color);
        print_field("Custom ID", &or_dash(&self.custom_id), color);
        print_field("Created", &format_created(self.created_at), color);
    }
}
