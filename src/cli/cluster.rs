//
//  kongo
//  cli/cluster.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo cluster`: legacy cluster membership.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::resources::ClusterStatus;
use crate::output::{format_status, TableBuilder, TableOutput};

use super::{interrupt_token, GlobalOptions};

#[derive(Args, Debug)]
pub struct ClusterCommand {
    #[command(subcommand)]
    pub command: ClusterSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ClusterSubcommand {
    /// List cluster members
    Status,

    /// Forcibly remove a member
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Member name
    pub name: String,
}

impl ClusterCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let cluster = client.cluster().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            ClusterSubcommand::Status => {
                let (status, _) = cluster.status().await?;
                writer.write(&status)
            }
            ClusterSubcommand::Delete(args) => {
                cluster.delete(&args.name).await?;
                writer.write_success(&format!("Removed cluster member {}", args.name));
                Ok(())
            }
        }
    }
}

impl TableOutput for ClusterStatus {
    fn print_table(&self, color: bool) {
        if self.nodes.is_empty() {
            println!("No cluster members");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["Name", "Address", "Status"])
            .rows(self.nodes.iter().map(|node| {
                [
                    node.name.clone(),
                    node.address.clone(),
                    format_status(&node.status, color),
                ]
            }))
            .print();
    }
}
