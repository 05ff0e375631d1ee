//
//  kongo
//  cli/node.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo node`: information and health of the node serving the Admin API.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::resources::{NodeInfo, NodeStatus};
use crate::output::{format_bool, format_list, print_field, print_header, TableBuilder, TableOutput};

use super::{interrupt_token, GlobalOptions};

#[derive(Args, Debug)]
pub struct NodeCommand {
    #[command(subcommand)]
    pub command: NodeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NodeSubcommand {
    /// Show version, hostname and configuration
    Info,

    /// Show connection counters and datastore health
    Status,
}

impl NodeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let node = client.node().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            NodeSubcommand::Info => {
                let (info, _) = node.info().await?;
                writer.write(&info)
            }
            NodeSubcommand::Status => {
                let (status, _) = node.status().await?;
                writer.write(&status)
            }
        }
    }
}

impl TableOutput for NodeInfo {
    fn print_table(&self, color: bool) {
        let title = format!("Kong {}", self.version);
        if color {
            println!("{}", style(&title).bold());
        } else {
            println!("{}", title);
        }
        println!();

        print_field("Hostname", &self.hostname, color);
        if let Some(node_id) = &self.node_id {
            print_field("Node ID", node_id, color);
        }
        print_field("Lua", &self.lua_version, color);
        print_field("Database", &self.configuration.database, color);
        print_field("Admin listen", &format_list(&self.configuration.admin_listen), color);
        print_field("Proxy listen", &format_list(&self.configuration.proxy_listen), color);
        print_field(
            "Timers",
            &format!("{} running, {} pending", self.timers.running, self.timers.pending),
            color,
        );

        if !self.plugins.enabled_in_cluster.is_empty() {
            println!();
            print_header("Plugins enabled in cluster");
            for plugin in &self.plugins.enabled_in_cluster {
                println!("  {}", plugin);
            }
        }
    }
}

impl TableOutput for NodeStatus {
    fn print_table(&self, color: bool) {
        print_field("Database reachable", &format_bool(self.database.reachable, color), color);
        println!();

        let server = &self.server;
        TableBuilder::new()
            .color(color)
            .headers(["Connection", "Count"])
            .rows([
                ["accepted".to_string(), server.connections_accepted.to_string()],
                ["active".to_string(), server.connections_active.to_string()],
                ["handled".to_string(), server.connections_handled.to_string()],
                ["reading".to_string(), server.connections_reading.to_string()],
                ["writing".to_string(), server.connections_writing.to_string()],
                ["waiting".to_string(), server.connections_waiting.to_string()],
            ])
            .print();

        print_field("Total requests", &server.total_requests.to_string(), color);
    }
}
