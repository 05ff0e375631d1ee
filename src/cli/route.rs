//
//  kongo
//  cli/route.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo route`: routes.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::{ListOptions, ListResponse};
use crate::api::resources::Route;
use crate::output::{
    format_bool, format_list, format_timestamp, print_field, TableBuilder, TableOutput,
};

use super::{interrupt_token, write_page, GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct RouteCommand {
    #[command(subcommand)]
    pub command: RouteSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RouteSubcommand {
    /// List routes
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Show a route
    #[command(visible_alias = "view")]
    Get(IdArgs),

    /// Delete a route
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Route id
    pub id: String,
}

impl RouteCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let routes = client.routes().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            RouteSubcommand::List(args) => {
                let (page, _) = routes.list(&ListOptions::from(args)).await?;
                write_page(&writer, &page)
            }
            RouteSubcommand::Get(args) => {
                let (route, _) = routes.get(&args.id).await?;
                writer.write(&route)
            }
            RouteSubcommand::Delete(args) => {
                routes.delete(&args.id).await?;
                writer.write_success(&format!("Deleted route {}", args.id));
                Ok(())
            }
        }
    }
}

fn service_id(route: &Route) -> String {
    route
        .service
        .as_ref()
        .map(|service| service.id.clone())
        .unwrap_or_else(|| "-".to_string())
}

impl TableOutput for ListResponse<Route> {
    fn print_table(&self, color: bool) {
        if self.data.is_empty() {
            println!("No routes found");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["ID", "Hosts", "Paths", "Methods", "Service"])
            .rows(self.data.iter().map(|route| {
                [
                    route.id.clone(),
                    format_list(&route.hosts),
                    format_list(&route.paths),
                    format_list(&route.methods),
                    service_id(route),
                ]
            }))
            .print();
    }
}

impl TableOutput for Route {
    fn print_table(&self, color: bool) {
        print_field("ID", &self.id, color);
        print_field("Service", &service_id(self), color);
        print_field("Protocols", &format_list(&self.protocols), color);
        print_field("Hosts", &format_list(&self.hosts), color);
        print_field("Paths", &format_list(&self.paths), color);
        print_field("Methods", &format_list(&self.methods), color);
        print_field("Strip path", &format_bool(self.strip_path, color), color);
        print_field("Preserve host", &format_bool(self.preserve_host, color), color);
        print_field("Created", &format_timestamp(&self.created_at), color);
        print_field("Updated", &format_timestamp(&self.updated_at), color);
    }
}
