//
//  kongo
//  cli/service.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo service`: upstream services.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::common::{ListOptions, ListResponse};
use crate::api::resources::{NewService, Service, ServiceHost};
use crate::output::{format_timestamp, print_field, truncate, TableBuilder, TableOutput};

use super::{interrupt_token, write_page, GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct ServiceCommand {
    #[command(subcommand)]
    pub command: ServiceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ServiceSubcommand {
    /// List services
    #[command(visible_alias = "ls")]
    List(PageArgs),

    /// Show a service
    #[command(visible_alias = "view")]
    Get(GetArgs),

    /// Register a service by URL or by host
    Create(CreateArgs),

    /// Delete a service
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Service id or name
    pub id: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Service id or name
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Service name
    #[arg(long)]
    pub name: String,

    /// Upstream URL, e.g. http://billing.internal:8080/v1
    #[arg(long, required_unless_present = "host", conflicts_with = "host")]
    pub url: Option<String>,

    /// Upstream host
    #[arg(long)]
    pub host: Option<String>,

    /// Upstream port
    #[arg(long, requires = "host")]
    pub port: Option<u16>,

    /// Upstream protocol (http or https)
    #[arg(long, requires = "host", value_parser = ["http", "https"])]
    pub protocol: Option<String>,

    /// Path prefix used upstream
    #[arg(long, requires = "host")]
    pub path: Option<String>,
}

impl CreateArgs {
    fn payload(&self) -> NewService {
        match (&self.url, &self.host) {
            (Some(url), _) => NewService::by_url(&self.name, url),
            (None, host) => {
                let mut target = ServiceHost::new(host.clone().unwrap_or_default());
                target.port = self.port;
                target.protocol = self.protocol.clone();
                target.path = self.path.clone();
                NewService::by_host(&self.name, target)
            }
        }
    }
}

impl ServiceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let services = client.services().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            ServiceSubcommand::List(args) => {
                let (page, _) = services.list(&ListOptions::from(args)).await?;
                write_page(&writer, &page)
            }
            ServiceSubcommand::Get(args) => {
                let (service, _) = services.get(&args.id).await?;
                writer.write(&service)
            }
            ServiceSubcommand::Create(args) => {
                let (service, _) = services.create(&args.payload()).await?;
                writer.write_success(&format!("Created service {} ({})", service.name, service.id));
                writer.write(&service)
            }
            ServiceSubcommand::Delete(args) => {
                services.delete(&args.id).await?;
                writer.write_success(&format!("Deleted service {}", args.id));
                Ok(())
            }
        }
    }
}

fn upstream(service: &Service) -> String {
    format!(
        "{}://{}:{}{}",
        service.protocol,
        service.host,
        service.port,
        service.path.as_deref().unwrap_or("")
    )
}

impl TableOutput for ListResponse<Service> {
    fn print_table(&self, color: bool) {
        if self.data.is_empty() {
            println!("No services found");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["ID", "Name", "Upstream", "Created"])
            .rows(self.data.iter().map(|service| {
                [
                    service.id.clone(),
                    service.name.clone(),
                    truncate(&upstream(service), 48),
                    format_timestamp(&service.created_at),
                ]
            }))
            .print();
    }
}

impl TableOutput for Service {
    fn print_table(&self, color: bool) {
        let name = if self.name.is_empty() { "(unnamed)" } else { &self.name };
        if color {
            println!("{}", style(name).bold());
        } else {
            println!("{}", name);
        }
        println!();

        print_field("ID", &self.id, color);
        print_field("Upstream", &upstream(self), color);
        print_field("Retries", &self.retries.to_string(), color);
        print_field(
            "Timeouts (ms)",
            &format!(
                "connect {}, read {}, write {}",
                self.connect_timeout, self.read_timeout, self.write_timeout
            ),
            color,
        );
        print_field("Created", &format_timestamp(&self.created_at), color);
        print_field("Updated", &format_timestamp(&self.updated_at), color);
    }
}
