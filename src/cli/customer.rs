//
//  kongo
//  cli/customer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo customer`: customers.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::ListResponse;
use crate::api::resources::{Customer, CustomerListOptions};
use crate::output::{format_timestamp, print_field, TableBuilder, TableOutput};

use super::{interrupt_token, write_page, GlobalOptions, PageArgs};

#[derive(Args, Debug)]
pub struct CustomerCommand {
    #[command(subcommand)]
    pub command: CustomerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CustomerSubcommand {
    /// List customers
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a customer
    #[command(visible_alias = "view")]
    Get(IdArgs),

    /// Delete a customer
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by username
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Filter by custom id
    #[arg(long)]
    pub custom_id: Option<String>,

    /// Filter by id
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

impl From<&ListArgs> for CustomerListOptions {
    fn from(args: &ListArgs) -> Self {
        Self {
            custom_id: args.custom_id.clone(),
            id: args.id.clone(),
            offset: args.page.offset.clone(),
            size: args.page.size,
            username: args.username.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Customer id or username
    pub id: String,
}

impl CustomerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let customers = client.customers().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            CustomerSubcommand::List(args) => {
                let (page, _) = customers.list(&CustomerListOptions::from(args)).await?;
                write_page(&writer, &page)
            }
            CustomerSubcommand::Get(args) => {
                let (customer, _) = customers.get(&args.id).await?;
                writer.write(&customer)
            }
            CustomerSubcommand::Delete(args) => {
                customers.delete(&args.id).await?;
                writer.write_success(&format!("Deleted customer {}", args.id));
                Ok(())
            }
        }
    }
}

impl TableOutput for ListResponse<Customer> {
    fn print_table(&self, color: bool) {
        if self.data.is_empty() {
            println!("No customers found");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["ID", "Username", "Custom ID", "Created"])
            .rows(self.data.iter().map(|customer| {
                [
                    customer.id.clone(),
                    customer.username.clone().unwrap_or_else(|| "-".into()),
                    customer.custom_id.clone().unwrap_or_else(|| "-".into()),
                    format_timestamp(&customer.created_at),
                ]
            }))
            .print();
    }
}

impl TableOutput for Customer {
    fn print_table(&self, color: bool) {
        print_field("ID", &self.id, color);
        print_field("Username", self.username.as_deref().unwrap_or("-"), color);
        print_field("Custom ID", self.custom_id.as_deref().unwrap_or("-"), color);
        print_field("Created", &format_timestamp(&self.created_at), color);
    }
}
