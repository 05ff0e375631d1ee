//
//  kongo
//  cli/sni.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo sni`: SNI objects.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::ListResponse;
use crate::api::resources::Sni;
use crate::output::{format_timestamp, print_field, TableBuilder, TableOutput};

use super::{interrupt_token, write_page, GlobalOptions};

#[derive(Args, Debug)]
pub struct SniCommand {
    #[command(subcommand)]
    pub command: SniSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SniSubcommand {
    /// List SNIs
    #[command(visible_alias = "ls")]
    List,

    /// Show an SNI
    #[command(visible_alias = "view")]
    Get(NameArgs),

    /// Delete an SNI
    #[command(visible_alias = "rm")]
    Delete(NameArgs),
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Server name
    pub name: String,
}

impl SniCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let snis = client.snis().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            SniSubcommand::List => {
                let (page, _) = snis.list().await?;
                write_page(&writer, &page)
            }
            SniSubcommand::Get(args) => {
                let (sni, _) = snis.get(&args.name).await?;
                writer.write(&sni)
            }
            SniSubcommand::Delete(args) => {
                snis.delete(&args.name).await?;
                writer.write_success(&format!("Deleted SNI {}", args.name));
                Ok(())
            }
        }
    }
}

impl TableOutput for ListResponse<Sni> {
    fn print_table(&self, color: bool) {
        if self.data.is_empty() {
            println!("No SNIs found");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["Name", "Certificate", "Created"])
            .rows(self.data.iter().map(|sni| {
                [
                    sni.name.clone(),
                    sni.ssl_certificate_id.clone(),
                    format_timestamp(&sni.created_at),
                ]
            }))
            .print();
    }
}

impl TableOutput for Sni {
    fn print_table(&self, color: bool) {
        print_field("Name", &self.name, color);
        print_field("Certificate", &self.ssl_certificate_id, color);
        print_field("Created", &format_timestamp(&self.created_at), color);
    }
}
