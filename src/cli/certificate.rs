//
//  kongo
//  cli/certificate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `kongo certificate`: TLS certificates.
//!
//! Key material is never printed in table mode; use `--json` to see it.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::ListResponse;
use crate::api::resources::Certificate;
use crate::output::{format_list, format_timestamp, print_field, TableBuilder, TableOutput};

use super::{interrupt_token, write_page, GlobalOptions};

#[derive(Args, Debug)]
pub struct CertificateCommand {
    #[command(subcommand)]
    pub command: CertificateSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CertificateSubcommand {
    /// List certificates
    #[command(visible_alias = "ls")]
    List,

    /// Show a certificate
    #[command(visible_alias = "view")]
    Get(IdArgs),

    /// Delete a certificate
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Certificate id or one of its SNIs
    pub id: String,
}

impl CertificateCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let certificates = client.certificates().with_cancel(interrupt_token());
        let writer = global.writer();

        match &self.command {
            CertificateSubcommand::List => {
                let (page, _) = certificates.list().await?;
                write_page(&writer, &page)
            }
            CertificateSubcommand::Get(args) => {
                let (certificate, _) = certificates.get(&args.id).await?;
                writer.write(&certificate)
            }
            CertificateSubcommand::Delete(args) => {
                certificates.delete(&args.id).await?;
                writer.write_success(&format!("Deleted certificate {}", args.id));
                Ok(())
            }
        }
    }
}

impl TableOutput for ListResponse<Certificate> {
    fn print_table(&self, color: bool) {
        if self.data.is_empty() {
            println!("No certificates found");
            return;
        }

        TableBuilder::new()
            .color(color)
            .headers(["ID", "SNIs", "Created"])
            .rows(self.data.iter().map(|certificate| {
                [
                    certificate.id.clone(),
                    format_list(&certificate.snis),
                    format_timestamp(&certificate.created_at),
                ]
            }))
            .print();
    }
}

impl TableOutput for Certificate {
    fn print_table(&self, color: bool) {
        print_field("ID", &self.id, color);
        print_field("SNIs", &format_list(&self.snis), color);
        print_field("Created", &format_timestamp(&self.created_at), color);
    }
}
