//
//  kongo
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Raw Admin API access
//!
//! Sends one request through the same client the other commands use, so
//! base-address resolution, headers and error handling are identical. Useful
//! for endpoints without a dedicated command.
//!
//! ## Examples
//!
//! ```bash
//! # Node status
//! kongo api /status
//!
//! # Create a service
//! kongo api -X POST /services -d '{"name": "foo", "url": "http://foo.org"}'
//!
//! # Body from a file (- for stdin)
//! kongo api -X PATCH /routes/1 --input route.json
//!
//! # Method names are upper-cased, extension methods included
//! kongo api -X purge /cache --silent
//! ```

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::Value;

use crate::api::KongResponse;
use crate::output::write_json;

use super::{interrupt_token, GlobalOptions};

/// Make a raw Admin API request
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// Path relative to the Admin API address (e.g. /status)
    pub endpoint: String,

    /// HTTP method, upper-cased before sending
    #[arg(long, short = 'X', default_value = "GET", value_parser = parse_method)]
    pub method: String,

    /// JSON request body
    #[arg(long, short = 'd', conflicts_with = "input")]
    pub data: Option<String>,

    /// Read the JSON request body from a file (- for stdin)
    #[arg(long, short = 'f')]
    pub input: Option<String>,

    /// Include response headers in output
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Do not print the response body
    #[arg(long)]
    pub silent: bool,
}

fn parse_method(value: &str) -> Result<String, String> {
    Ok(value.to_ascii_uppercase())
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let body = self.build_body()?;

        let request = client.new_request(
            Some(interrupt_token()),
            &self.method,
            &self.endpoint,
            body.as_ref(),
        )?;

        if self.expects_body() {
            let (value, response) = client.execute_into::<Value>(request).await?;
            self.print_headers(&response);
            write_json(&value)
        } else {
            let response = client.execute(request).await?;
            self.print_headers(&response);
            if !self.silent {
                println!("{}", response.status());
            }
            Ok(())
        }
    }

    /// `HEAD` never carries a body and Kong answers deletes with 204.
    fn expects_body(&self) -> bool {
        if self.silent {
            return false;
        }
        self.method != Method::HEAD.as_str() && self.method != Method::DELETE.as_str()
    }

    fn build_body(&self) -> Result<Option<Value>> {
        let content = match (&self.data, &self.input) {
            (Some(data), _) => data.clone(),
            (None, Some(input)) if input == "-" => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read request body from stdin")?;
                buffer
            }
            (None, Some(input)) => fs::read_to_string(input)
                .with_context(|| format!("Failed to read request body from {input}"))?,
            (None, None) => return Ok(None),
        };

        if content.trim().is_empty() {
            bail!("Request body is empty");
        }

        let value = serde_json::from_str(&content).context("Request body is not valid JSON")?;
        Ok(Some(value))
    }

    fn print_headers(&self, response: &KongResponse) {
        if !self.include {
            return;
        }
        eprintln!("{} {}", style("HTTP").dim(), response.status());
        for (name, value) in response.headers() {
            eprintln!("{}: {}", name, value.to_str().unwrap_or(""));
        }
        eprintln!();
    }
}
