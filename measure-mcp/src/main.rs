//! Measure MCP Server
//!
//! MCP Server implementing spec 2025-11-25 over newline-delimited stdio.
//!
//! Tools:
//! - list_unit_types: List the valid unit types
//! - list_units: List the valid units of a type
//! - convert: Convert a value from one unit to another
//!
//! stdout carries the protocol; logs go to stderr.

mod config;
mod server;

use std::process::ExitCode;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::ServerConfig;
use server::{handle_request, parse_error, McpRequest, McpResponse, PROTOCOL_VERSION, SERVER_VERSION};

fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);

    tracing::info!(
        version = SERVER_VERSION,
        protocol = PROTOCOL_VERSION,
        decimals = ?config.decimals,
        "Measure MCP Server started"
    );

    let mut stdout = io::stdout();
    match serve(&config, BufReader::new(io::stdin()), &mut stdout).await {
        Ok(()) => {
            tracing::info!("Server shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Server stopped on I/O error");
            ExitCode::FAILURE
        }
    }
}

async fn serve<R, W>(config: &ServerConfig, input: R, output: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    tracing::info!("Server ready, waiting for requests...");

    // EOF - client disconnected
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::debug!(bytes = line.len(), "received");

        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Error parsing request");
                write_response(output, &parse_error(e)).await?;
                continue;
            }
        };

        tracing::debug!(method = %request.method, "processing");

        let response = handle_request(config, &request);

        // Notifications (no id) should NOT receive a response
        if request.id.is_none() {
            tracing::debug!(method = %request.method, "notification processed (no response)");
            continue;
        }

        write_response(output, &response).await?;
    }

    tracing::info!("Client disconnected (EOF)");
    Ok(())
}

async fn write_response<W>(output: &mut W, response: &McpResponse) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut payload = serde_json::to_vec(response)?;
    payload.push(b'\n');
    output.write_all(&payload).await?;
    output.flush().await
}
