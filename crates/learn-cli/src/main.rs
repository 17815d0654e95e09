/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use learn_client::LearnClient;
use learn_core::Config;

mod commands;
use commands::{call::CallCommand, query::QueryCommand, Output};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "learn")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Print the request instead of sending it
  #[arg(long, global = true)]
  dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  #[command(flatten)]
  Query(QueryCommand),

  /// Exchange the application key and secret for an access token
  Token,

  /// Send an arbitrary request, e.g. `learn call GET v1/users --query limit=5`
  Call(CallCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = Config::from_env()?;
  let client = LearnClient::new(config.clone())?;
  let out = Output::new(&client, cli.dry_run);

  match cli.command {
    Commands::Query(cmd) => {
      if cmd.needs_token() {
        commands::token::ensure_access_token(&out, &config).await?;
      }
      commands::query::execute(cmd, &out).await?
    }
    Commands::Token => commands::token::execute(&out).await?,
    Commands::Call(cmd) => {
      commands::token::ensure_access_token(&out, &config).await?;
      commands::call::execute(cmd, &out).await?
    }
  }

  Ok(())
}
