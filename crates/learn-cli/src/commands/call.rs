use super::Output;
use anyhow::{anyhow, Result};
use clap::Args;
use learn_core::{HttpMethod, RestCall, RestCallBuilder, API_ROOT};
use serde_json::Value;

#[derive(Args, Debug)]
pub struct CallCommand {
  /// HTTP method (GET, POST, PATCH, PUT, DELETE)
  method: HttpMethod,

  /// Path, either absolute (`/learn/api/public/v1/users`) or below the API root (`v1/users`)
  path: String,

  /// Query parameter, repeatable
  #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = parse_key_val)]
  query: Vec<(String, String)>,

  /// JSON request body
  #[arg(short, long)]
  body: Option<String>,
}

pub async fn execute(cmd: CallCommand, out: &Output<'_>) -> Result<()> {
  out.run(build_call(cmd)?).await?;
  Ok(())
}

fn build_call(cmd: CallCommand) -> Result<RestCall<Value>> {
  let mut builder = RestCallBuilder::new(cmd.method, resolve_path(&cmd.path));
  for (key, value) in &cmd.query {
    builder = builder.query(key, value);
  }
  if let Some(body) = cmd.body {
    let body: Value = serde_json::from_str(&body).map_err(|e| anyhow!("Invalid --body JSON: {e}"))?;
    builder = builder.json_body(&body)?;
  }
  Ok(builder.build()?)
}

fn resolve_path(path: &str) -> String {
  if path.starts_with(API_ROOT) {
    path.to_string()
  } else {
    format!("{}/{}", API_ROOT, path.trim_start_matches('/'))
  }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
  s.split_once('=')
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}
