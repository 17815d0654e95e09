/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

//! Term Enrollment Report Example
//!
//! Walks every term, then lists one user's enrollments grouped by term.
//! Requires `LEARN_BASE_URL` plus either `LEARN_ACCESS_TOKEN` or
//! `LEARN_APP_KEY`/`LEARN_APP_SECRET`.
//!
//! ```text
//! cargo run -p learn-client --example term_report -- userName:jsmith
//! ```

use learn_client::endpoints::{course_memberships, courses, oauth, terms, FieldsOptions};
use learn_client::{Executable, LearnClient};
use learn_core::{Config, Error};
use learn_models::oauth::TokenGrant;
use std::collections::BTreeMap;

#[tokio::main]
async fn main() -> Result<(), Error> {
  tracing_subscriber::fmt().with_env_filter("info").init();

  let user_id = std::env::args().nth(1).unwrap_or_else(|| "me".to_string());
  let config = Config::from_env()?;
  let needs_token = config.access_token.is_none();
  let client = LearnClient::new(config)?;

  if needs_token {
    let token = oauth::request_token(&TokenGrant::ClientCredentials)?.execute(&client).await?;
    client.set_access_token(token.access_token).await;
  }

  let all_terms = client.collect_all(terms::get_terms(&terms::GetTermsOptions::new().limit(100))?).await?;
  let term_names: BTreeMap<String, String> =
    all_terms.into_iter().map(|t| (t.id.clone(), t.name.unwrap_or(t.id))).collect();
  println!("{} terms", term_names.len());

  let options = course_memberships::GetMembershipsOptions::new().limit(100);
  let memberships = client.collect_all(course_memberships::get_user_memberships(&user_id, &options)?).await?;

  let mut by_term: BTreeMap<String, Vec<String>> = BTreeMap::new();
  for membership in memberships {
    let fields = FieldsOptions::new().fields("id,courseId,name,termId");
    let course = match client.execute(&courses::get_course(&membership.course_id, &fields)?).await {
      Ok(course) => course,
      Err(e) if e.is_forbidden() || e.is_not_found() => {
        eprintln!("Skipping {}: {}", membership.course_id, e);
        continue;
      }
      Err(e) => return Err(e),
    };

    let term = course
      .term_id
      .as_ref()
      .and_then(|id| term_names.get(id).cloned())
      .unwrap_or_else(|| "No term".to_string());
    let label = format!(
      "{} {}",
      course.course_id.unwrap_or(course.id),
      course.name.unwrap_or_default()
    );
    by_term.entry(term).or_default().push(label);
  }

  for (term, courses) in by_term {
    println!("\n{term}");
    for course in courses {
      println!("  {course}");
    }
  }

  Ok(())
}
