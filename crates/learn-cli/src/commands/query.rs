use super::Output;
use anyhow::Result;
use clap::Subcommand;
use learn_client::endpoints::{announcements, system, terms};

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
  /// Show the Learn server version
  Version,

  /// Show the privacy policy URLs
  Privacy,

  /// List terms
  Terms {
    /// Page size
    #[arg(short, long)]
    limit: Option<u32>,
  },

  /// List system announcements, or a course's announcements
  Announcements {
    /// Course id, e.g. `_123_1` or `courseId:CS-101`
    #[arg(short, long)]
    course: Option<String>,
  },
}

impl QueryCommand {
  /// Version and privacy are public; everything else needs a bearer token.
  pub fn needs_token(&self) -> bool {
    !matches!(self, QueryCommand::Version | QueryCommand::Privacy)
  }
}

pub async fn execute(cmd: QueryCommand, out: &Output<'_>) -> Result<()> {
  match cmd {
    QueryCommand::Version => {
      out.run(system::get_version()?).await?;
    }
    QueryCommand::Privacy => {
      out.run(system::get_privacy_policy()?).await?;
    }
    QueryCommand::Terms { limit } => {
      let mut options = terms::GetTermsOptions::new();
      if let Some(limit) = limit {
        options = options.limit(limit);
      }
      out.run(terms::get_terms(&options)?).await?;
    }
    QueryCommand::Announcements { course: Some(course) } => {
      let options = announcements::GetAnnouncementsOptions::new();
      out.run(announcements::get_course_announcements(&course, &options)?).await?;
    }
    QueryCommand::Announcements { course: None } => {
      out.run(announcements::get_announcements(&announcements::GetAnnouncementsOptions::new())?).await?;
    }
  }
  Ok(())
}
