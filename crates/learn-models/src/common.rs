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

//! Shared shapes used by many Learn resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of a collection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Paged<T> {
  /// Items on this page
  #[serde(default)]
  pub results: Vec<T>,

  /// Present when more pages follow
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub paging: Option<Paging>,
}

impl<T> Paged<T> {
  /// Relative link to the next page, if the server reported one.
  pub fn next_page(&self) -> Option<&str> {
    self.paging.as_ref().and_then(|p| p.next_page.as_deref())
  }

  pub fn is_last_page(&self) -> bool {
    self.next_page().is_none()
  }
}

/// Paging block of a collection response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
  /// Path plus query of the next page
  pub next_page: Option<String>,
}

/// Availability flag used across resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Available {
  Yes,
  No,
  /// Disabled by the SIS
  Disabled,
  /// Follows the availability of the course's term
  Term,
  /// Group visible only for sign-up
  SignupOnly,
}

impl fmt::Display for Available {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Available::Yes => write!(f, "Yes"),
      Available::No => write!(f, "No"),
      Available::Disabled => write!(f, "Disabled"),
      Available::Term => write!(f, "Term"),
      Available::SignupOnly => write!(f, "SignupOnly"),
    }
  }
}

/// How a term or course availability window is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationType {
  /// Always open
  Continuous,
  /// Open between `start` and `end`
  DateRange,
  /// Open for `days_of_use` days after enrollment
  FixedNumDays,
  /// Inherits the term's window
  Term,
}

impl fmt::Display for DurationType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DurationType::Continuous => write!(f, "Continuous"),
      DurationType::DateRange => write!(f, "DateRange"),
      DurationType::FixedNumDays => write!(f, "FixedNumDays"),
      DurationType::Term => write!(f, "Term"),
    }
  }
}

/// Availability window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<DurationType>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start: Option<DateTime<Utc>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub end: Option<DateTime<Utc>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub days_of_use: Option<u32>,
}

impl Duration {
  pub fn continuous() -> Self {
    Self { kind: Some(DurationType::Continuous), ..Self::default() }
  }

  pub fn date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
    Self { kind: Some(DurationType::DateRange), start: Some(start), end: Some(end), days_of_use: None }
  }

  pub fn fixed_num_days(days: u32) -> Self {
    Self { kind: Some(DurationType::FixedNumDays), days_of_use: Some(days), ..Self::default() }
  }

  pub fn term() -> Self {
    Self { kind: Some(DurationType::Term), ..Self::default() }
  }
}

/// Availability flag plus optional window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub available: Option<Available>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub duration: Option<Duration>,
}

impl Availability {
  pub fn new(available: Available) -> Self {
    Self { available: Some(available), duration: None }
  }

  pub fn with_duration(mut self, duration: Duration) -> Self {
    self.duration = Some(duration);
    self
  }
}

/// Availability with only the flag (roles, users, memberships, groups)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableFlag {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub available: Option<Available>,
}

impl AvailableFlag {
  pub fn new(available: Available) -> Self {
    Self { available: Some(available) }
  }
}
