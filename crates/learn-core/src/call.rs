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

//! Request descriptors.
//!
//! A [`RestCall`] is a pure description of one HTTP request: method, path
//! template with its parameter values, query pairs and body. Building one
//! performs no I/O; an executor turns it into a real request later.

use crate::error::{Error, Result};
use crate::options::QueryOptions;
use crate::HttpMethod;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use url::Url;

/// How the executor authenticates a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
  /// `Authorization: Bearer <access token>`
  #[default]
  Bearer,
  /// HTTP Basic with the application key and secret (token endpoint only)
  ClientCredentials,
}

/// A file sent as the `file` part of a multipart upload.
#[derive(Clone, PartialEq)]
pub struct FileUpload {
  pub file_name: String,
  pub content_type: String,
  pub bytes: Vec<u8>,
}

impl FileUpload {
  pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
    Self { file_name: file_name.into(), content_type: content_type.into(), bytes }
  }
}

impl fmt::Debug for FileUpload {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FileUpload")
      .field("file_name", &self.file_name)
      .field("content_type", &self.content_type)
      .field("len", &self.bytes.len())
      .finish()
  }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
  #[default]
  Empty,
  /// `application/json`
  Json(serde_json::Value),
  /// `application/x-www-form-urlencoded`
  Form(Vec<(String, String)>),
  /// `multipart/form-data`
  Upload(FileUpload),
}

/// A prepared, not yet executed, API request returning `T`.
pub struct RestCall<T> {
  method: HttpMethod,
  template: String,
  path_params: Vec<(String, String)>,
  query: Vec<(String, String)>,
  body: RequestBody,
  auth: AuthScheme,
  _response: PhantomData<fn() -> T>,
}

// Manual impls: the response type never needs to be Clone or Debug itself.
impl<T> Clone for RestCall<T> {
  fn clone(&self) -> Self {
    Self {
      method: self.method,
      template: self.template.clone(),
      path_params: self.path_params.clone(),
      query: self.query.clone(),
      body: self.body.clone(),
      auth: self.auth,
      _response: PhantomData,
    }
  }
}

impl<T> fmt::Debug for RestCall<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RestCall")
      .field("method", &self.method)
      .field("template", &self.template)
      .field("path_params", &self.path_params)
      .field("query", &self.query)
      .field("body", &self.body)
      .field("auth", &self.auth)
      .finish()
  }
}

impl<T> fmt::Display for RestCall<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.method, self.path())?;
    for (i, (key, value)) in self.query.iter().enumerate() {
      let sep = if i == 0 { '?' } else { '&' };
      write!(f, "{sep}{key}={value}")?;
    }
    Ok(())
  }
}

impl<T> RestCall<T> {
  /// Start a GET request.
  pub fn get(template: impl Into<String>) -> RestCallBuilder<T> {
    RestCallBuilder::new(HttpMethod::Get, template)
  }

  /// Start a POST request.
  pub fn post(template: impl Into<String>) -> RestCallBuilder<T> {
    RestCallBuilder::new(HttpMethod::Post, template)
  }

  /// Start a PATCH request.
  pub fn patch(template: impl Into<String>) -> RestCallBuilder<T> {
    RestCallBuilder::new(HttpMethod::Patch, template)
  }

  /// Start a PUT request.
  pub fn put(template: impl Into<String>) -> RestCallBuilder<T> {
    RestCallBuilder::new(HttpMethod::Put, template)
  }

  /// Start a DELETE request.
  pub fn delete(template: impl Into<String>) -> RestCallBuilder<T> {
    RestCallBuilder::new(HttpMethod::Delete, template)
  }

  /// GET call for a server-supplied relative link such as `paging.nextPage`.
  ///
  /// Links arrive percent-encoded. Encoded segments are decoded into path
  /// parameters so [`url`](Self::url) encodes them exactly once.
  pub fn from_link(link: &str) -> Result<Self> {
    let url = Url::parse("http://localhost")?.join(link)?;
    let query = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();

    let mut template = String::new();
    let mut path_params = Vec::new();
    for (i, segment) in url.path().split('/').enumerate().skip(1) {
      template.push('/');
      let decoded = percent_decode_str(segment).decode_utf8_lossy();
      if decoded == segment {
        template.push_str(segment);
      } else {
        let name = format!("segment{i}");
        template.push_str(&format!("{{{name}}}"));
        path_params.push((name, decoded.into_owned()));
      }
    }

    Ok(Self {
      method: HttpMethod::Get,
      template,
      path_params,
      query,
      body: RequestBody::Empty,
      auth: AuthScheme::Bearer,
      _response: PhantomData,
    })
  }

  pub fn method(&self) -> HttpMethod {
    self.method
  }

  /// Path template as declared, with `{placeholders}` intact.
  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn path_params(&self) -> &[(String, String)] {
    &self.path_params
  }

  pub fn query(&self) -> &[(String, String)] {
    &self.query
  }

  pub fn body(&self) -> &RequestBody {
    &self.body
  }

  pub fn auth(&self) -> AuthScheme {
    self.auth
  }

  fn param(&self, name: &str) -> Option<&str> {
    self.path_params.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
  }

  /// Template with every placeholder replaced by its raw (unencoded) value.
  pub fn path(&self) -> String {
    self
      .template
      .split('/')
      .map(|segment| match placeholder(segment).and_then(|name| self.param(name)) {
        Some(value) => value,
        None => segment,
      })
      .collect::<Vec<_>>()
      .join("/")
  }

  /// Absolute URL against `base`; each parameter value becomes exactly one
  /// percent-encoded path segment.
  pub fn url(&self, base: &Url) -> Result<Url> {
    let mut url = base.clone();
    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|_| Error::Config(format!("Base URL cannot carry a path: {base}")))?;
      segments.pop_if_empty();
      for segment in self.template.split('/').filter(|s| !s.is_empty()) {
        match placeholder(segment) {
          Some(name) => {
            let value = self.param(name).ok_or_else(|| Error::MissingPathParam {
              name: name.to_string(),
              template: self.template.clone(),
            })?;
            segments.push(value);
          }
          None => {
            segments.push(segment);
          }
        }
      }
    }
    if !self.query.is_empty() {
      url.query_pairs_mut().extend_pairs(self.query.iter());
    }
    Ok(url)
  }
}

/// `{name}` -> `name`
fn placeholder(segment: &str) -> Option<&str> {
  segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')).filter(|s| !s.is_empty())
}

/// Accumulates the parts of a [`RestCall`].
pub struct RestCallBuilder<T> {
  method: HttpMethod,
  template: String,
  path_params: Vec<(String, String)>,
  query: Vec<(String, String)>,
  body: RequestBody,
  auth: AuthScheme,
  _response: PhantomData<fn() -> T>,
}

impl<T> RestCallBuilder<T> {
  pub fn new(method: HttpMethod, template: impl Into<String>) -> Self {
    Self {
      method,
      template: template.into(),
      path_params: Vec::new(),
      query: Vec::new(),
      body: RequestBody::Empty,
      auth: AuthScheme::Bearer,
      _response: PhantomData,
    }
  }

  /// Value for the `{name}` placeholder.
  pub fn path_param(mut self, name: &str, value: impl Into<String>) -> Self {
    self.path_params.push((name.to_string(), value.into()));
    self
  }

  pub fn query(mut self, key: &str, value: impl ToString) -> Self {
    self.query.push((key.to_string(), value.to_string()));
    self
  }

  pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
    match value {
      Some(value) => self.query(key, value),
      None => self,
    }
  }

  /// Append every pair the options produce.
  pub fn options(mut self, options: &impl QueryOptions) -> Self {
    self.query.extend(options.query_pairs());
    self
  }

  pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
    self.body = RequestBody::Json(serde_json::to_value(body)?);
    Ok(self)
  }

  pub fn form_body(mut self, pairs: Vec<(String, String)>) -> Self {
    self.body = RequestBody::Form(pairs);
    self
  }

  pub fn upload(mut self, file: FileUpload) -> Self {
    self.body = RequestBody::Upload(file);
    self
  }

  pub fn auth(mut self, auth: AuthScheme) -> Self {
    self.auth = auth;
    self
  }

  /// Check every placeholder has a value and every value a placeholder.
  pub fn build(self) -> Result<RestCall<T>> {
    let names: Vec<&str> = self.template.split('/').filter_map(placeholder).collect();

    if let Some(name) = names.iter().copied().find(|n| !self.path_params.iter().any(|(k, _)| k == n)) {
      return Err(Error::MissingPathParam {
        name: name.to_string(),
        template: self.template.clone(),
      });
    }
    if let Some((name, _)) = self.path_params.iter().find(|(k, _)| !names.contains(&k.as_str())) {
      return Err(Error::UnknownPathParam { name: name.clone(), template: self.template.clone() });
    }

    Ok(RestCall {
      method: self.method,
      template: self.template,
      path_params: self.path_params,
      query: self.query,
      body: self.body,
      auth: self.auth,
      _response: PhantomData,
    })
  }
}
