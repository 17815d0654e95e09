//! Following `paging.nextPage` links

use learn_core::RestCall;
use learn_models::Paged;
use tracing::warn;

/// Call for the page after `page`, or `None` on the last page.
///
/// A link the server sends that cannot be parsed ends paging with a warning.
pub fn next_page_call<T>(page: &Paged<T>) -> Option<RestCall<Paged<T>>> {
  let link = page.next_page()?;
  match RestCall::from_link(link) {
    Ok(call) => Some(call),
    Err(e) => {
      warn!("Ignoring unparseable nextPage link {}: {}", link, e);
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use learn_core::HttpMethod;
  use learn_models::{terms::Term, Paging};

  #[test]
  fn test_next_page_call() {
    let page: Paged<Term> = Paged {
      results: vec![],
      paging: Some(Paging { next_page: Some("/learn/api/public/v1/terms?limit=2&offset=2".to_string()) }),
    };

    let call = next_page_call(&page).expect("next page");
    assert_eq!(call.method(), HttpMethod::Get);
    assert_eq!(call.to_string(), "GET /learn/api/public/v1/terms?limit=2&offset=2");
  }

  #[test]
  fn test_last_page() {
    let page: Paged<Term> = Paged { results: vec![], paging: None };
    assert!(next_page_call(&page).is_none());
  }
}
