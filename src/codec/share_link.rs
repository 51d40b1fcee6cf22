//! Shareable links and startup restore.
//!
//! A shareable link is the page URL with every query parameter and fragment
//! stripped and the token string set as the single `v` parameter. An empty
//! session links to the bare page URL.

use crate::codec::{decode, encode, encode_session};
use crate::model::{EntryDraft, Source};
use crate::state::SessionStore;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Query parameter that carries the encoded session.
pub const SESSION_PARAM: &str = "v";

/// The page URL cannot host a shareable link.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareLinkError {
    /// Not an absolute URL.
    #[error("Invalid page URL '{url}': {reason}")]
    InvalidPageUrl {
        /// The URL as supplied.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// URL has no path to hang a query off (e.g. `mailto:`).
    #[error("Page URL cannot carry a query string: {0}")]
    CannotBeABase(String),
}

fn parse_page_url(page_url: &str) -> Result<Url, ShareLinkError> {
    let url = Url::parse(page_url).map_err(|e| ShareLinkError::InvalidPageUrl {
        url: page_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ShareLinkError::CannotBeABase(page_url.to_string()));
    }
    Ok(url)
}

/// Build `<origin><pathname>?v=<percent-encoded tokens>` from the page URL.
pub fn shareable_url<'a>(
    page_url: &str,
    sources: impl IntoIterator<Item = &'a Source>,
) -> Result<String, ShareLinkError> {
    link_with_tokens(page_url, &encode(sources))
}

/// Shareable link for a session, in display order.
pub fn shareable_url_for(page_url: &str, store: &SessionStore) -> Result<String, ShareLinkError> {
    link_with_tokens(page_url, &encode_session(store))
}

fn link_with_tokens(page_url: &str, tokens: &str) -> Result<String, ShareLinkError> {
    let mut url = parse_page_url(page_url)?;
    url.set_fragment(None);
    url.set_query(None);

    if !tokens.is_empty() {
        url.query_pairs_mut().append_pair(SESSION_PARAM, tokens);
    }
    Ok(url.to_string())
}

/// Read and decode the `v` parameter of a page URL.
///
/// Absent parameter or an unparseable page URL yields an empty list.
pub fn drafts_from_url(page_url: &str) -> Vec<EntryDraft> {
    let url = match Url::parse(page_url) {
        Ok(url) => url,
        Err(e) => {
            warn!(page_url, error = %e, "Ignoring unparseable page URL");
            return Vec::new();
        }
    };

    url.query_pairs()
        .find(|(key, _)| key == SESSION_PARAM)
        .map(|(_, value)| decode(&value))
        .unwrap_or_default()
}

/// Startup contract: restore a shared session into `store`.
///
/// Calls `load_batch` only when the link decodes to at least one entry.
/// Returns the number of restored entries.
pub fn restore_session(store: &mut SessionStore, page_url: &str) -> usize {
    let drafts = drafts_from_url(page_url);
    let count = drafts.len();
    if count > 0 {
        store.load_batch(drafts);
    }
    debug!(count, "Restored session from page URL");
    count
}
