//! Tab-change → presence activity transform.

use serde::{Deserialize, Serialize};

/// Icon shown when the tab's favicon is missing or not an image file.
pub const FALLBACK_ICON: &str = "browser";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "ico", "webp"];

/// Payload of an "active tab changed" room event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabChange {
    pub url: String,
    #[serde(default)]
    pub fav_icon_url: Option<String>,
}

/// What gets pushed to the rich-presence client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Visited domain, e.g. `github.com`
    pub state: String,
    /// Favicon URL or [`FALLBACK_ICON`]
    pub large_image: String,
}

pub fn derive_activity(tab: &TabChange) -> Activity {
    Activity {
        state: visited_domain(&tab.url),
        large_image: tab
            .fav_icon_url
            .as_deref()
            .filter(|icon| has_image_extension(icon))
            .unwrap_or(FALLBACK_ICON)
            .to_string(),
    }
}

/// Host part of `url` with the scheme, a leading `www.`, credentials and port removed.
fn visited_domain(url: &str) -> String {
    let rest = url.trim();
    let rest = rest.split_once("://").map_or(rest, |(_, after)| after);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = host.split(':').next().unwrap_or_default();
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

fn has_image_extension(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    last_segment
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
