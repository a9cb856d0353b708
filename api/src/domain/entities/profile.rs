//! Public profile and feed locations for each platform handle

/// Medium RSS feed for a handle
pub fn medium_feed_url(handle: &str) -> String {
    format!("https://medium.com/feed/@{}", handle)
}

pub fn medium_profile_url(handle: &str) -> String {
    format!("https://medium.com/@{}", handle)
}

pub fn github_profile_url(handle: &str) -> String {
    format!("https://github.com/{}", handle)
}

/// Social profile that synthesized posts link to
pub fn social_profile_url(handle: &str) -> String {
    format!("https://x.com/{}", handle)
}
