use chrono::{DateTime, Datelike, Utc};

/// Shown when an article carries no image of its own.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1495020689067-958852a7765e?w=800&h=400&fit=crop";

/// Relative age of a headline, "Just now" through "3d ago", falling back to
/// a short date once it is older than a week.
pub fn format_time_ago(published_at: DateTime<Utc>) -> String {
    time_ago_from(published_at, Utc::now())
}

fn time_ago_from(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - published_at).num_seconds().max(0);
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = hours / 24;
    if days == 1 {
        return "Yesterday".to_string();
    }
    if days < 7 {
        return format!("{}d ago", days);
    }
    if published_at.year() == now.year() {
        published_at.format("%b %-d").to_string()
    } else {
        published_at.format("%b %-d, %Y").to_string()
    }
}

/// Full date for article detail pages, e.g. "August 28, 2026".
pub fn format_date(published_at: DateTime<Utc>) -> String {
    published_at.format("%B %-d, %Y").to_string()
}

/// Strips the truncation marker the news source appends to article bodies,
/// e.g. "... full text [+2750 chars]".
pub fn clean_content(content: &str) -> &str {
    let trimmed = content.trim_end();
    if let Some(start) = trimmed.rfind("[+") {
        let marker = &trimmed[start..];
        if let Some(count) = marker
            .strip_prefix("[+")
            .and_then(|m| m.strip_suffix(" chars]"))
        {
            if !count.is_empty() && count.chars().all(|c| c.is_ascii_digit()) {
                return trimmed[..start].trim_end();
            }
        }
    }
    content
}
