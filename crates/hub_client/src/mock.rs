use chrono::{Duration, Utc};
use hub_core::{Article, Source};

fn article(
    title: &str,
    description: &str,
    url: &str,
    image: &str,
    hours_ago: i64,
    source: &str,
) -> Article {
    Article {
        title: title.to_string(),
        description: Some(description.to_string()),
        url: url.to_string(),
        url_to_image: Some(image.to_string()),
        published_at: Utc::now() - Duration::hours(hours_ago),
        source: Source {
            name: source.to_string(),
        },
        content: Some("Full article content would go here...".to_string()),
    }
}

/// Placeholder headlines shown when the proxy cannot be reached.
pub fn articles() -> Vec<Article> {
    vec![
        article(
            "Major Tech Company Announces AI Breakthrough",
            "Revolutionary developments in artificial intelligence promise to reshape multiple industries...",
            "https://example.com/article1",
            "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&h=400&fit=crop",
            0,
            "Tech News",
        ),
        article(
            "Global Markets React to Economic Policy Changes",
            "Major financial centers respond to new regulations affecting international trade...",
            "https://example.com/article2",
            "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&h=400&fit=crop",
            4,
            "Business Daily",
        ),
        article(
            "New Study Reveals Climate Impact on Ocean Currents",
            "Research indicates significant changes in global weather patterns...",
            "https://example.com/article3",
            "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800&h=400&fit=crop",
            6,
            "Science Today",
        ),
        article(
            "Healthcare Innovation Transforms Patient Care",
            "New medical technology offers unprecedented treatment options...",
            "https://example.com/article4",
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&h=400&fit=crop",
            8,
            "Health Watch",
        ),
        article(
            "Sports Championship Finals Set Record Viewership",
            "Historic game draws millions of viewers worldwide...",
            "https://example.com/article5",
            "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=800&h=400&fit=crop",
            12,
            "Sports Network",
        ),
    ]
}
