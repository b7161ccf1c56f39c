pub mod config;
pub mod server;
pub mod youtube;

use serde::Serialize;

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Extract video ID from various YouTube URL formats
///
/// Supports watch URLs (`youtube.com/watch?v=ID`, with or without a `www.`
/// or `m.` subdomain) and short URLs (`youtu.be/ID`). Matching is a
/// substring search, so surrounding text and trailing query parameters are
/// tolerated. Bare video IDs are not accepted.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // youtube.com/watch?v=ID (any subdomain, any scheme)
    if let Some(caps) = regex::Regex::new(r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // youtu.be/ID
    if let Some(caps) = regex::Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_no_subdomain() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_mobile() {
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_no_scheme() {
        assert_eq!(
            extract_video_id("www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embedded_in_text() {
        assert_eq!(
            extract_video_id("please watch https://youtu.be/dQw4w9WgXcQ now"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_bare_video_id_rejected() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(extract_video_id("not a youtube link"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_id_too_short() {
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
    }
}
