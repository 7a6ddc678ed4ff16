//! Unsplash image search client
//!
//! Consumed by the UI layer for journal and background images; the
//! calendar service never participates in these calls. Authentication is
//! a static client credential sent as a header. Non-2xx responses surface
//! as a search failure the caller can retry.

use crate::config::UNSPLASH_API_BASE;
use crate::error::{AppError, Result};
use serde::Deserialize;

/// A search result photo, flattened for display
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub thumb: String,
    pub full: String,
    pub description: String,
    pub author: String,
    pub author_url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    id: String,
    width: u32,
    height: u32,
    description: Option<String>,
    alt_description: Option<String>,
    urls: RawUrls,
    user: RawUser,
}

#[derive(Debug, Deserialize)]
struct RawUrls {
    regular: String,
    thumb: String,
    full: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    name: String,
    links: RawUserLinks,
}

#[derive(Debug, Deserialize)]
struct RawUserLinks {
    html: String,
}

impl From<RawPhoto> for Photo {
    fn from(raw: RawPhoto) -> Self {
        let description = raw
            .description
            .or(raw.alt_description)
            .unwrap_or_else(|| "No description".to_string());

        Photo {
            id: raw.id,
            url: raw.urls.regular,
            thumb: raw.urls.thumb,
            full: raw.urls.full,
            description,
            author: raw.user.name,
            author_url: raw.user.links.html,
            width: raw.width,
            height: raw.height,
        }
    }
}

/// Client for the Unsplash photo API
#[derive(Clone)]
pub struct UnsplashClient {
    http: reqwest::blocking::Client,
    access_key: String,
    api_base: String,
}

impl UnsplashClient {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self::with_api_base(access_key, UNSPLASH_API_BASE)
    }

    /// Point the client at a different API base (used by tests)
    pub fn with_api_base(access_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            access_key: access_key.into(),
            api_base: api_base.into(),
        }
    }

    /// Search photos by keyword
    pub fn search_photos(&self, query: &str, page: u32, per_page: u32) -> Result<Vec<Photo>> {
        tracing::debug!("Searching photos: {:?} (page {})", query, page);

        let response = self
            .http
            .get(format!("{}/search/photos", self.api_base))
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", query),
                ("page", &page.to_string()),
                ("per_page", &per_page.to_string()),
            ])
            .send()?;

        let response = check_status(response)?;
        let search: SearchResponse = response.json()?;

        Ok(search.results.into_iter().map(Photo::from).collect())
    }

    /// Fetch a batch of random photos
    pub fn random_photos(&self, count: u32) -> Result<Vec<Photo>> {
        tracing::debug!("Fetching {} random photos", count);

        let response = self
            .http
            .get(format!("{}/photos/random", self.api_base))
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[("count", count.to_string())])
            .send()?;

        let response = check_status(response)?;
        let photos: Vec<RawPhoto> = response.json()?;

        Ok(photos.into_iter().map(Photo::from).collect())
    }
}

fn check_status(response: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::ImageSearch(format!(
            "image search failed with status {}",
            status
        )));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_photo_json(description: Option<&str>, alt: Option<&str>) -> serde_json::Value {
        json!({
            "id": "abc123",
            "width": 4000,
            "height": 3000,
            "description": description,
            "alt_description": alt,
            "urls": {
                "regular": "https://images.example/regular.jpg",
                "thumb": "https://images.example/thumb.jpg",
                "full": "https://images.example/full.jpg"
            },
            "user": {
                "name": "Jane Doe",
                "links": { "html": "https://unsplash.example/@jane" }
            }
        })
    }

    #[test]
    fn test_photo_mapping() {
        let raw: RawPhoto =
            serde_json::from_value(raw_photo_json(Some("A mountain"), None)).unwrap();

        let photo = Photo::from(raw);

        assert_eq!(photo.id, "abc123");
        assert_eq!(photo.url, "https://images.example/regular.jpg");
        assert_eq!(photo.thumb, "https://images.example/thumb.jpg");
        assert_eq!(photo.full, "https://images.example/full.jpg");
        assert_eq!(photo.description, "A mountain");
        assert_eq!(photo.author, "Jane Doe");
        assert_eq!(photo.author_url, "https://unsplash.example/@jane");
        assert_eq!(photo.width, 4000);
        assert_eq!(photo.height, 3000);
    }

    #[test]
    fn test_description_falls_back_to_alt_description() {
        let raw: RawPhoto =
            serde_json::from_value(raw_photo_json(None, Some("alt text"))).unwrap();

        assert_eq!(Photo::from(raw).description, "alt text");
    }

    #[test]
    fn test_description_falls_back_to_placeholder() {
        let raw: RawPhoto = serde_json::from_value(raw_photo_json(None, None)).unwrap();

        assert_eq!(Photo::from(raw).description, "No description");
    }

    #[test]
    fn test_search_response_parsing() {
        let body = json!({
            "total": 1,
            "total_pages": 1,
            "results": [raw_photo_json(Some("A mountain"), None)]
        });

        let search: SearchResponse = serde_json::from_value(body).unwrap();

        assert_eq!(search.results.len(), 1);
        assert_eq!(search.results[0].id, "abc123");
    }
}
