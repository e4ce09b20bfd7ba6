//! NASA wire types and normalized records.

use chrono::NaiveDate;
use serde::Deserialize;

/// APOD response: `/planetary/apod`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApodResponse {
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Mars photos response: `/mars-photos/api/v1/rovers/curiosity/photos`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MarsPhotosResponse {
    #[serde(default)]
    pub photos: Vec<ApiMarsPhoto>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMarsPhoto {
    pub id: u64,
    pub img_src: String,
    pub earth_date: NaiveDate,
    #[serde(default)]
    pub camera: ApiCamera,
    #[serde(default)]
    pub rover: ApiRover,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiCamera {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiRover {
    #[serde(default)]
    pub name: String,
}

/// What kind of media an APOD entry points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    /// Anything the API grows in the future.
    Other(String),
}

impl MediaType {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "image" => Self::Image,
            "video" => Self::Video,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Display-ready astronomy picture of the day.
#[derive(Debug, Clone, PartialEq)]
pub struct Apod {
    pub title: String,
    pub explanation: String,
    pub date: NaiveDate,
    pub media: MediaType,
    /// Standard-resolution URL. Video entries link to the player page.
    pub url: Option<String>,
    pub hd_url: Option<String>,
    pub copyright: Option<String>,
}

impl Apod {
    pub(crate) fn from_api(response: ApodResponse) -> Self {
        Self {
            title: response.title,
            explanation: response.explanation,
            date: response.date,
            media: MediaType::from_wire(&response.media_type),
            url: response.url,
            hd_url: response.hdurl,
            copyright: response.copyright.map(|c| c.trim().to_string()),
        }
    }
}

/// Display-ready Mars rover photo.
#[derive(Debug, Clone, PartialEq)]
pub struct MarsPhoto {
    pub id: u64,
    pub img_src: String,
    pub earth_date: NaiveDate,
    pub camera: String,
    pub rover: String,
}

impl MarsPhoto {
    pub(crate) fn from_api(photo: ApiMarsPhoto) -> Self {
        Self {
            id: photo.id,
            img_src: photo.img_src,
            earth_date: photo.earth_date,
            camera: photo.camera.full_name.unwrap_or(photo.camera.name),
            rover: photo.rover.name,
        }
    }
}
