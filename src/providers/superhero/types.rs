//! Superhero API wire types and the normalized hero record.

use serde::Deserialize;

/// Search response: `/api/{key}/search/{name}`.
///
/// The upstream answers HTTP 200 with `response: "error"` when nothing
/// matches, so "no results" is not an HTTP failure.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub results: Vec<ApiHero>,
    #[serde(default)]
    pub error: Option<String>,
}

/// By-id response: `/api/{key}/{id}`. Hero fields are flattened next to the
/// `response` marker.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HeroEnvelope {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub hero: ApiHero,
}

/// Hero record as the API sends it. Everything defaults so the same type can
/// sit flattened inside an error envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiHero {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub powerstats: ApiPowerStats,
    #[serde(default)]
    pub biography: ApiBiography,
    #[serde(default)]
    pub image: ApiImage,
}

/// Power stats arrive as strings; missing values are the string `"null"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiPowerStats {
    #[serde(default)]
    pub intelligence: Option<String>,
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub durability: Option<String>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub combat: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiBiography {
    #[serde(default, rename = "full-name")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default, rename = "first-appearance")]
    pub first_appearance: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiImage {
    #[serde(default)]
    pub url: Option<String>,
}

/// Display-ready hero record.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    /// Upstream id, kept as sent (the API uses string ids).
    pub id: String,
    pub name: String,
    pub full_name: Option<String>,
    pub publisher: Option<String>,
    pub first_appearance: Option<String>,
    pub image_url: Option<String>,
    pub stats: HeroStats,
}

/// Normalized power stats. `None` covers both absent fields and the
/// upstream's `"null"` placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroStats {
    pub intelligence: Option<u8>,
    pub strength: Option<u8>,
    pub speed: Option<u8>,
    pub durability: Option<u8>,
    pub power: Option<u8>,
    pub combat: Option<u8>,
}

fn parse_stat(raw: Option<String>) -> Option<u8> {
    raw.as_deref().and_then(|s| s.parse().ok())
}

impl Hero {
    pub(crate) fn from_api(hero: ApiHero) -> Self {
        let empty_to_none = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Self {
            id: hero.id,
            name: hero.name,
            full_name: empty_to_none(hero.biography.full_name),
            publisher: empty_to_none(hero.biography.publisher),
            first_appearance: empty_to_none(hero.biography.first_appearance),
            image_url: empty_to_none(hero.image.url),
            stats: HeroStats {
                intelligence: parse_stat(hero.powerstats.intelligence),
                strength: parse_stat(hero.powerstats.strength),
                speed: parse_stat(hero.powerstats.speed),
                durability: parse_stat(hero.powerstats.durability),
                power: parse_stat(hero.powerstats.power),
                combat: parse_stat(hero.powerstats.combat),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_null_stats_and_blank_biography() {
        let api: ApiHero = serde_json::from_value(json!({
            "id": "70",
            "name": "Batman",
            "powerstats": {
                "intelligence": "100",
                "strength": "26",
                "speed": "null",
                "combat": "100"
            },
            "biography": {
                "full-name": "Bruce Wayne",
                "publisher": "",
                "first-appearance": "Detective Comics #27"
            },
            "image": { "url": "https://example.com/batman.jpg" }
        }))
        .unwrap();

        let hero = Hero::from_api(api);
        assert_eq!(hero.id, "70");
        assert_eq!(hero.full_name.as_deref(), Some("Bruce Wayne"));
        assert_eq!(hero.publisher, None);
        assert_eq!(hero.stats.intelligence, Some(100));
        assert_eq!(hero.stats.speed, None);
        assert_eq!(hero.stats.durability, None);
        assert_eq!(hero.stats.combat, Some(100));
    }

    #[test]
    fn error_envelope_deserializes_without_hero_fields() {
        let envelope: HeroEnvelope = serde_json::from_value(json!({
            "response": "error",
            "error": "invalid id"
        }))
        .unwrap();
        assert_eq!(envelope.response, "error");
        assert_eq!(envelope.error.as_deref(), Some("invalid id"));
        assert!(envelope.hero.name.is_empty());
    }
}
