//! Typed URL construction.
//!
//! Replaces ad hoc string concatenation with a small builder that trims
//! trailing slashes on the base, percent-encodes user-supplied input, and
//! joins query parameters in insertion order.

/// Incremental URL builder for provider endpoints.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl UrlBuilder {
    /// Start from a base endpoint. A trailing `/` is trimmed.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Append a literal path segment. Use only for fixed, known-safe text.
    pub fn push(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append a percent-encoded path segment for user-supplied input.
    pub fn push_encoded(mut self, segment: &str) -> Self {
        self.segments.push(urlencoding::encode(segment).into_owned());
        self
    }

    /// Append a query parameter. Values are percent-encoded; names are
    /// expected to be fixed identifiers.
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query
            .push((name.to_string(), urlencoding::encode(value).into_owned()));
        self
    }

    /// Render the final URL.
    pub fn build(self) -> String {
        let mut url = self.base;
        for segment in &self.segments {
            url.push('/');
            url.push_str(segment);
        }
        if !self.query.is_empty() {
            let params: Vec<String> = self
                .query
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_on_base() {
        let url = UrlBuilder::new("https://api.nasa.gov/").push("planetary").build();
        assert_eq!(url, "https://api.nasa.gov/planetary");
    }

    #[test]
    fn encodes_user_input_in_path_and_query() {
        let url = UrlBuilder::new("https://api.example.com")
            .push("search")
            .push_encoded("spider man")
            .query("q", "a&b=c")
            .build();
        assert_eq!(url, "https://api.example.com/search/spider%20man?q=a%26b%3Dc");
    }

    #[test]
    fn joins_query_parameters_in_insertion_order() {
        let url = UrlBuilder::new("https://api.example.com")
            .query("api_key", "K")
            .query("limit", "12")
            .query("rating", "g")
            .build();
        assert_eq!(url, "https://api.example.com?api_key=K&limit=12&rating=g");
    }

    #[test]
    fn base_without_segments_or_query_is_unchanged() {
        assert_eq!(
            UrlBuilder::new("https://api.example.com").build(),
            "https://api.example.com"
        );
    }
}
