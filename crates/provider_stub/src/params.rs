use serde::Deserialize;

/// Query string of any list endpoint; each endpoint reads what it needs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub key: Option<String>,
    pub part: Option<String>,
    pub id: Option<String>,
    pub chart: Option<String>,
    pub region_code: Option<String>,
    pub video_category_id: Option<String>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub related_to_video_id: Option<String>,
    pub channel_id: Option<String>,
    pub event_type: Option<String>,
    pub video_duration: Option<String>,
    pub video_id: Option<String>,
    pub order: Option<String>,
    pub playlist_id: Option<String>,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
}

impl ListParams {
    /// Requested parts, e.g. `snippet,statistics`.
    pub fn parts(&self) -> Vec<&str> {
        self.part
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn wants(&self, part: &str) -> bool {
        self.parts().contains(&part)
    }

    /// Comma separated `id` list.
    pub fn ids(&self) -> Vec<&str> {
        self.id
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    }

    pub fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    pub fn has_key(&self) -> bool {
        self.key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

/// Search terms: alternatives separated by `OR` or `|`, lowercased.
pub fn query_terms(q: &str) -> Vec<String> {
    q.split('|')
        .flat_map(|part| part.split(" OR "))
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// True if the text contains any of the terms, ignoring case. No terms
/// matches everything.
pub fn matches_any(text: &str, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let text = text.to_lowercase();
    terms.iter().any(|term| text.contains(term.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_terms() {
        assert_eq!(query_terms("podcast OR talk show"), ["podcast", "talk show"]);
        assert_eq!(query_terms("shopping|Product Review|unboxing"), ["shopping", "product review", "unboxing"]);
        assert!(query_terms("  ").is_empty());
    }

    #[test]
    fn test_matches_any() {
        let terms = query_terms("podcast OR talk show");
        assert!(matches_any("Studio Talk Show episode 12", &terms));
        assert!(!matches_any("Speedrun highlights", &terms));
        assert!(matches_any("anything", &[]));
    }

    #[test]
    fn test_parts_and_ids() {
        let params = ListParams {
            part: Some("snippet, statistics".to_string()),
            id: Some("a,,b".to_string()),
            ..Default::default()
        };
        assert!(params.wants("statistics"));
        assert!(!params.wants("contentDetails"));
        assert_eq!(params.ids(), ["a", "b"]);
        assert!(!params.has_key());
    }
}
