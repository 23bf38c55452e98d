use derive_setters::Setters;

/// Paging and filtering for a member list of a partitioned dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(strip_option)]
pub struct MemberListOptions {
    /// Member name pattern, e.g. `ABC*`.
    #[setters(into)]
    pub pattern: Option<String>,
    /// First member name to return.
    #[setters(into)]
    pub start: Option<String>,
    /// Sent as `X-IBM-Max-Items`. z/OSMF treats `0` as unlimited.
    pub max_items: Option<u32>,
}

impl MemberListOptions {
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [("pattern", &self.pattern), ("start", &self.start)]
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
            .collect()
    }
}
