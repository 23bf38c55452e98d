use url::Url;

use crate::error::{Error, Result};

/// Base URL of the restfiles service plus the rules for appending resource
/// paths to it.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Appends each segment, percent-encoding as needed. Segments may contain
    /// `/`, which splits them further; `.` and `..` are refused so a path can
    /// never climb out of the service root.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let parts: Vec<&str> = segments
            .iter()
            .flat_map(|segment| segment.split('/'))
            .filter(|part| !part.is_empty())
            .collect();

        if parts.iter().any(|part| *part == ".." || *part == ".") {
            return Err(Error::InvalidPath(segments.join("/")));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidPath(self.base.to_string()))?
            .pop_if_empty()
            .extend(parts);
        Ok(url)
    }

    pub fn url_with_query(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.url(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture() -> Endpoint {
        Endpoint::new(Url::parse("https://mock-url.com:443/zosmf/restfiles/").unwrap())
    }

    #[test]
    fn test_dataset_member_url() {
        let actual = fixture().url(&["ds", "DSN(MBRNEW)"]).unwrap();
        assert_eq!(actual.as_str(), "https://mock-url.com/zosmf/restfiles/ds/DSN(MBRNEW)");
    }

    #[test]
    fn test_uss_path_keeps_directories() {
        let actual = fixture().url(&["fs", "/u/ibmuser/my file.txt"]).unwrap();
        assert_eq!(
            actual.as_str(),
            "https://mock-url.com/zosmf/restfiles/fs/u/ibmuser/my%20file.txt"
        );
    }

    #[test]
    fn test_parent_segments_are_rejected() {
        let actual = fixture().url(&["fs", "/u/../etc/passwd"]);
        assert!(matches!(actual, Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_query_pairs_are_encoded() {
        let actual = fixture()
            .url_with_query(&["fs"], &[("path", "/u/ibmuser")])
            .unwrap();
        assert_eq!(
            actual.as_str(),
            "https://mock-url.com/zosmf/restfiles/fs?path=%2Fu%2Fibmuser"
        );
    }
}
