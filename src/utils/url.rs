// src/utils/url.rs

//! Search URL construction.

use url::Url;

use crate::error::Result;
use crate::models::SiteConfig;

/// Build the search query URL for a term (first results page, no page index).
pub fn search_url(site: &SiteConfig, term: &str) -> Result<Url> {
    let mut url = Url::parse(&site.search_url)?;
    url.query_pairs_mut().append_pair(&site.term_param, term);
    Ok(url)
}

/// Build the URL of a specific results page from the search query URL.
pub fn page_url(base: &Url, page_param: &str, page: usize) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair(page_param, &page.to_string());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_search_url_default_site() {
        let url = search_url(&SiteConfig::default(), "backend").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.saramin.co.kr/zf_user/search/recruit?searchword=backend"
        );
    }

    #[test]
    fn test_search_url_encodes_term() {
        let url = search_url(&SiteConfig::default(), "백엔드 개발").unwrap();
        assert_eq!(
            query(&url),
            vec![("searchword".to_string(), "백엔드 개발".to_string())]
        );
        assert!(url.as_str().is_ascii());
    }

    #[test]
    fn test_page_url_appends_index() {
        let base = search_url(&SiteConfig::default(), "backend").unwrap();
        let url = page_url(&base, "recruitPage", 2);
        assert_eq!(
            url.as_str(),
            "https://www.saramin.co.kr/zf_user/search/recruit?searchword=backend&recruitPage=2"
        );
        // base is untouched
        assert_eq!(query(&base).len(), 1);
    }

    #[test]
    fn test_search_url_rejects_relative_endpoint() {
        let site = SiteConfig {
            search_url: "/zf_user/search/recruit".to_string(),
            ..SiteConfig::default()
        };
        assert!(search_url(&site, "backend").is_err());
    }
}
