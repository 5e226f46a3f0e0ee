// src/services/testing.rs

//! In-memory page source and results markup builders for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::error::{AppError, Result};

use super::PageSource;

const PAGE_PARAM: &str = "recruitPage";

/// Serves canned bodies keyed by the `recruitPage` query value.
///
/// `None` is the search URL itself (no page index). Unknown pages answer 404.
#[derive(Default)]
pub struct FixtureSource {
    bodies: HashMap<Option<usize>, String>,
    failures: HashMap<Option<usize>, StatusCode>,
    requests: Mutex<Vec<Option<usize>>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, body: impl Into<String>) -> Self {
        self.bodies.insert(None, body.into());
        self
    }

    pub fn with_page(mut self, page: usize, body: impl Into<String>) -> Self {
        self.bodies.insert(Some(page), body.into());
        self
    }

    pub fn with_failure(mut self, page: usize, status: StatusCode) -> Self {
        self.failures.insert(Some(page), status);
        self
    }

    /// Page indices requested so far, in request order.
    pub fn requested_pages(&self) -> Vec<Option<usize>> {
        self.requests.lock().unwrap().clone()
    }

    fn page_of(url: &Url) -> Option<usize> {
        url.query_pairs()
            .find(|(key, _)| key == PAGE_PARAM)
            .and_then(|(_, value)| value.parse().ok())
    }
}

#[async_trait]
impl PageSource for FixtureSource {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let page = Self::page_of(url);
        self.requests.lock().unwrap().push(page);

        if let Some(status) = self.failures.get(&page) {
            return Err(AppError::Status {
                url: url.to_string(),
                status: *status,
            });
        }

        self.bodies
            .get(&page)
            .cloned()
            .ok_or_else(|| AppError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            })
    }
}

/// One listing card in a generated results page.
pub struct CardSpec {
    pub id: String,
    pub condition: Vec<&'static str>,
}

impl CardSpec {
    /// Card with a complete condition block.
    pub fn valid(id: &str) -> Self {
        Self {
            id: id.to_string(),
            condition: vec!["서울 강남구", "경력3년↑", "대학교(4년)↑", "정규직"],
        }
    }

    /// Card whose condition block only carries the location.
    pub fn malformed(id: &str) -> Self {
        Self {
            id: id.to_string(),
            condition: vec!["서울 강남구"],
        }
    }

    fn render(&self) -> String {
        let condition: Vec<String> = self
            .condition
            .iter()
            .map(|part| format!("<span>{part}</span>"))
            .collect();

        format!(
            r#"<div class="item_recruit" value="{id}">
  <div class="area_job">
    <h2 class="job_tit"><a href="/zf_user/jobs/relay/view?rec_idx={id}">Backend
      Engineer {id}</a></h2>
    <div class="job_condition">
      {condition}
    </div>
    <div class="job_sector"><a>서버개발</a>, <a>백엔드</a> 외 3건</div>
  </div>
</div>"#,
            id = self.id,
            condition = condition.join("\n      "),
        )
    }
}

/// A results page with `page_links` pagination links and the given cards.
pub fn results_page(page_links: usize, cards: &[CardSpec]) -> String {
    let links: String = (1..=page_links)
        .map(|n| format!(r##"<a href="#" page="{n}">{n}</a>"##))
        .collect();
    let cards: String = cards.iter().map(CardSpec::render).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<body>
<div class="content">
{cards}
</div>
<div class="pagination">{links}</div>
</body>
</html>"#
    )
}
