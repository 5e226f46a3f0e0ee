// src/services/selectors.rs

//! Compiled CSS selectors for the search results markup.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{ListingCard, SelectorConfig};

/// Selectors parsed once per run from [`SelectorConfig`].
#[derive(Debug, Clone)]
pub struct Selectors {
    pagination: Selector,
    page_link: Selector,
    card: Selector,
    title: Selector,
    condition: Selector,
    sector: Selector,
    id_attr: String,
}

impl Selectors {
    /// Parse every configured selector, failing on the first invalid one.
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            pagination: parse_selector(&config.pagination)?,
            page_link: parse_selector(&config.page_link)?,
            card: parse_selector(&config.card)?,
            title: parse_selector(&config.title)?,
            condition: parse_selector(&config.condition)?,
            sector: parse_selector(&config.sector)?,
            id_attr: config.id_attr.clone(),
        })
    }

    /// Number of page links inside the pagination control.
    ///
    /// When the control appears more than once the last one counts. A missing
    /// control means there is nothing to fetch.
    pub fn count_page_links(&self, document: &Html) -> usize {
        document
            .select(&self.pagination)
            .last()
            .map_or(0, |pagination| pagination.select(&self.page_link).count())
    }

    /// All listing cards of a results document, in document order.
    pub fn cards<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        document.select(&self.card)
    }

    /// Copy the raw text of one card out of the document.
    pub fn read_card(&self, card: &ElementRef) -> ListingCard {
        ListingCard {
            id: card.value().attr(&self.id_attr).unwrap_or_default().to_string(),
            title: inner_text(card, &self.title),
            condition: inner_text(card, &self.condition),
            sector: inner_text(card, &self.sector),
        }
    }
}

/// Concatenated text of every element under `root` matching `selector`.
fn inner_text(root: &ElementRef, selector: &Selector) -> String {
    root.select(selector).flat_map(|el| el.text()).collect()
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> Selectors {
        Selectors::compile(&SelectorConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.class").is_ok());
        assert!(parse_selector(".job_tit>a").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_count_page_links() {
        let html = Html::parse_document(
            r#"<div class="pagination"><a>1</a><a>2</a><a>3</a><span>…</span></div>"#,
        );
        assert_eq!(selectors().count_page_links(&html), 3);
    }

    #[test]
    fn test_count_page_links_last_control_wins() {
        let html = Html::parse_document(
            r#"<div class="pagination"><a>1</a></div>
               <div class="pagination"><a>1</a><a>2</a></div>"#,
        );
        assert_eq!(selectors().count_page_links(&html), 2);
    }

    #[test]
    fn test_count_page_links_missing_or_empty() {
        let s = selectors();
        assert_eq!(s.count_page_links(&Html::parse_document("<div></div>")), 0);
        assert_eq!(
            s.count_page_links(&Html::parse_document(r#"<div class="pagination"></div>"#)),
            0
        );
    }

    #[test]
    fn test_read_card() {
        let html = Html::parse_document(
            r#"<div class="item_recruit" value="48213377">
                 <h2 class="job_tit"><a href="/x"><span>백엔드</span> 개발자</a></h2>
                 <div class="job_condition">
                   <span><a>서울</a> <a>강남구</a></span>
                   <span>경력3년↑</span>
                   <span>대학교(4년)↑</span>
                 </div>
                 <div class="job_sector"><a>서버개발</a>, <a>Go</a> 외</div>
               </div>"#,
        );
        let s = selectors();
        let card = s.cards(&html).next().unwrap();
        let raw = s.read_card(&card);

        assert_eq!(raw.id, "48213377");
        assert_eq!(raw.title, "백엔드 개발자");
        assert!(raw.condition.contains("강남구"));
        assert_eq!(raw.sector, "서버개발, Go 외");
    }

    #[test]
    fn test_read_card_without_id() {
        let html = Html::parse_document(r#"<div class="item_recruit"></div>"#);
        let s = selectors();
        let card = s.cards(&html).next().unwrap();
        assert_eq!(s.read_card(&card), ListingCard::default());
    }
}
