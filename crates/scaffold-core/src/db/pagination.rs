//! Module: db::pagination
//! Responsibility: page-number pagination over an already ordered record list.
//! Does not own: ordering or DTO rendering.

use crate::{config::ScaffoldConfig, db::query::QueryParams, response::AppError};
use serde::Serialize;

const LAST_PAGE: &str = "last";
const INVALID_PAGE: &str = "Invalid page.";

///
/// Page
///
/// One page of results with the totals the envelope reports.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Page<T> {
    pub count: usize,
    pub pages: usize,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            pages: self.pages,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

///
/// PageSize
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageSize {
    /// Everything on one page.
    All,
    Limit(usize),
}

///
/// PageNumberPagination
///
/// `page` is 1-based and accepts `last`. A `page_size` that is empty,
/// zero, or negative returns everything on one page.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageNumberPagination {
    pub page_size: usize,
    pub page_query_param: String,
    pub page_size_query_param: Option<String>,
    pub max_page_size: Option<usize>,
}

impl Default for PageNumberPagination {
    fn default() -> Self {
        Self::from(&ScaffoldConfig::default())
    }
}

impl From<&ScaffoldConfig> for PageNumberPagination {
    fn from(config: &ScaffoldConfig) -> Self {
        Self {
            page_size: config.page_size,
            page_query_param: "page".to_string(),
            page_size_query_param: config.page_size_query_param.clone(),
            max_page_size: config.max_page_size,
        }
    }
}

impl PageNumberPagination {
    /// Page size requested by `params`, falling back to the configured size.
    #[must_use]
    pub fn page_size(&self, params: &QueryParams) -> PageSize {
        let default = PageSize::Limit(self.page_size);
        let Some(raw) = self
            .page_size_query_param
            .as_deref()
            .and_then(|name| params.get(name))
        else {
            return default;
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return PageSize::All;
        }

        match raw.parse::<i64>() {
            Ok(size) if size <= 0 => PageSize::All,
            Ok(size) => {
                let size = usize::try_from(size).unwrap_or(usize::MAX);
                PageSize::Limit(self.max_page_size.map_or(size, |max| size.min(max)))
            }
            Err(_) => default,
        }
    }

    /// Cut one page out of `records`.
    pub fn paginate<T>(&self, params: &QueryParams, records: Vec<T>) -> Result<Page<T>, AppError> {
        let count = records.len();
        let per_page = match self.page_size(params) {
            PageSize::All => count.max(1),
            PageSize::Limit(size) => size.max(1),
        };
        let pages = count.div_ceil(per_page).max(1);

        let number = match params.get(&self.page_query_param).map(str::trim) {
            None | Some("") => 1,
            Some(LAST_PAGE) => pages,
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| AppError::not_found(INVALID_PAGE))?,
        };
        if number == 0 || number > pages {
            return Err(AppError::not_found(INVALID_PAGE));
        }

        let results = records
            .into_iter()
            .skip((number - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(Page {
            count,
            pages,
            results,
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::from_pairs(pairs.iter().copied())
    }

    fn numbers(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn default_page_is_first_ten() {
        let page = PageNumberPagination::default()
            .paginate(&params(&[]), numbers(23))
            .expect("first page");

        assert_eq!(page.count, 23);
        assert_eq!(page.pages, 3);
        assert_eq!(page.results, numbers(10));
    }

    #[test]
    fn last_keyword_selects_final_page() {
        let page = PageNumberPagination::default()
            .paginate(&params(&[("page", "last")]), numbers(23))
            .expect("last page");

        assert_eq!(page.results, vec![21, 22, 23]);
    }

    #[test]
    fn non_positive_or_empty_page_size_returns_everything() {
        let pagination = PageNumberPagination::default();

        for raw in ["", "0", "-3"] {
            let page = pagination
                .paginate(&params(&[("page_size", raw)]), numbers(23))
                .expect("single page");
            assert_eq!(page.pages, 1, "{raw:?}");
            assert_eq!(page.results.len(), 23, "{raw:?}");
        }
    }

    #[test]
    fn page_size_is_capped_and_garbage_falls_back() {
        let pagination = PageNumberPagination {
            max_page_size: Some(5),
            ..PageNumberPagination::default()
        };

        assert_eq!(pagination.page_size(&params(&[("page_size", "50")])), PageSize::Limit(5));
        assert_eq!(pagination.page_size(&params(&[("page_size", "3")])), PageSize::Limit(3));
        assert_eq!(pagination.page_size(&params(&[("page_size", "lots")])), PageSize::Limit(10));
    }

    #[test]
    fn page_size_param_can_be_disabled() {
        let pagination = PageNumberPagination {
            page_size_query_param: None,
            ..PageNumberPagination::default()
        };

        assert_eq!(pagination.page_size(&params(&[("page_size", "0")])), PageSize::Limit(10));
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let page = PageNumberPagination::default()
            .paginate(&params(&[("page_size", "")]), Vec::<u32>::new())
            .expect("empty page");

        assert_eq!((page.count, page.pages), (0, 1));
        assert!(page.results.is_empty());
    }

    #[test]
    fn out_of_range_or_invalid_page_is_not_found() {
        let pagination = PageNumberPagination::default();

        for raw in ["0", "4", "two", "-1"] {
            let err = pagination
                .paginate(&params(&[("page", raw)]), numbers(23))
                .expect_err("invalid page");
            assert_eq!(err.http_status, 404, "{raw:?}");
            assert_eq!(err.message, "Invalid page.");
        }
    }

    #[test]
    fn page_serializes_with_totals() {
        let page = Page {
            count: 2,
            pages: 1,
            results: vec!["a", "b"],
        }
        .map(str::to_uppercase);

        assert_eq!(
            serde_json::to_value(&page).expect("serializes"),
            serde_json::json!({"count": 2, "pages": 1, "results": ["A", "B"]})
        );
    }
}
