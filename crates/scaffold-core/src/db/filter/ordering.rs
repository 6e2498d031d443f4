use crate::{
    db::{collection::RecordCollection, direction::OrderTerm, query::QueryParams},
    model::entity::EntityModel,
};

///
/// DefaultOrdering
///
/// A view's fallback ordering, given as one term or a list of terms.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DefaultOrdering(Vec<String>);

impl DefaultOrdering {
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for DefaultOrdering {
    fn from(term: &str) -> Self {
        Self(vec![term.to_string()])
    }
}

impl From<String> for DefaultOrdering {
    fn from(term: String) -> Self {
        Self(vec![term])
    }
}

impl From<Vec<String>> for DefaultOrdering {
    fn from(terms: Vec<String>) -> Self {
        Self(terms)
    }
}

impl From<&[&str]> for DefaultOrdering {
    fn from(terms: &[&str]) -> Self {
        Self(terms.iter().map(ToString::to_string).collect())
    }
}

///
/// OrderingFilter
///
/// Orders records by the `ordering` parameter, or the view default.
/// Relation paths (`-author__username`) are accepted.
///

#[derive(Clone, Debug)]
pub struct OrderingFilter {
    model: &'static EntityModel,
    param: String,
    default: Vec<OrderTerm>,
}

impl OrderingFilter {
    #[must_use]
    pub fn new(
        model: &'static EntityModel,
        default: impl Into<DefaultOrdering>,
        param: impl Into<String>,
    ) -> Self {
        let default = default.into();
        let default = resolve_terms(model, default.terms().iter().map(String::as_str));

        Self {
            model,
            param: param.into(),
            default,
        }
    }

    #[must_use]
    pub fn default_terms(&self) -> &[OrderTerm] {
        &self.default
    }

    /// Terms for this request; unresolvable requested terms are dropped.
    ///
    /// Falls back to the default when the parameter is absent, empty, or
    /// every requested term was dropped.
    #[must_use]
    pub fn terms(&self, params: &QueryParams) -> Vec<OrderTerm> {
        let requested = params
            .get(&self.param)
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| resolve_terms(self.model, raw.split(',')))
            .unwrap_or_default();

        if requested.is_empty() {
            self.default.clone()
        } else {
            requested
        }
    }

    #[must_use]
    pub fn filter_collection<C: RecordCollection>(&self, params: &QueryParams, records: C) -> C {
        records.order_by(&self.terms(params))
    }
}

fn resolve_terms<'a>(
    model: &'static EntityModel,
    raw: impl Iterator<Item = &'a str>,
) -> Vec<OrderTerm> {
    raw.map(str::trim)
        .filter(|term| !term.is_empty())
        .filter_map(|term| match OrderTerm::resolve(model, term) {
            Ok(term) => Some(term),
            Err(err) => {
                tracing::warn!(
                    entity = model.entity_name,
                    term,
                    error = %err,
                    "ordering term dropped"
                );
                None
            }
        })
        .collect()
}
