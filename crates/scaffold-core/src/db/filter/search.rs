use crate::{
    db::{
        collection::RecordCollection,
        predicate::{CompareOp, ComparePredicate, Predicate, ValidateError, validate_compare},
        query::QueryParams,
    },
    error::InternalError,
    model::{entity::EntityModel, path::resolve_path},
};

const LOOKUP_PREFIXES: [(char, CompareOp); 4] = [
    ('^', CompareOp::StartsWithCi),
    ('=', CompareOp::EqCi),
    ('$', CompareOp::RegexCi),
    ('@', CompareOp::ContainsCi),
];

///
/// SearchField
///
/// One declared search field with the lookup its prefix selects.
///
/// `^` istartswith, `=` iexact, `$` iregex, `@` full-text (icontains),
/// no prefix icontains.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchField {
    field: String,
    op: CompareOp,
}

impl SearchField {
    fn parse(model: &'static EntityModel, declared: &str) -> Result<(Self, bool), ValidateError> {
        let (op, name) = LOOKUP_PREFIXES
            .iter()
            .find_map(|(prefix, op)| declared.strip_prefix(*prefix).map(|name| (*op, name)))
            .unwrap_or((CompareOp::ContainsCi, declared));
        let path = resolve_path(model, name)?;

        let text_only = op != CompareOp::RegexCi;
        if (text_only && !path.leaf().is_text())
            || (!text_only && !path.leaf().is_text() && !path.leaf().is_numeric())
        {
            return Err(ValidateError::invalid_operator(path.path(), op));
        }

        let field = Self {
            field: path.path().to_string(),
            op,
        };

        Ok((field, path.crosses_many()))
    }

    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }
}

///
/// SearchFilter
///
/// Free-text search across a view's declared search fields.
///

#[derive(Clone, Debug)]
pub struct SearchFilter {
    model: &'static EntityModel,
    param: String,
    fields: Vec<SearchField>,
    must_distinct: bool,
}

impl SearchFilter {
    /// Resolve every declared search field; an unknown one is a configuration error.
    pub fn new<I, S>(
        model: &'static EntityModel,
        search_fields: I,
        param: impl Into<String>,
    ) -> Result<Self, ValidateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = Vec::new();
        let mut must_distinct = false;
        for declared in search_fields {
            let (field, crosses_many) = SearchField::parse(model, declared.as_ref())?;
            must_distinct |= crosses_many;
            fields.push(field);
        }

        Ok(Self {
            model,
            param: param.into(),
            fields,
            must_distinct,
        })
    }

    #[must_use]
    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// Whether results must be deduplicated after a search.
    #[must_use]
    pub const fn must_distinct(&self) -> bool {
        self.must_distinct
    }

    /// Terms from the search parameter, split on commas and whitespace.
    #[must_use]
    pub fn terms(&self, params: &QueryParams) -> Vec<String> {
        params
            .get(&self.param)
            .unwrap_or_default()
            .replace(',', " ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Predicate for `terms`: every term must match at least one field.
    ///
    /// Returns `None` when there is nothing to search.
    #[must_use]
    pub fn predicate(&self, terms: &[String]) -> Option<Predicate> {
        if self.fields.is_empty() || terms.is_empty() {
            return None;
        }

        let per_term = terms
            .iter()
            .map(|term| {
                Predicate::Or(
                    self.fields
                        .iter()
                        .map(|field| self.field_predicate(field, term))
                        .collect(),
                )
            })
            .collect();

        Some(Predicate::And(per_term))
    }

    pub fn filter_collection<C: RecordCollection>(
        &self,
        params: &QueryParams,
        records: C,
    ) -> Result<C, InternalError> {
        let Some(predicate) = self.predicate(&self.terms(params)) else {
            return Ok(records);
        };

        let records = records.filter(&predicate).map_err(|err| {
            InternalError::query_invariant(format!("resolved search failed to compile: {err}"))
        })?;

        Ok(if self.must_distinct {
            records.distinct()
        } else {
            records
        })
    }

    // A term that cannot be a valid literal for the field (a broken regex) matches nothing.
    fn field_predicate(&self, field: &SearchField, term: &str) -> Predicate {
        let cmp = ComparePredicate::new(field.field.clone(), field.op, term);

        validate_compare(self.model, cmp).map_or(Predicate::False, Predicate::Compare)
    }
}
