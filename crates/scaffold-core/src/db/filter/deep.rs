//! Module: filter::deep
//! Responsibility: translate flat query parameters into one predicate tree.
//! Does not own: literal coercion rules or predicate evaluation.
//! Boundary: rejected clauses degrade here and never reach the collection.

use crate::{
    COMPLEX_QUERY_PREFIX, DISTINCT_PARAM, LOOKUP_SEP,
    access::{Action, Caller, RequestContext},
    config::ScaffoldConfig,
    db::{
        collection::RecordCollection,
        filter::{ClauseError, DegradedClause, MalformedQueryPolicy, normalize_literal},
        predicate::{
            CompareOp, ComparePredicate, Predicate, ValidateError, normalize, validate_compare,
        },
        query::QueryParams,
    },
    error::InternalError,
    model::{
        entity::EntityModel,
        path::{ResolvedPath, resolve_path},
    },
};
use regex::Regex;
use std::{collections::BTreeMap, sync::LazyLock};

static CLAUSE_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^!*[A-Za-z0-9_]+$").ok());

const OR_SEP: &str = "||";
const AND_SEP: &str = "&&";

///
/// DeepSettings
///
/// Request-independent switches for the deep filter.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeepSettings {
    pub allow_all_deep_params: bool,
    pub policy: MalformedQueryPolicy,
    pub default_distinct: bool,
    pub max_complex_clauses: usize,
}

impl Default for DeepSettings {
    fn default() -> Self {
        Self::from(&ScaffoldConfig::default())
    }
}

impl From<&ScaffoldConfig> for DeepSettings {
    fn from(config: &ScaffoldConfig) -> Self {
        Self {
            allow_all_deep_params: config.allow_all_deep_params,
            policy: config.malformed_query_policy(),
            default_distinct: config.default_distinct,
            max_complex_clauses: config.max_complex_clauses,
        }
    }
}

///
/// AllowedParam
///
/// One allow-list entry resolved against the model at construction.
///

#[derive(Clone, Debug, Eq, PartialEq)]
struct AllowedParam {
    field: String,
    op: CompareOp,
}

///
/// DeepFilter
///
/// Query-string filter for one entity type and one allow-list.
/// Built once per endpoint and shared read-only across requests.
///

#[derive(Clone, Debug)]
pub struct DeepFilter {
    model: &'static EntityModel,
    allowed: BTreeMap<String, AllowedParam>,
    settings: DeepSettings,
}

impl DeepFilter {
    /// Build a filter, resolving every allow-list entry against `model`.
    ///
    /// An entry that does not resolve is a configuration error.
    pub fn new<I, S>(
        model: &'static EntityModel,
        allowed: I,
        settings: DeepSettings,
    ) -> Result<Self, ValidateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = allowed
            .into_iter()
            .map(|key| {
                let key = key.as_ref();
                let (path, op) = split_lookup(model, key)?;
                let param = AllowedParam {
                    field: path.path().to_string(),
                    op,
                };

                Ok((key.to_string(), param))
            })
            .collect::<Result<BTreeMap<_, _>, ValidateError>>()?;

        Ok(Self {
            model,
            allowed,
            settings,
        })
    }

    #[must_use]
    pub const fn model(&self) -> &'static EntityModel {
        self.model
    }

    #[must_use]
    pub const fn settings(&self) -> &DeepSettings {
        &self.settings
    }

    /// Allow-listed parameter names in sorted order.
    pub fn allowed_params(&self) -> impl Iterator<Item = &str> {
        self.allowed.keys().map(String::as_str)
    }

    /// Start parsing clauses on behalf of `caller`.
    #[must_use]
    pub const fn parser<'a>(&'a self, caller: &'a Caller) -> ClauseParser<'a> {
        ClauseParser {
            filter: self,
            caller,
            degraded: Vec::new(),
        }
    }

    /// Translate every filter parameter in `params` into one predicate.
    #[must_use]
    pub fn plan(&self, params: &QueryParams, caller: &Caller) -> DeepFilterPlan {
        let mut parser = self.parser(caller);
        let mut clauses = Vec::new();

        for (key, value) in params.last_values() {
            if key.contains(LOOKUP_SEP) {
                clauses.push(parser.single_condition(key, value));
            }
            if key.starts_with(COMPLEX_QUERY_PREFIX) {
                clauses.push(parser.complex_condition(key, value));
            }
        }

        let distinct = self.settings.default_distinct
            || params.get(DISTINCT_PARAM).is_some_and(|value| !value.is_empty());

        DeepFilterPlan {
            predicate: normalize(&Predicate::And(clauses)),
            distinct,
            degraded: parser.finish(),
        }
    }

    /// Apply the request's filter parameters to `records`.
    ///
    /// Only list requests are filtered; other actions pass through.
    pub fn filter_collection<C: RecordCollection>(
        &self,
        ctx: &RequestContext,
        records: C,
    ) -> Result<DeepFiltered<C>, InternalError> {
        if ctx.action != Action::List {
            return Ok(DeepFiltered {
                records,
                degraded: Vec::new(),
            });
        }

        let plan = self.plan(&ctx.params, &ctx.caller);
        let mut records = records.filter(&plan.predicate).map_err(|err| {
            InternalError::query_invariant(format!(
                "validated deep filter failed to compile: {err}"
            ))
        })?;
        if plan.distinct {
            records = records.distinct();
        }

        Ok(DeepFiltered {
            records,
            degraded: plan.degraded,
        })
    }

    // Field and operator for one clause name, or why it is refused.
    fn authorize(&self, key: &str, caller: &Caller) -> Result<(String, CompareOp), ClauseError> {
        if let Some(param) = self.allowed.get(key) {
            return Ok((param.field.clone(), param.op));
        }
        if !self.settings.allow_all_deep_params && !caller.is_superuser {
            return Err(ClauseError::Unauthorized {
                name: key.to_string(),
            });
        }

        let (path, op) = split_lookup(self.model, key)?;

        Ok((path.path().to_string(), op))
    }
}

///
/// DeepFilterPlan
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeepFilterPlan {
    pub predicate: Predicate,
    pub distinct: bool,
    pub degraded: Vec<DegradedClause>,
}

///
/// DeepFiltered
///
/// Filtered records plus every clause that degraded on the way.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeepFiltered<C> {
    pub records: C,
    pub degraded: Vec<DegradedClause>,
}

///
/// ClauseParser
///
/// Per-request clause translation. Collects degraded clauses as it goes.
///

#[derive(Debug)]
pub struct ClauseParser<'a> {
    filter: &'a DeepFilter,
    caller: &'a Caller,
    degraded: Vec<DegradedClause>,
}

impl ClauseParser<'_> {
    /// Translate one `name=value` clause.
    ///
    /// A rejected clause, negated or not, becomes the policy's degrade predicate.
    pub fn single_condition(&mut self, key: &str, value: &str) -> Predicate {
        match self.try_single(key, value) {
            Ok(predicate) => predicate,
            Err(reason) => self.degrade(key, value, reason),
        }
    }

    /// Translate one compound expression using `||`, `&&`, `!`, and `=`.
    ///
    /// `||` binds looser than `&&`. An expression with more leaf clauses
    /// than the configured cap degrades as a whole.
    pub fn complex_condition(&mut self, param: &str, expr: &str) -> Predicate {
        let count = leaf_count(expr);
        let max = self.filter.settings.max_complex_clauses;
        if count > max {
            return self.degrade(param, expr, ClauseError::TooManyClauses { count, max });
        }

        self.compound(expr)
    }

    /// Clauses degraded so far.
    #[must_use]
    pub fn degraded(&self) -> &[DegradedClause] {
        &self.degraded
    }

    #[must_use]
    pub fn finish(self) -> Vec<DegradedClause> {
        self.degraded
    }

    fn compound(&mut self, expr: &str) -> Predicate {
        if expr.contains(OR_SEP) {
            return Predicate::Or(expr.split(OR_SEP).map(|part| self.compound(part)).collect());
        }
        if expr.contains(AND_SEP) {
            return Predicate::And(expr.split(AND_SEP).map(|part| self.compound(part)).collect());
        }

        match expr.split('=').collect::<Vec<_>>().as_slice() {
            [key, value] => self.single_condition(key, value),
            _ => self.degrade(
                expr,
                "",
                ClauseError::MalformedExpression {
                    expr: expr.to_string(),
                },
            ),
        }
    }

    fn try_single(&self, key: &str, value: &str) -> Result<Predicate, ClauseError> {
        if !CLAUSE_NAME.as_ref().is_some_and(|regex| regex.is_match(key)) {
            return Err(ClauseError::MalformedName {
                name: key.to_string(),
            });
        }
        if let Some(inner) = key.strip_prefix('!') {
            return self
                .try_single(inner, value)
                .map(|predicate| Predicate::Not(Box::new(predicate)));
        }

        let (field, op) = self.filter.authorize(key, self.caller)?;
        let literal = normalize_literal(op, value);
        let cmp = validate_compare(self.filter.model, ComparePredicate::new(field, op, literal))?;

        Ok(Predicate::Compare(cmp))
    }

    fn degrade(&mut self, param: &str, value: &str, reason: ClauseError) -> Predicate {
        tracing::warn!(
            entity = self.filter.model.entity_name,
            param,
            value,
            reason = %reason,
            "deep filter clause degraded"
        );
        self.degraded.push(DegradedClause {
            param: param.to_string(),
            value: value.to_string(),
            reason,
        });

        self.filter.settings.policy.degrade()
    }
}

/// Resolve a clause name into its field path and lookup operator.
///
/// The whole name is tried as a path first, so a field named like a lookup
/// stays reachable. Otherwise a trailing known lookup is split off.
pub fn split_lookup(
    model: &'static EntityModel,
    key: &str,
) -> Result<(ResolvedPath, CompareOp), ValidateError> {
    match resolve_path(model, key) {
        Ok(path) => Ok((path, CompareOp::Eq)),
        Err(err) => {
            let Some((prefix, lookup)) = key.rsplit_once(LOOKUP_SEP) else {
                return Err(err);
            };
            let Some(op) = CompareOp::from_lookup(lookup) else {
                return Err(err);
            };

            Ok((resolve_path(model, prefix)?, op))
        }
    }
}

// Leaf clauses an expression would expand to.
fn leaf_count(expr: &str) -> usize {
    if expr.contains(OR_SEP) {
        return expr.split(OR_SEP).map(leaf_count).sum();
    }
    if expr.contains(AND_SEP) {
        return expr.split(AND_SEP).count();
    }

    1
}
