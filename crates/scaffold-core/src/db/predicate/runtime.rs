use crate::{
    db::predicate::{
        CompareOp, Predicate, ValidateError,
        semantics::{TextOp, compare_eq, compare_order, compare_text},
        validate::{build_regex, resolve_compare},
    },
    model::entity::EntityModel,
    traits::EntityValue,
    value::{TextMode, Value},
};
use regex::Regex;
use std::cmp::Ordering;

///
/// PredicateProgram
///
/// Slot-resolved predicate program for runtime record filtering.
/// Field paths are resolved and literals coerced once during compilation;
/// evaluation is slot-only.
///

#[derive(Clone, Debug)]
pub struct PredicateProgram {
    resolved: ResolvedPredicate,
    crosses_many: bool,
}

///
/// ResolvedComparePredicate
///
/// One comparison node with a pre-resolved slot chain.
///

#[derive(Clone, Debug)]
struct ResolvedComparePredicate {
    slots: Vec<usize>,
    op: CompareOp,
    value: Value,
    regex: Option<Regex>,
}

///
/// ResolvedPredicate
///
/// Predicate AST compiled to slot chains for evaluation hot paths.
///

#[derive(Clone, Debug)]
enum ResolvedPredicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ResolvedComparePredicate),
}

impl PredicateProgram {
    /// Compile a predicate against one entity model.
    pub fn compile(
        model: &'static EntityModel,
        predicate: &Predicate,
    ) -> Result<Self, ValidateError> {
        let mut crosses_many = false;
        let resolved = compile_predicate(model, predicate, &mut crosses_many)?;

        Ok(Self {
            resolved,
            crosses_many,
        })
    }

    /// Evaluate this program against one entity.
    #[must_use]
    pub fn eval<E: EntityValue>(&self, entity: &E) -> bool {
        eval_resolved(entity, &self.resolved)
    }

    /// Whether any comparison fans out through a to-many relation.
    #[must_use]
    pub const fn crosses_many(&self) -> bool {
        self.crosses_many
    }
}

// Compile field-path predicates to slot-chain predicates once per query.
fn compile_predicate(
    model: &'static EntityModel,
    predicate: &Predicate,
    crosses_many: &mut bool,
) -> Result<ResolvedPredicate, ValidateError> {
    let resolved = match predicate {
        Predicate::True => ResolvedPredicate::True,
        Predicate::False => ResolvedPredicate::False,
        Predicate::And(children) => ResolvedPredicate::And(
            children
                .iter()
                .map(|child| compile_predicate(model, child, crosses_many))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Predicate::Or(children) => ResolvedPredicate::Or(
            children
                .iter()
                .map(|child| compile_predicate(model, child, crosses_many))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Predicate::Not(inner) => {
            ResolvedPredicate::Not(Box::new(compile_predicate(model, inner, crosses_many)?))
        }
        Predicate::Compare(cmp) => {
            let (path, cmp) = resolve_compare(model, cmp.clone())?;
            *crosses_many |= path.crosses_many();

            let regex = match (cmp.op, cmp.value.as_text()) {
                (op, Some(pattern)) if op.is_regex() => Some(
                    build_regex(pattern, op == CompareOp::RegexCi).map_err(|err| {
                        ValidateError::invalid_literal(&cmp.field, err.to_string())
                    })?,
                ),
                _ => None,
            };

            ResolvedPredicate::Compare(ResolvedComparePredicate {
                slots: path.slots().to_vec(),
                op: cmp.op,
                value: cmp.value,
                regex,
            })
        }
    };

    Ok(resolved)
}

/// Read every leaf value a slot chain reaches from one entity.
///
/// To-many hops fan out; an empty to-many hop or an unset to-one relation
/// yields one `Null`, mirroring an outer join. A missing top-level slot
/// yields nothing.
pub(in crate::db) fn read_path_values<E: EntityValue>(entity: &E, slots: &[usize]) -> Vec<Value> {
    let Some((first, rest)) = slots.split_first() else {
        return Vec::new();
    };
    let Some(value) = entity.get_value_by_index(*first) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    descend(value, rest, &mut out);

    out
}

fn descend(value: Value, rest: &[usize], out: &mut Vec<Value>) {
    let Some((slot, tail)) = rest.split_first() else {
        out.push(value);
        return;
    };

    match value {
        Value::Record(record) => {
            if let Some(next) = record.get(*slot) {
                descend(next.clone(), tail, out);
            }
        }
        Value::List(items) if items.is_empty() => out.push(Value::Null),
        Value::List(items) => {
            for item in items {
                descend(item, rest, out);
            }
        }
        Value::Null => out.push(Value::Null),
        _ => {}
    }
}

// Evaluate one slot-resolved predicate against one entity.
fn eval_resolved<E: EntityValue>(entity: &E, predicate: &ResolvedPredicate) -> bool {
    match predicate {
        ResolvedPredicate::True => true,
        ResolvedPredicate::False => false,
        ResolvedPredicate::And(children) => {
            children.iter().all(|child| eval_resolved(entity, child))
        }
        ResolvedPredicate::Or(children) => {
            children.iter().any(|child| eval_resolved(entity, child))
        }
        ResolvedPredicate::Not(inner) => !eval_resolved(entity, inner),
        ResolvedPredicate::Compare(cmp) => read_path_values(entity, &cmp.slots)
            .iter()
            .any(|actual| eval_compare_value(actual, cmp)),
    }
}

// Shared compare-op semantics for one reached leaf value.
fn eval_compare_value(actual: &Value, cmp: &ResolvedComparePredicate) -> bool {
    let value = &cmp.value;

    // NOTE: comparison helpers return None when a comparison is invalid; eval treats that as false.
    match cmp.op {
        CompareOp::Eq => compare_eq(actual, value).unwrap_or(false),
        CompareOp::EqCi => compare_text(actual, value, TextOp::Eq, TextMode::Ci).unwrap_or(false),

        CompareOp::Contains => {
            compare_text(actual, value, TextOp::Contains, TextMode::Cs).unwrap_or(false)
        }
        CompareOp::ContainsCi => {
            compare_text(actual, value, TextOp::Contains, TextMode::Ci).unwrap_or(false)
        }
        CompareOp::StartsWith => {
            compare_text(actual, value, TextOp::StartsWith, TextMode::Cs).unwrap_or(false)
        }
        CompareOp::StartsWithCi => {
            compare_text(actual, value, TextOp::StartsWith, TextMode::Ci).unwrap_or(false)
        }
        CompareOp::EndsWith => {
            compare_text(actual, value, TextOp::EndsWith, TextMode::Cs).unwrap_or(false)
        }
        CompareOp::EndsWithCi => {
            compare_text(actual, value, TextOp::EndsWith, TextMode::Ci).unwrap_or(false)
        }

        CompareOp::Regex | CompareOp::RegexCi => match (&cmp.regex, actual.to_text()) {
            (Some(regex), Some(text)) if !actual.is_null() => regex.is_match(&text),
            _ => false,
        },

        CompareOp::In => value
            .as_list()
            .is_some_and(|items| items.iter().any(|item| compare_eq(actual, item) == Some(true))),

        CompareOp::Gt => compare_order(actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => compare_order(actual, value).is_some_and(Ordering::is_ge),
        CompareOp::Lt => compare_order(actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => compare_order(actual, value).is_some_and(Ordering::is_le),

        CompareOp::IsNull => {
            matches!(value, Value::Bool(expected) if actual.is_null() == *expected)
        }
    }
}
