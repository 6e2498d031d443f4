use crate::db::predicate::Predicate;

///
/// Normalize a predicate into a canonical, deterministic form.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - Nested AND / OR nodes are flattened
/// - Neutral elements are removed (True / False)
/// - Absorbing elements short-circuit the whole node
/// - Double negation is eliminated
/// - Child order is preserved
///
/// Note: this pass does not touch literal values.
///
#[must_use]
pub fn normalize(predicate: &Predicate) -> Predicate {
    match predicate {
        Predicate::True => Predicate::True,
        Predicate::False => Predicate::False,

        Predicate::And(children) => normalize_and(children),
        Predicate::Or(children) => normalize_or(children),
        Predicate::Not(inner) => normalize_not(inner),

        Predicate::Compare(cmp) => Predicate::Compare(cmp.clone()),
    }
}

fn normalize_and(children: &[Predicate]) -> Predicate {
    let mut out = Vec::with_capacity(children.len());

    for child in children {
        match normalize(child) {
            Predicate::True => {}
            Predicate::False => return Predicate::False,
            Predicate::And(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    collapse(out, Predicate::True, Predicate::And)
}

fn normalize_or(children: &[Predicate]) -> Predicate {
    let mut out = Vec::with_capacity(children.len());

    for child in children {
        match normalize(child) {
            Predicate::False => {}
            Predicate::True => return Predicate::True,
            Predicate::Or(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    collapse(out, Predicate::False, Predicate::Or)
}

fn normalize_not(inner: &Predicate) -> Predicate {
    match normalize(inner) {
        Predicate::True => Predicate::False,
        Predicate::False => Predicate::True,
        Predicate::Not(double) => *double,
        other => Predicate::Not(Box::new(other)),
    }
}

// Empty nodes become their identity; single-child nodes unwrap.
fn collapse(
    mut children: Vec<Predicate>,
    identity: Predicate,
    build: fn(Vec<Predicate>) -> Predicate,
) -> Predicate {
    match children.len() {
        0 => identity,
        1 => children.remove(0),
        _ => build(children),
    }
}
