use crate::{
    db::predicate::ValidateError,
    model::{
        entity::resolve_field_slot,
        field::FieldKind,
        path::resolve_path,
    },
    test_support::{BOOK_MODEL, TAG_MODEL},
};

#[test]
fn resolves_scalar_field_to_single_slot() {
    let path = resolve_path(&BOOK_MODEL, "price").expect("price should resolve");

    assert_eq!(path.slots(), &[3]);
    assert_eq!(path.leaf(), &FieldKind::Int);
    assert!(!path.crosses_many());
}

#[test]
fn resolves_relation_hops_with_either_separator() {
    let dunder = resolve_path(&BOOK_MODEL, "author__username").expect("dunder path");
    let dotted = resolve_path(&BOOK_MODEL, "author.username").expect("dotted path");

    assert_eq!(dunder, dotted);
    assert_eq!(dunder.slots(), &[5, 1]);
    assert_eq!(dunder.path(), "author__username");
}

#[test]
fn terminal_relation_extends_to_related_primary_key() {
    let path = resolve_path(&BOOK_MODEL, "author").expect("relation path");

    assert_eq!(path.slots(), &[5, 0]);
    assert_eq!(path.leaf(), &FieldKind::Uint);
}

#[test]
fn self_referencing_relation_resolves_through_cycle() {
    let path = resolve_path(&BOOK_MODEL, "author__mentor__mentor__username")
        .expect("cyclic relation path");

    assert_eq!(path.slots(), &[5, 3, 3, 1]);
}

#[test]
fn to_many_hop_is_flagged() {
    let path = resolve_path(&BOOK_MODEL, "tags__code").expect("tag path");

    assert!(path.crosses_many());
    assert_eq!(path.leaf(), &FieldKind::Text);
}

#[test]
fn pk_alias_expands_to_primary_key_name() {
    let path = resolve_path(&BOOK_MODEL, "author__pk").expect("pk alias");

    assert_eq!(path.path(), "author__id");
    assert_eq!(resolve_field_slot(&TAG_MODEL, "pk"), Some(0));
}

#[test]
fn unknown_and_non_relation_hops_are_rejected() {
    assert_eq!(
        resolve_path(&BOOK_MODEL, "author__nickname"),
        Err(ValidateError::UnknownField {
            entity: "Author".to_string(),
            field: "nickname".to_string(),
        })
    );
    assert_eq!(
        resolve_path(&BOOK_MODEL, "price__amount"),
        Err(ValidateError::NotARelation {
            entity: "BookCopy".to_string(),
            field: "price".to_string(),
        })
    );
    assert_eq!(
        resolve_path(&BOOK_MODEL, "author____username"),
        Err(ValidateError::InvalidPath {
            path: "author____username".to_string(),
        })
    );
}

#[test]
fn field_kind_debug_prints_related_entity_name_only() {
    let kind = BOOK_MODEL.field_named("author").expect("author field").kind;

    assert_eq!(format!("{kind:?}"), "Relation(Author)");
}
