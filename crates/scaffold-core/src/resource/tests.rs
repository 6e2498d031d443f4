use crate::{
    access::{IsAuthenticated, RequestContext},
    db::query::QueryParams,
    error::ErrorClass,
    resource::{Registry, ResourceSpec, render_dto},
    test_support::{AUTHOR_MODEL, BOOK_MODEL, TAG_MODEL, seeded_books},
};
use serde_json::json;

#[test]
fn from_model_derives_schema_defaults() {
    let spec = ResourceSpec::from_model(&BOOK_MODEL);

    assert_eq!(spec.route_name(), "book_copy");
    assert_eq!(
        spec.dto_fields(),
        &["id", "title", "status", "price", "published", "author", "tags"]
    );
    assert_eq!(spec.default_ordering().terms(), &["-id"]);
    assert!(spec.allowed_params().is_empty());
    assert!(spec.declared_search_fields().is_empty());

    let ctx = RequestContext::list(crate::access::Caller::anonymous(), QueryParams::default());
    assert!(spec.permission_check().has_permission(&ctx));
}

#[test]
fn builder_overrides_each_default() {
    let spec = ResourceSpec::from_model(&BOOK_MODEL)
        .name("books")
        .fields(&["id", "title"])
        .ordering("title")
        .allowed_deep_params(["author__username__startswith"])
        .search_fields(["^title"])
        .permission(IsAuthenticated);

    let ctx = RequestContext::list(crate::access::Caller::anonymous(), QueryParams::default());

    assert_eq!(spec.route_name(), "books");
    assert_eq!(spec.dto_fields(), &["id", "title"]);
    assert_eq!(spec.default_ordering().terms(), &["title"]);
    assert_eq!(spec.allowed_params(), &["author__username__startswith"]);
    assert_eq!(spec.declared_search_fields(), &["^title"]);
    assert!(!spec.permission_check().has_permission(&ctx));
}

#[test]
fn register_rejects_duplicate_route_names() {
    let mut registry = Registry::new();
    registry
        .register(ResourceSpec::from_model(&BOOK_MODEL))
        .expect("first registration");

    let err = registry
        .register(ResourceSpec::from_model(&TAG_MODEL).name("book_copy"))
        .expect_err("duplicate name");

    assert_eq!(err.class, ErrorClass::Conflict);
    assert_eq!(registry.len(), 1);
}

#[test]
fn auto_declare_keeps_explicit_declarations() {
    let mut registry = Registry::new();
    registry
        .register(ResourceSpec::from_model(&BOOK_MODEL).name("books").fields(&["id"]))
        .expect("explicit registration");

    let added = registry
        .auto_declare([&BOOK_MODEL, &AUTHOR_MODEL, &TAG_MODEL])
        .expect("auto declare");

    assert_eq!(added, 2);
    assert!(registry.get("book_copy").is_none());
    assert_eq!(registry.get("books").expect("books").dto_fields(), &["id"]);
    assert_eq!(
        registry.for_model(&AUTHOR_MODEL).expect("author").route_name(),
        "author"
    );

    let names: Vec<&str> = registry.iter().map(ResourceSpec::route_name).collect();
    assert_eq!(names, vec!["author", "books", "tag"]);
}

#[test]
fn dto_renders_relations_as_primary_keys() {
    let books = seeded_books();
    let fields = ResourceSpec::from_model(&BOOK_MODEL).dto_fields().to_vec();

    assert_eq!(
        render_dto(&books[0], &fields),
        json!({
            "id": 1,
            "title": "Rust in Action",
            "status": "published",
            "price": 10,
            "published": true,
            "author": 1,
            "tags": [1, 2],
        })
    );
    assert_eq!(
        render_dto(&books[4], &["author", "tags", "missing"]),
        json!({"author": null, "tags": [3, 1]})
    );
}
