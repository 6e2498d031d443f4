use crate::{
    db::collection::RecordSet,
    model::{
        entity::EntityModel,
        field::{EntityFieldModel, FieldKind},
    },
    traits::{EntityKind, EntityValue},
    value::Value,
};

///
/// MODELS
///

pub(crate) static AUTHOR_MODEL: EntityModel = EntityModel {
    path: "scaffold_core::test_support::Author",
    entity_name: "Author",
    primary_key: "id",
    fields: &AUTHOR_FIELDS,
};

static AUTHOR_FIELDS: [EntityFieldModel; 4] = [
    EntityFieldModel::new("id", FieldKind::Uint),
    EntityFieldModel::new("username", FieldKind::Text),
    EntityFieldModel::new("is_active", FieldKind::Bool),
    EntityFieldModel::new("mentor", FieldKind::Relation(&AUTHOR_MODEL)),
];

pub(crate) static TAG_MODEL: EntityModel = EntityModel {
    path: "scaffold_core::test_support::Tag",
    entity_name: "Tag",
    primary_key: "id",
    fields: &TAG_FIELDS,
};

static TAG_FIELDS: [EntityFieldModel; 2] = [
    EntityFieldModel::new("id", FieldKind::Uint),
    EntityFieldModel::new("code", FieldKind::Text),
];

pub(crate) static BOOK_MODEL: EntityModel = EntityModel {
    path: "scaffold_core::test_support::Book",
    entity_name: "BookCopy",
    primary_key: "id",
    fields: &BOOK_FIELDS,
};

static BOOK_FIELDS: [EntityFieldModel; 7] = [
    EntityFieldModel::new("id", FieldKind::Uint),
    EntityFieldModel::new("title", FieldKind::Text),
    EntityFieldModel::new("status", FieldKind::Text),
    EntityFieldModel::new("price", FieldKind::Int),
    EntityFieldModel::new("published", FieldKind::Bool),
    EntityFieldModel::new("author", FieldKind::Relation(&AUTHOR_MODEL)),
    EntityFieldModel::new("tags", FieldKind::Many(&TAG_MODEL)),
];

///
/// Author
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Author {
    pub id: u64,
    pub username: String,
    pub is_active: bool,
    pub mentor: Option<Box<Self>>,
}

impl EntityKind for Author {
    const MODEL: &'static EntityModel = &AUTHOR_MODEL;
}

impl EntityValue for Author {
    fn get_value_by_index(&self, index: usize) -> Option<Value> {
        match index {
            0 => Some(Value::Uint(self.id)),
            1 => Some(Value::Text(self.username.clone())),
            2 => Some(Value::Bool(self.is_active)),
            3 => Some(
                self.mentor
                    .as_ref()
                    .map_or(Value::Null, |mentor| Value::Record(mentor.to_record_value())),
            ),
            _ => None,
        }
    }
}

///
/// Tag
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Tag {
    pub id: u64,
    pub code: String,
}

impl EntityKind for Tag {
    const MODEL: &'static EntityModel = &TAG_MODEL;
}

impl EntityValue for Tag {
    fn get_value_by_index(&self, index: usize) -> Option<Value> {
        match index {
            0 => Some(Value::Uint(self.id)),
            1 => Some(Value::Text(self.code.clone())),
            _ => None,
        }
    }
}

///
/// Book
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Book {
    pub id: u64,
    pub title: String,
    pub status: String,
    pub price: i64,
    pub published: bool,
    pub author: Option<Author>,
    pub tags: Vec<Tag>,
}

impl EntityKind for Book {
    const MODEL: &'static EntityModel = &BOOK_MODEL;
}

impl EntityValue for Book {
    fn get_value_by_index(&self, index: usize) -> Option<Value> {
        match index {
            0 => Some(Value::Uint(self.id)),
            1 => Some(Value::Text(self.title.clone())),
            2 => Some(Value::Text(self.status.clone())),
            3 => Some(Value::Int(self.price)),
            4 => Some(Value::Bool(self.published)),
            5 => Some(
                self.author
                    .as_ref()
                    .map_or(Value::Null, |author| Value::Record(author.to_record_value())),
            ),
            6 => Some(Value::List(
                self.tags
                    .iter()
                    .map(|tag| Value::Record(tag.to_record_value()))
                    .collect(),
            )),
            _ => None,
        }
    }
}

///
/// SEED
///

pub(crate) fn author(id: u64, username: &str, is_active: bool, mentor: Option<Author>) -> Author {
    Author {
        id,
        username: username.to_string(),
        is_active,
        mentor: mentor.map(Box::new),
    }
}

pub(crate) fn tag(id: u64, code: &str) -> Tag {
    Tag {
        id,
        code: code.to_string(),
    }
}

pub(crate) fn book(
    id: u64,
    title: &str,
    status: &str,
    price: i64,
    author: Option<Author>,
    tags: Vec<Tag>,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        status: status.to_string(),
        price,
        published: status == "published",
        author,
        tags,
    }
}

/// Five books across four authors and three tags.
///
/// | id | title          | status    | price | author | tags     |
/// |----|----------------|-----------|-------|--------|----------|
/// | 1  | Rust in Action | published | 10    | ada    | sys,lang |
/// | 2  | Async Patterns | draft     | 20    | adrian | lang     |
/// | 3  | Admin Guide    | published | 10    | bob    |          |
/// | 4  | Query Cookbook | published | 30    | adam   | db       |
/// | 5  | No Author      | draft     | 20    |        | db,sys   |
pub(crate) fn seeded_books() -> Vec<Book> {
    let ada = author(1, "ada", true, None);
    let adrian = author(2, "adrian", true, Some(ada.clone()));
    let bob = author(3, "bob", false, Some(ada.clone()));
    let adam = author(4, "adam", true, None);

    let sys = tag(1, "sys");
    let lang = tag(2, "lang");
    let db = tag(3, "db");

    vec![
        book(
            1,
            "Rust in Action",
            "published",
            10,
            Some(ada),
            vec![sys.clone(), lang.clone()],
        ),
        book(2, "Async Patterns", "draft", 20, Some(adrian), vec![lang]),
        book(3, "Admin Guide", "published", 10, Some(bob), vec![]),
        book(4, "Query Cookbook", "published", 30, Some(adam), vec![db.clone()]),
        book(5, "No Author", "draft", 20, None, vec![db, sys]),
    ]
}

pub(crate) fn seeded_set() -> RecordSet<Book> {
    RecordSet::new(seeded_books())
}

pub(crate) fn ids(records: &RecordSet<Book>) -> Vec<u64> {
    records.iter().map(|book| book.id).collect()
}
