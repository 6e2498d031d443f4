use crate::{
    access::{AllowAny, Permission},
    db::filter::DefaultOrdering,
    model::entity::EntityModel,
};
use convert_case::{Case, Casing};
use std::sync::Arc;

///
/// ResourceSpec
///
/// The list surface of one entity: route name, DTO fields, default
/// ordering, deep filter allow-list, search fields, and permission.
///
/// `from_model` derives every default from the schema; builder methods
/// override one part at a time.
///

#[derive(Clone, Debug)]
pub struct ResourceSpec {
    model: &'static EntityModel,
    name: String,
    fields: Vec<&'static str>,
    ordering: DefaultOrdering,
    allowed_deep_params: Vec<String>,
    search_fields: Vec<String>,
    permission: Arc<dyn Permission>,
}

impl ResourceSpec {
    #[must_use]
    pub fn from_model(model: &'static EntityModel) -> Self {
        Self {
            model,
            name: model.entity_name.to_case(Case::Snake),
            fields: model.fields.iter().map(|field| field.name).collect(),
            ordering: DefaultOrdering::from(format!("-{}", model.primary_key)),
            allowed_deep_params: Vec::new(),
            search_fields: Vec::new(),
            permission: Arc::new(AllowAny),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// DTO fields, in output order.
    #[must_use]
    pub fn fields(mut self, fields: &[&'static str]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    #[must_use]
    pub fn ordering(mut self, ordering: impl Into<DefaultOrdering>) -> Self {
        self.ordering = ordering.into();
        self
    }

    #[must_use]
    pub fn allowed_deep_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_deep_params = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn permission(mut self, permission: impl Permission + 'static) -> Self {
        self.permission = Arc::new(permission);
        self
    }

    #[must_use]
    pub const fn model(&self) -> &'static EntityModel {
        self.model
    }

    #[must_use]
    pub fn route_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn dto_fields(&self) -> &[&'static str] {
        &self.fields
    }

    #[must_use]
    pub const fn default_ordering(&self) -> &DefaultOrdering {
        &self.ordering
    }

    #[must_use]
    pub fn allowed_params(&self) -> &[String] {
        &self.allowed_deep_params
    }

    #[must_use]
    pub fn declared_search_fields(&self) -> &[String] {
        &self.search_fields
    }

    #[must_use]
    pub fn permission_check(&self) -> &dyn Permission {
        self.permission.as_ref()
    }
}
