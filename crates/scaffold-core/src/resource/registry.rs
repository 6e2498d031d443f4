use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::entity::EntityModel,
    resource::ResourceSpec,
};
use std::{collections::BTreeMap, ptr};

///
/// Registry
///
/// Declared resources keyed by route name.
///

#[derive(Debug, Default)]
pub struct Registry {
    resources: BTreeMap<String, ResourceSpec>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one resource; a second resource under the same route name is refused.
    pub fn register(&mut self, spec: ResourceSpec) -> Result<(), InternalError> {
        let name = spec.route_name().to_string();
        if self.resources.contains_key(&name) {
            return Err(InternalError::new(
                ErrorClass::Conflict,
                ErrorOrigin::Resource,
                format!("resource '{name}' is already registered"),
            ));
        }

        tracing::debug!(resource = %name, entity = spec.model().entity_name, "resource registered");
        self.resources.insert(name, spec);

        Ok(())
    }

    /// Register schema defaults for every model that has no resource yet.
    ///
    /// Explicit declarations made earlier always win. Returns the number of
    /// resources added.
    pub fn auto_declare<I>(&mut self, models: I) -> Result<usize, InternalError>
    where
        I: IntoIterator<Item = &'static EntityModel>,
    {
        let mut added = 0;
        for model in models {
            if self.for_model(model).is_some() {
                continue;
            }
            self.register(ResourceSpec::from_model(model))?;
            added += 1;
        }

        Ok(added)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResourceSpec> {
        self.resources.get(name)
    }

    /// The first resource declared over `model`, by route name.
    #[must_use]
    pub fn for_model(&self, model: &EntityModel) -> Option<&ResourceSpec> {
        self.resources
            .values()
            .find(|spec| ptr::eq(spec.model(), model))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceSpec> {
        self.resources.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
