//! Module: view
//! Responsibility: the list-endpoint pipeline for one declared resource.
//! Does not own: routing, authentication, or transport.
//! Boundary: takes an explicit request context and returns an envelope.

use crate::{
    access::RequestContext,
    config::ScaffoldConfig,
    db::{
        collection::RecordSet,
        filter::{DeepFilter, DeepSettings, DegradedClause, OrderingFilter, SearchFilter},
        pagination::PageNumberPagination,
    },
    error::InternalError,
    resource::{ResourceSpec, render_dto},
    response::{AppError, Envelope, envelope_for_error},
    traits::{EntityKind, EntityValue},
};
use serde_json::Value as JsonValue;
use std::{marker::PhantomData, ptr};

const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";

///
/// ListResponse
///
/// The envelope for one list request plus any clauses that degraded.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ListResponse {
    pub envelope: Envelope,
    pub degraded: Vec<DegradedClause>,
}

///
/// ListView
///
/// Permission → deep filter → search → ordering → pagination → DTO.
/// Built once per resource; every filter is resolved at construction.
///

#[derive(Debug)]
pub struct ListView<E> {
    resource: ResourceSpec,
    deep: DeepFilter,
    search: SearchFilter,
    ordering: OrderingFilter,
    pagination: PageNumberPagination,
    api_debug: bool,
    _marker: PhantomData<fn() -> E>,
}

impl<E> ListView<E>
where
    E: EntityKind + EntityValue,
{
    pub fn new(resource: ResourceSpec, config: &ScaffoldConfig) -> Result<Self, InternalError> {
        let model = resource.model();
        if !ptr::eq(model, E::MODEL) {
            return Err(InternalError::resource_invariant(format!(
                "resource '{}' declares entity '{}' but the view serves '{}'",
                resource.route_name(),
                model.entity_name,
                E::MODEL.entity_name,
            )));
        }
        if let Some(field) = resource
            .dto_fields()
            .iter()
            .find(|field| model.field_named(field).is_none())
        {
            return Err(InternalError::resource_invariant(format!(
                "resource '{}' lists unknown DTO field '{field}'",
                resource.route_name(),
            )));
        }

        let deep = DeepFilter::new(
            model,
            resource.allowed_params(),
            DeepSettings::from(config),
        )?;
        let search = SearchFilter::new(
            model,
            resource.declared_search_fields(),
            config.search_param.clone(),
        )?;
        let ordering = OrderingFilter::new(
            model,
            resource.default_ordering().clone(),
            config.ordering_param.clone(),
        );

        Ok(Self {
            resource,
            deep,
            search,
            ordering,
            pagination: PageNumberPagination::from(config),
            api_debug: config.api_debug,
            _marker: PhantomData,
        })
    }

    #[must_use]
    pub const fn resource(&self) -> &ResourceSpec {
        &self.resource
    }

    /// Run one list request against `records`.
    ///
    /// Failures come back as failure envelopes, never as errors.
    #[must_use]
    pub fn list(&self, ctx: &RequestContext, records: RecordSet<E>) -> ListResponse {
        match self.try_list(ctx, records) {
            Ok((data, degraded)) => ListResponse {
                envelope: Envelope::success("", data),
                degraded,
            },
            Err(ListError::App(err)) => ListResponse {
                envelope: err.into_envelope(self.api_debug),
                degraded: Vec::new(),
            },
            Err(ListError::Internal(err)) => {
                tracing::error!(error = %err.display_with_class(), "list pipeline failed");
                ListResponse {
                    envelope: envelope_for_error(&err),
                    degraded: Vec::new(),
                }
            }
        }
    }

    fn try_list(
        &self,
        ctx: &RequestContext,
        records: RecordSet<E>,
    ) -> Result<(JsonValue, Vec<DegradedClause>), ListError> {
        if !self.resource.permission_check().has_permission(ctx) {
            return Err(AppError::forbidden(PERMISSION_DENIED).into());
        }

        let filtered = self.deep.filter_collection(ctx, records)?;
        let records = self.search.filter_collection(&ctx.params, filtered.records)?;
        let records = self.ordering.filter_collection(&ctx.params, records);

        let fields = self.resource.dto_fields();
        let page = self
            .pagination
            .paginate(&ctx.params, records.into_vec())?
            .map(|record| render_dto(&record, fields));
        let data = serde_json::to_value(page)
            .map_err(|err| InternalError::resource_invariant(err.to_string()))?;

        Ok((data, filtered.degraded))
    }
}

///
/// ListError
///

#[derive(Debug)]
enum ListError {
    App(AppError),
    Internal(InternalError),
}

impl From<AppError> for ListError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<InternalError> for ListError {
    fn from(err: InternalError) -> Self {
        Self::Internal(err)
    }
}

///
/// TESTS
///
