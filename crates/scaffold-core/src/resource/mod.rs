//! Module: resource
//! Responsibility: declared list surfaces per entity, and their DTO shape.
//! Does not own: request handling (see `view`).
//! Boundary: resources are registered explicitly at startup.

mod dto;
mod registry;
mod spec;

#[cfg(test)]
mod tests;

pub use dto::render_dto;
pub use registry::Registry;
pub use spec::ResourceSpec;
