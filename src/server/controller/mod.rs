//! HTTP request handlers.
//!
//! Every resource shares the handlers in `resource`, instantiated once per
//! resource type by the router. Handlers parse the path id, hand validated
//! payloads to the lifecycle service and convert the resulting domain models to
//! DTOs. Failures are returned as `AppError` and converted to responses there.

pub mod resource;

#[cfg(test)]
mod test;
