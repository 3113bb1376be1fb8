//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the gym API: HTTP endpoints,
//! lifecycle rules, request validation and data access. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Soft-delete lifecycle rules and per-resource descriptions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Validation** (`validation/`) - Field rule tables checked before deserialization
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Logging, database connection and application assembly
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Validation** checks the JSON body against the DTO's rule table
//! 3. **Controller** parses the path id and calls the service
//! 4. **Service** applies the lifecycle rules and calls the repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
