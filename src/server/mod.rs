//! HTTP backend for the league app, website and admin panel.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations. Read-heavy projections are memoized in a response cache, and
//! push notifications and machine translation sit behind port traits.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, caching and DTO conversion
//! - **Service Layer** (`service/`) - Business rules orchestrating repositories and ports
//! - **Data Layer** (`data/`) - Database operations returning entity models
//! - **Model Layer** (`model/`) - Joined domain shapes and in-memory aggregations
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - API key guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, cache, ports)
//! - **Startup** (`startup`) - Initialization of tracing, database, cache and ports
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Cache** (`cache/`) - In-process or redis response cache
//! - **Integration** (`integration/`) - Push gateway and translation clients
//! - **Scheduler** (`scheduler/`) - Cron jobs (cache purge)
//!
//! # Request Flow
//!
//! 1. **Router** matches the route and applies the key guard of its surface
//! 2. **Controller** extracts parameters and checks the cache
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** assembles DTOs, which the controller caches and returns

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
