//! Cupboard Test Utils
//!
//! Shared helpers for repository and service tests. Provides a builder for
//! in-memory SQLite databases with the league schema, plus fixtures and
//! factories for the entities the server touches.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **fixture**: In-memory entity models, no database insertion
//! - **factory**: Entity builders that insert into the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn lists_cities() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_league_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let city = factory::create_city(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
