//! Lightwire DI builds an application out of a declarative list of named components.
//!
//! Every component names a type identifier and a list of constructor arguments.
//! Arguments are literals or `@name` references to other components.
//!
//! Building happens in four steps:
//! 1. [ComponentGraph::from_json] reads the description
//! 2. [Substitutor] replaces `%placeholder%` arguments with concrete values
//! 3. [ConstructionPlan::compute] orders everything reachable from a root component
//! 4. [DiBuilder] constructs each component once, using the factory registered for its type
//!
//! ```rust
//! use std::sync::Arc;
//! use lightwire_di::{Arguments, ComponentGraph, DiBuilder, DynError};
//!
//! struct Database { url: String }
//! struct Users { db: Arc<Database> }
//!
//! let graph = ComponentGraph::from_json(r#"{
//!     "users": { "class": "Users", "inject": ["@db"] },
//!     "db": { "class": "Database", "inject": ["sqlite::memory:"] }
//! }"#).unwrap();
//!
//! let container = DiBuilder::new()
//!     .add_factory("Database", |args: &Arguments| {
//!         Ok::<_, DynError>(Database { url: args.get(0)? })
//!     })
//!     .add_factory("Users", |args: &Arguments| {
//!         Ok::<_, DynError>(Users { db: args.get(0)? })
//!     })
//!     .build(&graph, "users")
//!     .unwrap();
//!
//! let users = container.require::<Users>("users").unwrap();
//! assert_eq!(users.db.url, "sqlite::memory:");
//! ```

pub mod builder;
pub mod container;
pub mod dependency_graph;
pub mod errors;
pub mod factories;
pub mod graph;
mod initiator;
pub mod placeholders;
pub mod resolver;
pub mod types;

pub use builder::DiBuilder;
pub use container::DiContainer;
pub use dependency_graph::{ConstructionPlan, MAX_VISITS};
pub use errors::{
    ArgumentError, GraphError, InitError, ParseError, PlaceholderError, RequireError,
};
pub use factories::{DynFactory, InstanceFactory};
pub use graph::{Argument, ComponentGraph, ComponentSpec};
pub use placeholders::Substitutor;
pub use resolver::{Arguments, ResolvedArgument, Resolver};
pub use types::{DynError, Injectable, Instance, Scalar, TypeInfo};
