pub mod actor;
pub mod config;
pub mod detail;
pub mod error;
pub mod field;
pub mod paths;
pub mod schema;

pub use actor::{resolve_actor, ActorKind, ActorReference};
pub use error::{FieldcheckError, Result};
