//! cfnkit Core
//!
//! Building blocks shared by the generated CloudFormation resource types:
//! the literal-or-intrinsic value model, schema metadata, the resource
//! envelope and a template document to put resources in.

pub mod conformance;
pub mod error;
pub mod intrinsic;
pub mod resource;
pub mod schema;
pub mod tag;
pub mod template;
pub mod value;

pub use error::{AttributeError, ConformanceError, IntrinsicError, TemplateError};
pub use intrinsic::{Intrinsic, PseudoParameter};
pub use resource::{DeletionPolicy, Resource, ResourceAttributes};
pub use schema::{PropertyType, ResourceProperties, ResourceSpec};
pub use tag::Tag;
pub use template::Template;
pub use value::{Expr, Json, Value};
