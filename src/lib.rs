//! Turns typed Kubernetes resource lists into compact, human-oriented tables.
//!
//! A [`TableRegistry`] maps resource kinds to column catalogs and render
//! functions. [`TableRegistry::generate`] runs the render function for the
//! list's kind, filters wide columns according to [`GenerateOptions`] and
//! copies pagination metadata from the list into the resulting [`Table`].

pub use self::registry::*;
pub use self::resource_list::*;
pub use self::table::*;

pub mod kinds;
pub mod utils;

mod registry;
mod resource_list;
mod table;
