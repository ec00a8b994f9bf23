//! Perfbook core: the goal tracking engine behind indicator books.
//!
//! Everything under [`indicators`] and [`portfolio`] is pure computation.
//! [`books`] wraps those functions in a service that talks to an opaque
//! repository.

pub mod books;
pub mod errors;
pub mod indicators;
pub mod portfolio;
pub mod settings;

pub use errors::{Error, Result, ValidationError};
pub use settings::TrackingSettings;
