//! Effect runtime.
//!
//! [`Store`] owns the [`AppState`](crate::AppState), applies actions one at
//! a time through the root reducer and executes the returned effects on the
//! tokio runtime. Front ends talk to it through a cloneable [`StoreHandle`].

mod environment;
mod opener;
mod runtime;

pub use environment::Environment;
pub use opener::{RecordingUrlOpener, SystemUrlOpener, UrlOpener};
pub use runtime::{Store, StoreHandle};
