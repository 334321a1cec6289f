//! Convenient re-exports of every service definition function.
//!
//! ```
//! use sitekit_definitions::prelude::*;
//!
//! let service = define_sites_service();
//! assert_eq!(service.client_name, "SitesServiceClient");
//! ```

pub use crate::sites::define_sites_service;
