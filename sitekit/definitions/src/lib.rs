//! Service definitions for sitekit
//!
//! This crate holds the service descriptions that `sitekit-gen` turns into
//! request-builder crates. Each service lives in its own module.
//!
//! ## Available services
//!
//! - [`sites`] - SharePoint sites, lists, drives, pages and the term store
//!
//! ## Examples
//!
//! ```
//! use sitekit_definitions::define_sites_service;
//!
//! let service = define_sites_service();
//! assert_eq!(service.name, "Sites");
//! assert_eq!(service.root_navigations.len(), 1);
//! ```

pub mod prelude;
pub mod sites;

pub use sites::define_sites_service;
