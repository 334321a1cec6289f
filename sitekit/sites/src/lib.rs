// This code was automatically generated by sitekit-gen. Do not edit manually.

//! Typed request builders for the [Sites](https://learn.microsoft.com/graph/api/resources/sharepoint) service.
//!
//! Typed request builders for SharePoint sites and their content.
//!
//! Every URL template of the service has one request builder. Builders are
//! reached from [`SitesServiceClient`] by navigation methods and dispatch
//! through a shared [`sitekit::RequestAdapter`].
//!
//! ## Authentication
//!
//! Uses OAuth bearer tokens in the `Authorization` header, scoped to `https://graph.microsoft.com/.default`.
//! Tokens are read from `SITES_ACCESS_TOKEN` or `GRAPH_ACCESS_TOKEN`.
//!
//! ## Modules
//!
//! - [`sites`] - Sites collection, site items, subsites and the delta, add and remove functions.
//! - [`analytics`] - Item analytics and activity statistics of a site.
//! - [`columns`] - Column definitions of a site.
//! - [`content_types`] - Content types of a site and compatible hub content types.
//! - [`drive`] - The default document library of a site and its root folder content.
//! - [`lists`] - Lists, list items, item fields and item activity.
//! - [`onenote`] - OneNote notebooks, section groups, sections and pages of a site.
//! - [`pages`] - Site pages and their canvas layout, sections and web parts.
//! - [`permissions`] - Sharing permissions of a site.
//! - [`term_store`] - The taxonomy term store: groups, sets, terms and relations.
//! - [`models`] - Entity, complex and enum types
//! - [`odataerrors`] - The OData error envelope and error map
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sitekit::{RequestContext, ReqwestAdapter, BaseBearerTokenAuthenticationProvider, EnvTokenProvider};
//! use sitekit_sites::SitesServiceClient;
//!
//! # async fn run() -> Result<(), sitekit::SdkError> {
//! let auth = BaseBearerTokenAuthenticationProvider::new(EnvTokenProvider::new(["SITES_ACCESS_TOKEN", "GRAPH_ACCESS_TOKEN"]));
//! let adapter = ReqwestAdapter::builder().authentication_provider(auth).build()?;
//! let client = SitesServiceClient::new(Arc::new(adapter));
//!
//! let response = client.sites().get(&RequestContext::new(), None).await?;
//! println!("{:?}", response);
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod client;
pub mod columns;
pub mod content_types;
pub mod drive;
pub mod lists;
pub mod models;
pub mod odataerrors;
pub mod onenote;
pub mod pages;
pub mod permissions;
pub mod sites;
pub mod term_store;

pub use client::SitesServiceClient;
