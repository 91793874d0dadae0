//! Data-driven unit content and file loaders.
//!
//! This crate provides loaders for the files `unit-core` consumes:
//! - Equipment catalogs (data-driven via RON)
//! - Construction configuration (data-driven via TOML)
//! - Unit definitions (building-block `.blk` files)
//!
//! Parsing rules for unit definitions live in `unit-core`; this crate only
//! adds file IO around them.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogFile, CatalogLoader, ConfigLoader, ContentFactory, LoadResult, UnitFileLoader,
};
