//! Shielding material catalog for the Shieldstack attenuation library.
//!
//! Provides [`MaterialCatalog`], a validated name → properties lookup
//! table, and the built-in reference catalog of five common shielding
//! materials ([`MaterialCatalog::reference`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
mod reference;

pub use catalog::MaterialCatalog;
