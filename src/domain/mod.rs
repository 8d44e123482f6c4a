// src/domain/mod.rs
// =============================================================================
// Root-domain canonicalization.
//
// Hosts extracted from a result page ("www.shop.example.com") are folded to
// the registrable domain ("example.com") so results for the same site land
// under one key. The folding uses a curated suffix table, see suffixes.rs.
// =============================================================================

mod canonical;
mod suffixes;

pub use canonical::canonicalize;
