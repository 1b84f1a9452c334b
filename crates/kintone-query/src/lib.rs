//! Typed, validated query strings for kintone apps.
//!
//! This crate re-exports the query core and is the path generated
//! `QueryFields` modules import from. Start with [`prelude`].
//!
//! ## Crate layout
//! - `expr`: filter expression tree, smart constructors and serializer.
//! - `field`: typed field wrappers and their operator traits.
//! - `functions`: platform date and user function markers.
//! - `validate`: depth and length guards.
//! - `builder`: `QueryState` and the fluent `QueryBuilder`.
//! - `error`: error taxonomy shared by the layers above.

pub use kintone_query_core as core;

pub use kintone_query_core::*;
