//! Color scheme generation and saved scheme records
//!
//! This module turns a base color into complementary, analogous,
//! triadic, tetradic, monochromatic or harmonic schemes, and keeps
//! named schemes in an in-memory library.

pub mod kind;
pub mod generator;
pub mod library;

pub use kind::SchemeKind;
pub use generator::{
    generate_analogous, generate_complementary, generate_harmonic, generate_monochromatic,
    generate_scheme, generate_tetradic, generate_triadic, SchemeGenerator,
};
pub use library::{SavedScheme, SchemeFilter, SchemeId, SchemeLibrary, SchemeUpdate};
