//! `edtheme-registry`: editor theme definitions and the theme registry.
//!
//! Pure data crate: static theme tables, typed definitions in the editor
//! component's theme format, and exact name -> theme resolution.
//! No IO and no fallback policy.

pub mod builtin;
pub mod color;
pub mod error;
pub mod registry;
pub mod theme;
pub mod token;

pub use builtin::{validate_builtin, ThemeId};
pub use color::HexColor;
pub use error::ThemeError;
pub use registry::{ThemeRegistry, ThemeRegistryBuilder, ThemeRegistryEntry};
pub use theme::{Appearance, BaseTheme, ThemeDefinition};
pub use token::{FontStyle, TokenStyle};
