//! CLI Exit Code Registry
//!
//! Single source of truth for `edtheme` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | 0    | Success                                  |
//! | 1    | General error (IO, serialization)        |
//! | 2    | CLI usage error (bad args)               |
//! | 3    | Theme name not found                     |
//! | 4    | Built-in theme data failed validation    |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, empty theme name.
pub const EXIT_USAGE: u8 = 2;

/// The requested theme is not in the registry (or UI theme list).
pub const EXIT_NOT_FOUND: u8 = 3;

/// `validate` found authoring defects in the built-in tables.
pub const EXIT_INVALID: u8 = 4;
