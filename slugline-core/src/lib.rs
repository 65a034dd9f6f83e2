//! URL-safe slugs from Latin and Cyrillic text.
//!
//! ```
//! use slugline_core::{make, make_with_options, SlugOptions};
//!
//! assert_eq!(make("Щётка"), "shchyotka");
//!
//! let opts = SlugOptions::new().with_replacement('&', "and");
//! assert_eq!(make_with_options("Tom & Jerry", &opts), "tom-and-jerry");
//! ```

pub mod config;
pub mod init;
pub mod slug;

pub use slug::{make, make_with_options, SlugOptions};
