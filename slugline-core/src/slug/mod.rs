pub mod alphabet;
pub mod builder;
pub mod options;

pub use alphabet::{is_separator, transliterate, CYRILLIC, SEPARATORS};
pub use builder::{make, make_with_options};
pub use options::{SlugOptions, DEFAULT_SEPARATOR};
