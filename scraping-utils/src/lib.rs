pub mod macros;

#[doc(hidden)]
pub use once_cell;
#[doc(hidden)]
pub use scraper;
