pub mod api;
pub mod parser;
pub mod schema;
pub mod theme_lister;
