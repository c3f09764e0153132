use itertools::Itertools;
use scraper::{ElementRef, Html};
use scraping_utils::selector;

use crate::schema::{ThemeList, ThemeName};

pub const THEME_SELECTOR: &str = "select#theme-selector";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Selector not found. The content might be loaded dynamically (Try Selenium).")]
    SelectorNotFound,
}

/// Collects the options of the first `select#theme-selector` in document order.
pub fn parse_theme_selector(html: &Html) -> Result<ThemeList, ParseError> {
    let select = html
        .select(selector!(THEME_SELECTOR))
        .next()
        .ok_or(ParseError::SelectorNotFound)?;
    let themes = select
        .select(selector!("option"))
        .map(parse_option)
        .collect_vec();
    Ok(themes.into())
}

fn parse_option(option: ElementRef) -> ThemeName {
    option.text().collect::<String>().trim().into()
}
