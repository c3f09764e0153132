use std::io::{self, Write};

use log::{info, warn};
use scraper::Html;
use url::Url;

use crate::{
    api::PageSource,
    parser::{parse_theme_selector, ParseError},
    schema::ThemeList,
};

#[derive(Debug, thiserror::Error)]
pub enum ListThemesError {
    #[error("Error fetching URL: {0:#}")]
    Fetch(anyhow::Error),
    #[error(transparent)]
    SelectorNotFound(#[from] ParseError),
}

pub async fn try_list_themes(
    source: &impl PageSource,
    url: &Url,
) -> Result<ThemeList, ListThemesError> {
    info!("Fetching {url}");
    let body = source.fetch(url).await.map_err(ListThemesError::Fetch)?;
    let html = Html::parse_document(&body);
    Ok(parse_theme_selector(&html)?)
}

/// Lists the themes, or reports why it could not to `out` and returns an empty list.
///
/// Only a failure to write the report is returned as an error.
pub async fn list_themes(
    source: &impl PageSource,
    url: &Url,
    out: &mut impl Write,
) -> io::Result<ThemeList> {
    match try_list_themes(source, url).await {
        Ok(themes) => Ok(themes),
        Err(e) => {
            warn!("Could not list themes: {e:?}");
            writeln!(out, "{e}")?;
            Ok(ThemeList::default())
        }
    }
}

pub fn print_summary(themes: &ThemeList, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "총 {}개의 테마를 찾았습니다.", themes.len())?;
    writeln!(out, "{themes}")
}
