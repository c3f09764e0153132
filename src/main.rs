use std::io::{self, Write};

use highlightjs_themes::{
    api::{themes_url, HttpSource},
    theme_lister::{list_themes, print_summary},
};
use log::info;

// Command-line arguments are ignored.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut stdout = io::stdout().lock();
    let themes = list_themes(&HttpSource::new(), &themes_url(), &mut stdout).await?;
    info!("Found {} themes.", themes.len());
    print_summary(&themes, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
