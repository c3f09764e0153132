/// Compiles a CSS selector once and hands out a `&'static Selector`.
///
/// The argument must be a valid selector literal; an invalid one panics on first use.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use $crate::once_cell::sync::Lazy;
        use $crate::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($e).unwrap());
        &*SELECTOR
    }};
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    #[test]
    fn selector_is_cached() {
        let first = || selector!("select#theme-selector") as *const _;
        assert_eq!(first(), first());
    }

    #[test]
    fn selector_matches() {
        let html = Html::parse_fragment(r#"<p class="x">a</p><p>b</p>"#);
        let texts: Vec<String> = html
            .select(selector!("p.x"))
            .map(|e| e.text().collect())
            .collect();
        assert_eq!(texts, ["a"]);
    }
}
