use std::fmt;

use derive_more::{AsRef, Deref, Display, From, IntoIterator};

/// Display label of one highlighting theme, as it appears in the selector.
#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display)]
#[as_ref(forward)]
pub struct ThemeName(String);

impl ThemeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThemeName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Theme names in document order.
#[derive(Clone, Default, PartialEq, Eq, Debug, From, Deref, IntoIterator)]
pub struct ThemeList(#[into_iterator(owned, ref)] Vec<ThemeName>);

impl ThemeList {
    pub fn into_inner(self) -> Vec<ThemeName> {
        self.0
    }
}

impl FromIterator<ThemeName> for ThemeList {
    fn from_iter<I: IntoIterator<Item = ThemeName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Prints like `["a11y-dark", "agate"]`.
impl fmt::Display for ThemeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(ThemeName::as_str))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeList, ThemeName};

    #[test]
    fn display_theme_list() {
        let list = ["a11y-dark", "Atom One Dark", "say \"hi\""]
            .into_iter()
            .map(ThemeName::from)
            .collect::<ThemeList>();
        assert_eq!(
            list.to_string(),
            r#"["a11y-dark", "Atom One Dark", "say \"hi\""]"#
        );
        assert_eq!(ThemeList::default().to_string(), "[]");
    }

    #[test]
    fn theme_list_derefs_to_slice() {
        let list = ThemeList::from(vec![ThemeName::from("b"), ThemeName::from("a")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].as_str(), "b");
        let names = (&list).into_iter().map(|x| x.to_string()).collect::<Vec<_>>();
        assert_eq!(names, ["b", "a"]);
    }
}
