//! Issue categories.
//!
//! Categories group related issues and form a small tree: a category may
//! have a parent (e.g. `Naming` sits under `Style`). Enable/disable lists
//! and severity overrides may name a category instead of an issue id, in
//! which case the setting applies to every issue under that category,
//! transitively through subcategories.

/// A registered issue category.
#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    name: &'static str,
    parent: Option<&'static str>,
}

/// The built-in category tree.
static CATEGORIES: &[Category] = &[
    Category {
        name: "Correctness",
        parent: None,
    },
    Category {
        name: "Security",
        parent: None,
    },
    Category {
        name: "Performance",
        parent: None,
    },
    Category {
        name: "Style",
        parent: None,
    },
    Category {
        name: "Naming",
        parent: Some("Style"),
    },
    Category {
        name: "Formatting",
        parent: Some("Style"),
    },
    Category {
        name: "Documentation",
        parent: None,
    },
    Category {
        name: "Portability",
        parent: None,
    },
    Category {
        name: "Internationalization",
        parent: None,
    },
    Category {
        name: "BidiText",
        parent: Some("Internationalization"),
    },
];

impl Category {
    /// Look up a category by its simple name (case-sensitive).
    ///
    /// Returns `None` when the name does not match any registered category,
    /// which is how callers distinguish category names from issue ids.
    pub fn get(name: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.name == name)
    }

    /// All registered categories.
    pub fn all() -> &'static [Category] {
        CATEGORIES
    }

    /// The simple name of this category.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The parent category, if this is a subcategory.
    pub fn parent(&self) -> Option<&'static Category> {
        self.parent.and_then(Category::get)
    }

    /// Qualified name including ancestors (e.g. `Style:Naming`).
    pub fn full_name(&self) -> String {
        match self.parent() {
            Some(parent) => format!("{}:{}", parent.full_name(), self.name),
            None => self.name.to_string(),
        }
    }

    /// Whether this category is `ancestor` or sits anywhere beneath it.
    pub fn is_under(&self, ancestor: &Category) -> bool {
        let mut current = Some(self);
        while let Some(category) = current {
            if category.name == ancestor.name {
                return true;
            }
            current = category.parent();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_category() {
        let category = Category::get("Security").unwrap();
        assert_eq!(category.name(), "Security");
        assert!(category.parent().is_none());
    }

    #[test]
    fn test_get_unknown_category() {
        assert!(Category::get("NotACategory").is_none());
        // Lookup is case-sensitive, same as issue ids
        assert!(Category::get("security").is_none());
    }

    #[test]
    fn test_subcategory_parent_link() {
        let naming = Category::get("Naming").unwrap();
        assert_eq!(naming.parent().unwrap().name(), "Style");
    }

    #[test]
    fn test_is_under_self() {
        let style = Category::get("Style").unwrap();
        assert!(style.is_under(style));
    }

    #[test]
    fn test_is_under_parent() {
        let naming = Category::get("Naming").unwrap();
        let style = Category::get("Style").unwrap();
        assert!(naming.is_under(style));
        assert!(!style.is_under(naming));
    }

    #[test]
    fn test_is_under_unrelated() {
        let naming = Category::get("Naming").unwrap();
        let security = Category::get("Security").unwrap();
        assert!(!naming.is_under(security));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Category::get("Security").unwrap().full_name(), "Security");
        assert_eq!(
            Category::get("BidiText").unwrap().full_name(),
            "Internationalization:BidiText"
        );
    }

    #[test]
    fn test_all_parents_resolve() {
        for category in Category::all() {
            if let Some(parent_name) = category.parent {
                assert!(
                    Category::get(parent_name).is_some(),
                    "parent {} of {} is not registered",
                    parent_name,
                    category.name
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut names: Vec<&str> = Category::all().iter().map(|c| c.name).collect();
        let original_len = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), original_len);
    }
}
