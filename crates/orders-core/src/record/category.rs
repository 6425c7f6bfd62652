use std::fmt;

use serde::Serialize;

use crate::error::RowRejection;

/// The five fixed classification buckets of the order export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Home,
    Accessories,
    Dress,
    Kitchen,
    Groceries,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Home,
        Category::Accessories,
        Category::Dress,
        Category::Kitchen,
        Category::Groceries,
    ];

    /// Look up an already-uppercased single-letter code. Lookup is exact:
    /// `"k"` fails here, callers uppercase first.
    pub fn from_code(code: &str) -> Result<Self, RowRejection> {
        match code {
            "H" => Ok(Category::Home),
            "A" => Ok(Category::Accessories),
            "D" => Ok(Category::Dress),
            "K" => Ok(Category::Kitchen),
            "G" => Ok(Category::Groceries),
            other => Err(RowRejection::unknown_category(other)),
        }
    }

    pub fn code(self) -> char {
        match self {
            Category::Home => 'H',
            Category::Accessories => 'A',
            Category::Dress => 'D',
            Category::Kitchen => 'K',
            Category::Groceries => 'G',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Home => "Home",
            Category::Accessories => "Accessories",
            Category::Dress => "Dress",
            Category::Kitchen => "Kitchen",
            Category::Groceries => "Groceries",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
