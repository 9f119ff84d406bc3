//! Filter and sort selection for the games collection.

/// The user's chosen subset-defining criteria for the collection query.
///
/// `None` means "no filter applied" for that dimension; an unset dimension
/// never appears in a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category_id: Option<i64>,
    pub publisher_id: Option<i64>,
}

impl FilterSelection {
    /// True when neither dimension is filtered.
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none() && self.publisher_id.is_none()
    }

    /// Reset both dimensions to unset.
    pub fn clear(&mut self) {
        self.category_id = None;
        self.publisher_id = None;
    }
}

/// Server-side sort field for the collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    StarRating,
    Id,
}

impl SortField {
    /// Wire name used in the `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::StarRating => "star_rating",
            SortField::Id => "id",
        }
    }

    /// Parse a wire name, `None` for anything the server would reject.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(SortField::Title),
            "star_rating" => Some(SortField::StarRating),
            "id" => Some(SortField::Id),
            _ => None,
        }
    }

    /// Cycle to the next field (for the sort keybinding).
    pub fn next(&self) -> Self {
        match self {
            SortField::Title => SortField::StarRating,
            SortField::StarRating => SortField::Id,
            SortField::Id => SortField::Title,
        }
    }

    /// Short label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::StarRating => "rating",
            SortField::Id => "id",
        }
    }
}

/// Sort direction for the collection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Combined sort selection, defaulting to the server's title/ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSelection {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSelection {
    /// True when this matches the server default and can be omitted from
    /// query strings.
    pub fn is_default(&self) -> bool {
        *self == SortSelection::default()
    }
}
