/// Canonical article fields, in positional column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Authors,
    Issue,
    Doi,
    PaperFile,
    Published,
}

impl Field {
    fn index(self) -> usize {
        self as usize
    }
}

/// Accepted header spellings, already normalized by [`normalize_header`].
const HEADER_ALIASES: &[(&str, Field)] = &[
    ("title", Field::Title),
    ("articletitle", Field::Title),
    ("authors", Field::Authors),
    ("author", Field::Authors),
    ("issue", Field::Issue),
    ("issueno", Field::Issue),
    ("issuelabel", Field::Issue),
    ("doi", Field::Doi),
    ("paperfile", Field::PaperFile),
    ("paper", Field::PaperFile),
    ("pdf", Field::PaperFile),
    ("url", Field::PaperFile),
    ("publisheddate", Field::Published),
    ("published", Field::Published),
    ("date", Field::Published),
];

fn normalize_header(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-' | '"'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Map a header cell such as `Published_Date` or `title` to its canonical field
pub fn canonical_field(name: &str) -> Option<Field> {
    let normalized = normalize_header(name);
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, field)| *field)
}

/// Column index for every canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [usize; 6],
}

impl ColumnMap {
    /// title, authors, issue, doi, paper file, published date
    pub const POSITIONAL: ColumnMap = ColumnMap {
        indices: [0, 1, 2, 3, 4, 5],
    };

    /// Build a map from the header cells.
    ///
    /// Falls back to [`ColumnMap::POSITIONAL`] unless every canonical field
    /// is named in the header. When a field is named twice the first column wins.
    pub fn from_header(cells: &[String]) -> Self {
        let mut found: [Option<usize>; 6] = [None; 6];
        for (column, cell) in cells.iter().enumerate() {
            if let Some(field) = canonical_field(cell)
                && found[field.index()].is_none()
            {
                found[field.index()] = Some(column);
            }
        }

        let mut indices = [0; 6];
        for (slot, column) in indices.iter_mut().zip(found) {
            match column {
                Some(column) => *slot = column,
                None => return Self::POSITIONAL,
            }
        }
        Self { indices }
    }

    pub fn column(&self, field: Field) -> usize {
        self.indices[field.index()]
    }

    /// The cell for `field`, or an empty string when the row is too short
    pub fn get<'a>(&self, row: &'a [String], field: Field) -> &'a str {
        row.get(self.column(field)).map(String::as_str).unwrap_or("")
    }
}
