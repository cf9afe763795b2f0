//! Article-code swapping over an in-memory cell grid.
//!
//! Spreadsheet file I/O belongs to the host; the core operates on the
//! two-dimensional table of strings the host read, finds the article code
//! embedded in it, and replaces it with the code of a newly chosen size.

use crate::sizes::SizeTable;

/// A spreadsheet's cells as rows of strings.
pub type Grid = Vec<Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedArticle {
    /// The article code as it appears in cells.
    pub article: String,
    /// The size label it maps to.
    pub size: String,
}

/// Scan the grid column by column for the first cell containing a known
/// article code as a substring.
pub fn detect_article(grid: &Grid, table: &SizeTable) -> Option<DetectedArticle> {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    for col in 0..width {
        for row in grid {
            let Some(cell) = row.get(col) else { continue };
            for (size, code) in table.iter() {
                let article = code.to_string();
                if cell.contains(&article) {
                    return Some(DetectedArticle {
                        article,
                        size: size.to_string(),
                    });
                }
            }
        }
    }
    None
}

/// Replace every occurrence of `old` with `new` across all cells; returns
/// the number of cells changed.
pub fn swap_article(grid: &mut Grid, old: &str, new: &str) -> usize {
    let mut changed = 0;
    for row in grid {
        for cell in row {
            if cell.contains(old) {
                *cell = cell.replace(old, new);
                changed += 1;
            }
        }
    }
    changed
}

/// Output-name suggestion for a converted file: the size label with spaces
/// removed and dots replaced, appended to the original stem.
pub fn suggested_file_stem(stem: &str, size: &str) -> String {
    let size_part = size.replace(' ', "").replace('.', "_");
    format!("{}_{size_part}", stem.trim())
}
