//! Picks the per-book files out of a repository tree listing.

use crate::model::{TreeEntry, TreeListing};

/// Protestant canon order; the index doubles as the sort key.
pub const BOOK_CODES: [&str; 66] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH",
    "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO", "ECC", "SNG", "ISA", "JER", "LAM", "EZK",
    "DAN", "HOS", "JOL", "AMO", "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL",
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH",
    "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD",
    "REV",
];

const BOOK_EXTENSIONS: [&str; 3] = ["tsv", "usfm", "md"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookFile {
    pub code: &'static str,
    pub path: String,
    pub size: u64,
}

impl BookFile {
    pub fn order(&self) -> usize {
        book_order(self.code).unwrap_or(BOOK_CODES.len())
    }
}

pub fn book_order(code: &str) -> Option<usize> {
    BOOK_CODES.iter().position(|c| c.eq_ignore_ascii_case(code))
}

/// Blob entries with a known extension and a book code in the file stem,
/// sorted in canon order.
pub fn book_files(listing: &TreeListing) -> Vec<BookFile> {
    let mut out: Vec<BookFile> = listing.tree.iter().filter_map(book_file).collect();
    out.sort_by(|a, b| a.order().cmp(&b.order()).then_with(|| a.path.cmp(&b.path)));
    out
}

fn book_file(entry: &TreeEntry) -> Option<BookFile> {
    if !entry.is_blob() {
        return None;
    }
    let name = entry.path.rsplit('/').next().unwrap_or(&entry.path);
    let (stem, ext) = name.rsplit_once('.')?;
    if !BOOK_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
        return None;
    }
    let code = book_code(stem)?;
    Some(BookFile {
        code,
        path: entry.path.clone(),
        size: entry.size,
    })
}

/// Finds a book code among the `_`/`-` separated parts of a file stem,
/// preferring the last match (`en_tn_57-TIT` -> `TIT`).
pub fn book_code(stem: &str) -> Option<&'static str> {
    stem.split(['_', '-', ' '])
        .rev()
        .find_map(|part| BOOK_CODES.iter().copied().find(|c| c.eq_ignore_ascii_case(part)))
}

#[cfg(test)]
#[path = "tests/books_tests.rs"]
mod tests;
