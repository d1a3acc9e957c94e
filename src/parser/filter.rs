use std::path::Path;

/// Return true if the file has a .csv extension and exists
pub fn is_csv_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
