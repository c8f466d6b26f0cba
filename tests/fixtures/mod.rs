use std::path::PathBuf;

pub fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");
    for part in parts {
        path = path.join(part);
    }
    path
}
