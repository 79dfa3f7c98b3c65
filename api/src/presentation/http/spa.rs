use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Serves the compiled front-end. Paths with no matching file get
/// `index.html` with a 200 so client-side routing can take over.
pub fn service(static_dir: impl AsRef<Path>) -> ServeDir<ServeFile> {
    let dir = static_dir.as_ref();
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
