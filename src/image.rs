//! Image path shaping for article cards.
use std::path::Path;

/// Image path for a random-article card.
///
/// Windows separators become `/` and leading slashes are dropped so the path
/// stays relative to the site root. Absent or empty paths fall back to
/// `default`.
pub fn card_image(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(path) if !path.is_empty() => path
            .replace('\\', "/")
            .trim_start_matches('/')
            .to_string(),
        _ => default.to_string(),
    }
}

/// Image path for a similar-article card.
///
/// The image must exist under `asset_root`; the served path is then
/// `images/<file name>`. Anything else falls back to `default`.
pub fn local_image(raw: Option<&str>, asset_root: &Path, default: &str) -> String {
    let Some(path) = raw.filter(|p| !p.is_empty()) else {
        return default.to_string();
    };

    let relative = path.replace('\\', "/");
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() || !asset_root.join(relative).is_file() {
        return default.to_string();
    }

    match relative.rsplit('/').next() {
        Some(name) if !name.is_empty() => format!("images/{name}"),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "images/default.jpg";

    #[test]
    fn card_image_normalizes_separators() {
        assert_eq!(card_image(Some("\\images\\a.jpg"), DEFAULT), "images/a.jpg");
        assert_eq!(card_image(Some("//images/b.png"), DEFAULT), "images/b.png");
        assert_eq!(card_image(Some(""), DEFAULT), DEFAULT);
        assert_eq!(card_image(None, DEFAULT), DEFAULT);
    }

    #[test]
    fn local_image_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("static/img")).unwrap();
        std::fs::write(dir.path().join("static/img/cover.jpg"), b"jpg").unwrap();

        assert_eq!(
            local_image(Some("static/img/cover.jpg"), dir.path(), DEFAULT),
            "images/cover.jpg"
        );
        assert_eq!(
            local_image(Some("/static\\img\\cover.jpg"), dir.path(), DEFAULT),
            "images/cover.jpg"
        );
        assert_eq!(local_image(Some("static/img/gone.jpg"), dir.path(), DEFAULT), DEFAULT);
        assert_eq!(local_image(Some("static/img"), dir.path(), DEFAULT), DEFAULT);
        assert_eq!(local_image(None, dir.path(), DEFAULT), DEFAULT);
    }
}
