//! Image payload handling: URL classification and file-to-data-URL decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::behavior::DroppedFile;
use crate::session::{Completion, SessionHandle};

/// File extensions treated as images when classifying pasted URLs.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "ico", "avif",
];

/// True if `text` is a syntactically valid URL whose path ends in a known
/// image extension. Anything that fails to parse is simply not an image
/// URL; this never errors.
pub fn is_image_url(text: &str) -> bool {
    let Ok(parsed) = Url::parse(text) else {
        return false;
    };
    let file = parsed.path().rsplit('/').next().unwrap_or("");
    let Some((_, ext)) = file.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

/// Encode raw bytes as a `data:` URL.
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Read a dropped file and deliver it to the session as a decoded image.
///
/// Each decode is an independent task; several may be in flight at once and
/// complete in any order. If the session has been dropped by the time the
/// decode finishes, the completion send fails and the result is discarded —
/// a late decode can never mutate a dead session.
pub fn spawn_image_decode(session: SessionHandle, file: DroppedFile) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::fs::read(&file.path).await {
            Ok(bytes) => {
                let url = data_url(&file.media_type, &bytes);
                if !session.complete(Completion::InsertImage { url }) {
                    debug!(file = %file.name, "session closed before decode finished; dropping image");
                }
            }
            Err(err) => {
                warn!(file = %file.name, %err, "failed to read dropped file");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_urls_by_extension() {
        assert!(is_image_url("https://example.com/pic.png"));
        assert!(is_image_url("https://example.com/a/b/photo.JPEG"));
        assert!(is_image_url("https://example.com/pic.png?size=large"));
        assert!(!is_image_url("https://example.com/page.html"));
        assert!(!is_image_url("https://example.com/noextension"));
    }

    #[test]
    fn test_non_urls_are_not_image_urls() {
        assert!(!is_image_url("not a url"));
        assert!(!is_image_url(""));
        assert!(!is_image_url("pic.png"));
        assert!(!is_image_url("example.com/pic.png"));
    }

    #[test]
    fn test_data_url_shape() {
        let url = data_url("image/png", b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
        assert!(url.starts_with("data:image/png;base64,"));
    }
}
