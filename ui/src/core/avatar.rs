//! Turns a locally selected image into an inline `data:` URL so the edit form
//! can preview it. Nothing is uploaded.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::error::AvatarError;

/// MIME type for an image file name, by extension.
pub fn image_mime(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

pub fn avatar_data_url(file_name: &str, bytes: &[u8]) -> Result<String, AvatarError> {
    let mime = image_mime(file_name).ok_or_else(|| AvatarError::UnsupportedType {
        name: file_name.to_string(),
    })?;
    if bytes.is_empty() {
        return Err(AvatarError::Empty {
            name: file_name.to_string(),
        });
    }
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_bytes() {
        let url = avatar_data_url("me.PNG", b"\x89PNG").unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn rejects_non_images() {
        assert_eq!(
            avatar_data_url("notes.txt", b"hello"),
            Err(AvatarError::UnsupportedType {
                name: "notes.txt".into()
            })
        );
        assert_eq!(image_mime("no-extension"), None);
    }

    #[test]
    fn rejects_empty_files() {
        assert_eq!(
            avatar_data_url("blank.jpg", b""),
            Err(AvatarError::Empty {
                name: "blank.jpg".into()
            })
        );
    }
}
