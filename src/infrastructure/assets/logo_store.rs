use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Utc;

/// Public URL prefix under which stored logos are served.
pub const LOGO_PUBLIC_PREFIX: &str = "/assets/images/ott-partners";

pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 6] = ["jpeg", "jpg", "png", "gif", "svg", "webp"];

const ALLOWED_CONTENT_TYPES: [&str; 6] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/svg+xml",
    "image/webp",
    "image/pjpeg",
];

/// Checks the upload against the image allow-list and size limit before any
/// byte touches the disk. Violations are client errors, not server faults.
pub fn validate_upload(file_name: &str, content_type: &str, size: usize) -> Result<(), String> {
    let extension = extension_of(file_name).to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Only image files are allowed".to_string());
    }
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err("Only image files are allowed".to_string());
    }
    if size == 0 {
        return Err("Logo file is empty".to_string());
    }
    if size > MAX_LOGO_BYTES {
        return Err("Logo file exceeds the 5 MB limit".to_string());
    }
    Ok(())
}

/// Builds a collision-free stored name: normalized stem, millisecond
/// timestamp, random suffix, original extension.
pub fn generate_file_name(original_name: &str) -> String {
    let extension = extension_of(original_name).to_lowercase();
    let stem = sanitize_stem(stem_of(original_name));
    let unique_suffix = format!("{}-{}", Utc::now().timestamp_millis(), rand::random::<u32>());

    if extension.is_empty() {
        format!("{stem}-{unique_suffix}")
    } else {
        format!("{stem}-{unique_suffix}.{extension}")
    }
}

fn extension_of(file_name: &str) -> &str {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
}

fn stem_of(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("logo")
}

fn sanitize_stem(stem: &str) -> String {
    let sanitized: String = stem
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    if sanitized.chars().all(|c| c == '-') {
        "logo".to_string()
    } else {
        sanitized
    }
}

pub struct FsLogoStore {
    public_dir: PathBuf,
}

impl FsLogoStore {
    pub fn new(public_dir: PathBuf) -> Self {
        Self { public_dir }
    }

    fn logos_dir(&self) -> PathBuf {
        self.public_dir
            .join(LOGO_PUBLIC_PREFIX.trim_start_matches('/'))
    }

    fn fs_path_of(&self, public_path: &str) -> Result<PathBuf> {
        if !public_path.starts_with(LOGO_PUBLIC_PREFIX) || public_path.contains("..") {
            bail!("refusing to touch path outside the logos directory: {public_path}");
        }
        Ok(self.public_dir.join(public_path.trim_start_matches('/')))
    }

    /// Writes the upload under the logos directory and returns the public
    /// path to store on the record.
    pub async fn save(&self, original_name: &str, bytes: Vec<u8>) -> Result<String> {
        let dir = self.logos_dir();
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = generate_file_name(original_name);
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        Ok(format!("{LOGO_PUBLIC_PREFIX}/{file_name}"))
    }

    pub async fn remove(&self, public_path: &str) -> Result<()> {
        let path = self.fs_path_of(public_path)?;
        tokio::fs::remove_file(path).await?;
        Ok(())
    }
}
