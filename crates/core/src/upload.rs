//! Image upload policy.
//!
//! Decides whether an uploaded file is accepted as an image, and how it is
//! named on disk. Stored names are `YYYYMMDD_HHMMSS_<sanitised original>`
//! and records reference them by a path relative to the public static root
//! (`uploads/<stored name>`).
//!
//! Nothing here touches the filesystem; the API crate owns the I/O.

use unicode_normalization::UnicodeNormalization;

use crate::types::Timestamp;

/// Extensions accepted when no explicit list is configured.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Directory segment (under the static root) that holds uploaded images.
pub const PUBLIC_UPLOAD_PREFIX: &str = "uploads";

/// Sortable prefix prepended to every stored filename.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_";

/// Longest public path a record can hold (`image` column limit).
pub const MAX_PUBLIC_PATH_LENGTH: usize = 255;

/// Extension allow-list for image uploads.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    allowed_extensions: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_EXTENSIONS.iter().copied())
    }
}

impl UploadPolicy {
    /// Build a policy from extension names. Entries are lower-cased and a
    /// leading `.` is ignored; blank entries are dropped.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { allowed_extensions }
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// Whether `filename` carries an allowed extension (case-insensitive).
    pub fn is_allowed(&self, filename: &str) -> bool {
        extension(filename).is_some_and(|ext| self.allowed_extensions.contains(&ext))
    }

    /// Compute the on-disk name for an upload, or `None` when the file must
    /// not be stored.
    ///
    /// Both the original name and its sanitised form must carry an allowed
    /// extension, so sanitising can never turn a rejected name into an
    /// accepted one or strip the extension off an accepted one.
    ///
    /// Long names are cut at the end of the stem, keeping the extension, so
    /// that [`public_path`] never exceeds [`MAX_PUBLIC_PATH_LENGTH`].
    pub fn stored_name(&self, original: &str, now: Timestamp) -> Option<String> {
        if !self.is_allowed(original) {
            return None;
        }
        let sanitized = sanitize_filename(original);
        if !self.is_allowed(&sanitized) {
            return None;
        }
        let prefix = now.format(TIMESTAMP_FORMAT).to_string();
        let budget = MAX_PUBLIC_PATH_LENGTH - PUBLIC_UPLOAD_PREFIX.len() - 1 - prefix.len();
        let name = fit_to_length(&sanitized, budget)?;
        Some(format!("{prefix}{name}"))
    }
}

/// Lower-cased extension of `filename`, if it has a non-empty one.
pub fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Shorten a sanitised `stem.ext` name to at most `max_len` bytes by
/// cutting the stem. `None` when not even one stem character fits.
fn fit_to_length(name: &str, max_len: usize) -> Option<String> {
    if name.len() <= max_len {
        return Some(name.to_string());
    }
    let (stem, ext) = name.rsplit_once('.')?;
    let stem_len = max_len.checked_sub(ext.len() + 1)?;
    let stem = stem[..stem_len.min(stem.len())].trim_end_matches(['.', '_']);
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}.{ext}"))
}

/// Reduce a client-supplied filename to a safe, flat ASCII name.
///
/// Accented letters are decomposed (NFKD) to their ASCII base, path
/// separators become word breaks, whitespace runs become `_`, anything
/// outside `[A-Za-z0-9_.-]` is dropped, and leading/trailing `.`/`_` are
/// trimmed. The result never contains a directory component and may be
/// empty.
pub fn sanitize_filename(name: &str) -> String {
    let flattened: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Path stored on a record for an image saved as `stored_name`.
pub fn public_path(stored_name: &str) -> String {
    format!("{PUBLIC_UPLOAD_PREFIX}/{stored_name}")
}

/// Recover the on-disk file name from a stored public path.
///
/// Returns `None` for anything that is not exactly `uploads/<flat name>`,
/// so a tampered path can never address a file outside the upload
/// directory.
pub fn stored_name_from_public_path(path: &str) -> Option<&str> {
    let name = path.strip_prefix(PUBLIC_UPLOAD_PREFIX)?.strip_prefix('/')?;
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn default_policy_accepts_listed_extensions() {
        let policy = UploadPolicy::default();
        for name in ["a.png", "a.jpg", "a.jpeg", "a.gif", "a.webp"] {
            assert!(policy.is_allowed(name), "{name} should be allowed");
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(UploadPolicy::default().is_allowed("Photo.JPG"));
    }

    #[test]
    fn rejects_disallowed_and_missing_extensions() {
        let policy = UploadPolicy::default();
        assert!(!policy.is_allowed("script.exe"));
        assert!(!policy.is_allowed("image.png.svg"));
        assert!(!policy.is_allowed("noextension"));
        assert!(!policy.is_allowed("trailingdot."));
        assert!(!policy.is_allowed(""));
    }

    #[test]
    fn configured_extensions_are_normalised() {
        let policy = UploadPolicy::new([" .PNG", "", "svg"]);
        assert_eq!(policy.allowed_extensions(), &["png".to_string(), "svg".to_string()]);
        assert!(policy.is_allowed("x.svg"));
        assert!(!policy.is_allowed("x.jpg"));
    }

    #[test]
    fn sanitize_strips_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd.png"), "etc_passwd.png");
        assert_eq!(sanitize_filename("..\\..\\win.png"), "win.png");
    }

    #[test]
    fn sanitize_replaces_whitespace_and_drops_unsafe_chars() {
        assert_eq!(sanitize_filename("My Photo (1).JPG"), "My_Photo_1.JPG");
        assert_eq!(sanitize_filename("Menu (2).png"), "Menu_2.png");
    }

    #[test]
    fn sanitize_folds_accents_to_ascii() {
        assert_eq!(sanitize_filename("café  menu.png"), "cafe_menu.png");
        assert_eq!(sanitize_filename("Ünïcödé.JPG"), "Unicode.JPG");
    }

    #[test]
    fn sanitize_can_produce_empty_name() {
        assert_eq!(sanitize_filename("../.."), "");
    }

    #[test]
    fn stored_name_has_timestamp_prefix() {
        let name = UploadPolicy::default().stored_name("My Photo.png", at());
        assert_eq!(name.as_deref(), Some("20240309_140507_My_Photo.png"));
    }

    #[test]
    fn stored_name_rejects_disallowed_extension() {
        assert_eq!(UploadPolicy::default().stored_name("evil.php", at()), None);
    }

    #[test]
    fn stored_name_rejects_when_sanitising_loses_extension() {
        // No ASCII form before the dot: sanitising yields "png".
        assert_eq!(UploadPolicy::default().stored_name("写真.png", at()), None);
    }

    #[test]
    fn stored_name_of_long_filename_fits_the_image_column() {
        let original = format!("{}.png", "a".repeat(240));
        let name = UploadPolicy::default().stored_name(&original, at()).unwrap();

        assert!(name.starts_with("20240309_140507_aaa"));
        assert!(name.ends_with("a.png"));
        assert_eq!(public_path(&name).len(), MAX_PUBLIC_PATH_LENGTH);
    }

    #[test]
    fn stored_name_at_the_limit_is_unchanged() {
        // 255 - "uploads/".len() - "20240309_140507_".len() = 231
        let original = format!("{}.webp", "b".repeat(226));
        let name = UploadPolicy::default().stored_name(&original, at()).unwrap();
        assert_eq!(name, format!("20240309_140507_{original}"));
    }

    #[test]
    fn shortening_trims_dangling_separators() {
        assert_eq!(fit_to_length("abc_def.png", 8).as_deref(), Some("abc.png"));
        assert_eq!(fit_to_length("abcdef.jpeg", 5), None);
    }

    #[test]
    fn public_path_round_trip() {
        let path = public_path("20240309_140507_a.png");
        assert_eq!(path, "uploads/20240309_140507_a.png");
        assert_eq!(stored_name_from_public_path(&path), Some("20240309_140507_a.png"));
    }

    #[test]
    fn public_path_rejects_foreign_locations() {
        assert_eq!(stored_name_from_public_path("uploads/../secret.png"), None);
        assert_eq!(stored_name_from_public_path("other/a.png"), None);
        assert_eq!(stored_name_from_public_path("uploads/"), None);
        assert_eq!(stored_name_from_public_path("uploadsx.png"), None);
    }
}
