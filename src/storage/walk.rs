//! Recursive discovery of documents under an index root

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::error::IndexError;

/// A regular file found under the root, with its full content
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Root-relative name, `/`-separated
    pub name: String,

    pub content: Vec<u8>,
}

/// Ensures `root` exists and is a directory
pub fn check_root(root: &Path) -> Result<(), IndexError> {
    let attr = fs::metadata(root).map_err(|source| IndexError::RootNotFound {
        root: root.to_path_buf(),
        source,
    })?;

    if !attr.is_dir() {
        return Err(IndexError::NotADirectory(root.to_path_buf()));
    }

    Ok(())
}

/// Walks every regular file under `root`, reading each one.
///
/// Visitation order is whatever the filesystem yields. The first walk or
/// read error is returned as an `Err` item; callers collecting with `?`
/// abort on it.
pub fn walk_files(
    root: &Path,
    follow_links: bool,
) -> impl Iterator<Item = Result<WalkedFile, IndexError>> + '_ {
    WalkDir::new(root)
        .follow_links(follow_links)
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => return Some(Err(IndexError::from(err))),
            };

            if !entry.file_type().is_file() {
                return None;
            }

            let path = entry.into_path();
            Some(read_file(root, path))
        })
}

fn read_file(root: &Path, path: PathBuf) -> Result<WalkedFile, IndexError> {
    let name = relative_name(root, &path).ok_or_else(|| IndexError::Read {
        file: path.clone(),
        source: io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
    })?;

    let content = fs::read(&path).map_err(|source| IndexError::Read {
        file: path.clone(),
        source,
    })?;

    tracing::debug!(file = %path.display(), bytes = content.len(), "read document");

    Ok(WalkedFile { name, content })
}

/// Name of `path` relative to `root`, joined with `/` on every platform.
///
/// `None` if any component is not valid UTF-8, so distinct files never
/// collapse into one key.
pub fn relative_name(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(|parts| parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(root: &Path) -> Vec<String> {
        let mut names: Vec<String> = walk_files(root, false)
            .map(|f| f.unwrap().name)
            .collect();
        names.sort();
        names
    }

    #[test]
    fn check_root_missing() {
        let dir = TempDir::new().unwrap();
        let err = check_root(&dir.path().join("missing")).unwrap_err();
        assert!(err.is_root_not_found());
    }

    #[test]
    fn check_root_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = check_root(&file).unwrap_err();
        assert!(matches!(err, IndexError::NotADirectory(_)));
    }

    #[test]
    fn walks_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.txt"), "1").unwrap();
        fs::write(dir.path().join("a/mid.txt"), "2").unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), "3").unwrap();

        assert_eq!(names(dir.path()), vec!["a/b/deep.txt", "a/mid.txt", "top.txt"]);
    }

    #[test]
    fn skips_directories_and_keeps_content() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("empty/nested")).unwrap();
        fs::write(dir.path().join("doc.txt"), "content").unwrap();

        let files: Vec<WalkedFile> = walk_files(dir.path(), false)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "doc.txt");
        assert_eq!(files[0].content, b"content");
    }

    #[test]
    fn empty_root_yields_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(names(dir.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_followed_only_on_request() {
        let dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("linked.txt"), "x").unwrap();
        std::os::unix::fs::symlink(outside.path().join("linked.txt"), dir.path().join("link.txt"))
            .unwrap();

        assert!(names(dir.path()).is_empty());

        let followed: Vec<String> = walk_files(dir.path(), true)
            .map(|f| f.unwrap().name)
            .collect();
        assert_eq!(followed, vec!["link.txt"]);
    }

    #[test]
    fn relative_names_use_forward_slashes() {
        let root = Path::new("/srv/docs");
        let path = root.join("subdir").join("bar.txt");
        assert_eq!(relative_name(root, &path).as_deref(), Some("subdir/bar.txt"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"a\xff.txt")), "one").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"a\xfe.txt")), "two").unwrap();

        let err = walk_files(dir.path(), false)
            .collect::<Result<Vec<_>, _>>()
            .unwrap_err();
        match err {
            IndexError::Read { source, .. } => assert_eq!(source.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn relative_name_of_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new("/srv/docs");
        let path = root.join(OsStr::from_bytes(b"sub\xff")).join("bar.txt");
        assert_eq!(relative_name(root, &path), None);
    }
}
