use std::ffi::OsStr;
use std::io;
use std::path::Path;
use tokio::fs;

/// What [`ensure_dir`] found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

/// Makes sure `path` exists as a directory, creating a single level if absent.
///
/// Existing contents are never touched. Losing a creation race to another job
/// counts as success, as long as what now sits at `path` is a directory.
pub async fn ensure_dir(path: impl AsRef<Path>) -> io::Result<DirStatus> {
    let path = path.as_ref();

    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => return Ok(DirStatus::Existing),
        Ok(_) => return Err(not_a_directory(path)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    match fs::create_dir(path).await {
        Ok(()) => Ok(DirStatus::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if fs::metadata(path).await?.is_dir() {
                Ok(DirStatus::Existing)
            } else {
                Err(not_a_directory(path))
            }
        }
        Err(e) => Err(e),
    }
}

/// Last component of `path`, if it names a file.
pub fn file_name(path: &Path) -> Option<&OsStr> {
    path.file_name()
}

fn not_a_directory(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotADirectory,
        format!("{} exists but is not a directory", path.display()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_directory_once() {
        let temp = tempfile::tempdir().expect("temp dir");
        let dir = temp.path().join("imageresize");

        assert_eq!(ensure_dir(&dir).await.unwrap(), DirStatus::Created);
        assert!(dir.is_dir());
        assert_eq!(ensure_dir(&dir).await.unwrap(), DirStatus::Existing);
    }

    #[tokio::test]
    async fn existing_contents_are_left_alone() {
        let temp = tempfile::tempdir().expect("temp dir");
        let keep = temp.path().join("keep.txt");
        std::fs::write(&keep, b"hello").unwrap();

        assert_eq!(ensure_dir(temp.path()).await.unwrap(), DirStatus::Existing);
        assert_eq!(std::fs::read(&keep).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn only_one_level_is_created() {
        let temp = tempfile::tempdir().expect("temp dir");
        let nested = temp.path().join("missing-parent").join("imageresize");

        let err = ensure_dir(&nested).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!nested.exists());
    }

    #[tokio::test]
    async fn regular_file_in_the_way_is_an_error() {
        let temp = tempfile::tempdir().expect("temp dir");
        let blocker = temp.path().join("imageresize");
        std::fs::write(&blocker, b"").unwrap();

        let err = ensure_dir(&blocker).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
    }

    #[tokio::test]
    async fn concurrent_creation_both_succeed() {
        let temp = tempfile::tempdir().expect("temp dir");
        let dir = temp.path().join("imageresize");

        let (a, b) = tokio::join!(ensure_dir(&dir), ensure_dir(&dir));
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert!(dir.is_dir());
    }

    #[test]
    fn file_name_is_the_basename() {
        assert_eq!(file_name(Path::new("/home/u/photo.jpg")), Some(OsStr::new("photo.jpg")));
        assert_eq!(file_name(Path::new("/")), None);
    }
}
