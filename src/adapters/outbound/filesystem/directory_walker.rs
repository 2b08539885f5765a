use crate::ports::outbound::{ManifestCriteria, ManifestLocator, ManifestScan};
use async_trait::async_trait;
use futures::future::{join_all, BoxFuture, FutureExt};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Kind of a directory entry as seen without following symbolic links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
    Other,
}

/// FileSystemWalker adapter for discovering manifests on the local file system
///
/// Sibling subdirectories are walked concurrently; a parent's walk finishes
/// only after all of its children have. Each branch returns its own
/// `ManifestScan`, which the parent concatenates, so no state is shared
/// between branches.
///
/// Symbolic links are never followed, which keeps the walk finite on trees
/// containing link loops.
pub struct FileSystemWalker;

impl FileSystemWalker {
    pub fn new() -> Self {
        Self
    }

    fn walk<'a>(&'a self, dir: PathBuf, criteria: &'a ManifestCriteria) -> BoxFuture<'a, ManifestScan> {
        async move {
            let mut scan = ManifestScan::default();

            if criteria.is_excluded_dir(&dir) {
                scan.skipped_dirs.push(dir);
                return scan;
            }

            let entries = match Self::list_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) => {
                    scan.read_failures.push((dir, e.to_string()));
                    return scan;
                }
            };

            let mut subdirs = Vec::new();
            for (path, kind) in entries {
                match kind {
                    EntryKind::Directory => subdirs.push(path),
                    EntryKind::File => {
                        let is_manifest = path
                            .file_name()
                            .and_then(|name| name.to_str())
                            .is_some_and(|name| criteria.is_manifest(name));
                        if is_manifest {
                            scan.manifests.push(path);
                        }
                    }
                    EntryKind::Other => {}
                }
            }

            let children = join_all(subdirs.into_iter().map(|sub| self.walk(sub, criteria))).await;
            for child in children {
                scan.merge(child);
            }

            scan
        }
        .boxed()
    }

    /// Lists a directory once, sorted by path so discovery order is stable
    async fn list_dir(dir: &Path) -> io::Result<Vec<(PathBuf, EntryKind)>> {
        let mut read_dir = fs::read_dir(dir).await?;
        let mut entries = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push((entry.path(), kind));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

impl Default for FileSystemWalker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ManifestLocator for FileSystemWalker {
    async fn locate(&self, root: &Path, criteria: &ManifestCriteria) -> ManifestScan {
        self.walk(root.to_path_buf(), criteria).await
    }
}
