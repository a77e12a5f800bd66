use std::fs;
use std::path::Path;
use std::sync::Arc;

use derive_more::Deref;

use crate::error::{Chainable, Result};

/// The regular files directly inside a directory, sorted by file name.
#[derive(Debug, Deref)]
pub struct Listing {
    #[deref]
    documents: Vec<Document>,
}

/// A text file on disk, identified by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: Arc<Path>,
    pub file_name: String,
}

impl Listing {
    /// Lists the regular files in `root` whose names satisfy `select`,
    /// lexicographically by file name.
    ///
    /// Hidden files are included. Names are filtered before anything else is
    /// looked at, so entries that are not selected are never resolved: a
    /// dangling symbolic link that `select` rejects is simply ignored. A
    /// selected symbolic link is followed, and selected entries that resolve
    /// to anything but a regular file are skipped. Fails if `root` is not an
    /// existing directory or cannot be read.
    pub fn read<P, F>(root: P, mut select: F) -> Result<Self>
        where P: AsRef<Path>, F: FnMut(&str) -> bool
    {
        use jwalk::{Parallelism, WalkDir};

        let root = root.as_ref();
        let metadata = fs::metadata(root).chain_with(|| error! {
            "site directory is not accessible",
            "directory" => root.display(),
        })?;

        if !metadata.is_dir() {
            return err! {
                "site path must point to a directory",
                "path is not a directory" => root.display(),
            };
        }

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .min_depth(1)
            .max_depth(1)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true);

        let mut documents = vec![];
        for entry in walker {
            let entry = entry.chain_with(|| error! {
                "failed to read site directory",
                "directory" => root.display(),
            })?;

            let file_name = entry.file_name.to_string_lossy();
            if !select(&file_name) {
                log::debug!("not selected: {file_name}");
                continue;
            }

            let path = entry.path();
            let is_file = match entry.file_type.is_symlink() {
                true => fs::metadata(&path).chain_with(|| error! {
                    "failed to resolve symbolic link",
                    "file path" => path.display(),
                })?.is_file(),
                false => entry.file_type.is_file(),
            };

            if !is_file {
                log::debug!("skipping non-file entry {}", path.display());
                continue;
            }

            documents.push(Document {
                file_name: file_name.into_owned(),
                path: Arc::from(path.into_boxed_path()),
            });
        }

        Ok(Listing { documents })
    }
}

impl Document {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let file_name = path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Document { path: path.into(), file_name }
    }

    /// The identifier the document is linked by in a catalog.
    pub fn identifier(&self) -> &str {
        &self.file_name
    }

    /// Reads the full contents of the document as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).chain_with(|| error! {
            "failed to read document",
            "file path" => self.path.display(),
        })
    }

    /// Replaces the full contents of the document with `content`.
    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).chain_with(|| error! {
            "failed to write document",
            "file path" => self.path.display(),
        })
    }
}
