//! File system storage for comments

use rc_core::config::StorageConfig;
use rc_core::error::{CommentsError, Result};
use rc_core::{Comment, CommentId, CommentStore};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File system based comment storage, one JSON document per comment
pub struct FileSystemStore {
    /// Base directory for storage
    base_dir: PathBuf,
    /// Comments subdirectory
    comments_dir: PathBuf,
    /// Pretty-print documents
    pretty: bool,
}

impl FileSystemStore {
    /// Create a new file system storage
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let comments_dir = base_dir.join("comments");

        let store = Self {
            base_dir,
            comments_dir,
            pretty: true,
        };

        store.ensure_dirs()?;
        Ok(store)
    }

    /// Create storage with default directory (~/.recipe-comments)
    pub fn default_location() -> Result<Self> {
        Self::new(Self::default_base_dir())
    }

    /// Create storage from configuration
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let base_dir = config
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_base_dir);

        let mut store = Self::new(base_dir)?;
        store.pretty = config.pretty;
        Ok(store)
    }

    fn default_base_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "recipe-comments", "recipe-comments")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".recipe-comments")
            })
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        if !self.comments_dir.exists() {
            fs::create_dir_all(&self.comments_dir).map_err(|e| {
                CommentsError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create comments directory: {}", e),
                ))
            })?;
            debug!("Created comments directory: {:?}", self.comments_dir);
        }
        Ok(())
    }

    /// Get the path for a comment document
    fn comment_path(&self, id: &CommentId) -> PathBuf {
        self.comments_dir.join(format!("{}.json", id))
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self, id: &CommentId) -> PathBuf {
        self.comments_dir.join(format!(".{}.json.tmp", id))
    }

    /// Write comment atomically (write to temp, then rename)
    fn atomic_write(&self, comment: &Comment) -> Result<()> {
        let id = comment.id();
        let final_path = self.comment_path(id);

        self.write_via_temp(&self.temp_path(id), &final_path, |file| {
            self.write_document(file, comment)
        })?;

        debug!("Saved comment {} to {:?}", id, final_path);
        Ok(())
    }

    /// Run `write` against a fresh temp file and move it into place.
    /// The temp file never outlives a failure.
    fn write_via_temp(
        &self,
        temp_path: &Path,
        final_path: &Path,
        write: impl FnOnce(fs::File) -> Result<()>,
    ) -> Result<()> {
        let temp_file = fs::File::create(temp_path).map_err(|e| {
            CommentsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;

        if let Err(e) = write(temp_file) {
            let _ = fs::remove_file(temp_path);
            return Err(e);
        }

        fs::rename(temp_path, final_path).map_err(|e| {
            let _ = fs::remove_file(temp_path);
            CommentsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })
    }

    /// Serialize a comment into an open file and flush it
    fn write_document(&self, file: fs::File, comment: &Comment) -> Result<()> {
        let mut writer = BufWriter::new(file);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, comment)?;
        } else {
            serde_json::to_writer(&mut writer, comment)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read and validate a comment document
    fn read_comment(&self, path: &Path) -> Result<Comment> {
        let file = fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                let id = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown");
                CommentsError::CommentNotFound(id.to_string())
            } else {
                CommentsError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get comments directory
    pub fn comments_dir(&self) -> &PathBuf {
        &self.comments_dir
    }
}

impl CommentStore for FileSystemStore {
    fn insert(&self, comment: &Comment) -> Result<()> {
        if self.exists(comment.id()) {
            return Err(CommentsError::DuplicateComment(comment.id().to_string()));
        }
        self.atomic_write(comment)
    }

    fn load(&self, id: &CommentId) -> Result<Comment> {
        self.read_comment(&self.comment_path(id))
    }

    fn list(&self) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();

        let entries = fs::read_dir(&self.comments_dir).map_err(|e| {
            CommentsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read comments directory: {}", e),
            ))
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            // Skip non-json files and temp files
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }

            match self.read_comment(&path) {
                Ok(comment) => comments.push(comment),
                Err(e) => {
                    warn!("Failed to read comment file {:?}: {}", path, e);
                }
            }
        }

        Ok(comments)
    }

    fn delete(&self, id: &CommentId) -> Result<()> {
        let path = self.comment_path(id);

        if !path.exists() {
            return Err(CommentsError::CommentNotFound(id.to_string()));
        }

        fs::remove_file(&path).map_err(|e| {
            CommentsError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to delete comment file: {}", e),
            ))
        })?;

        debug!("Deleted comment {} from {:?}", id, path);
        Ok(())
    }

    fn exists(&self, id: &CommentId) -> bool {
        self.comment_path(id).exists()
    }
}
