//! File manager port.
//!
//! The content model only holds and compares [`FileId`] handles. Everything
//! about where a file lives and how it is fetched belongs to the file
//! manager behind this trait.

use crate::content::{
    domain::{DialogId, FileId},
    error::FileRegistryError,
    wire::RemoteFile,
};

/// Result type for file manager calls.
pub type FileResult<T> = Result<T, FileRegistryError>;

/// What the file manager currently knows about a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileView {
    /// A complete local copy exists.
    pub has_local: bool,
    /// The file is uploaded and addressable remotely.
    pub has_remote: bool,
    /// Size in bytes, zero when unknown.
    pub size: i64,
}

/// Port for the file manager collaborator.
///
/// # Implementation Notes
///
/// Calls are synchronous and must not block on I/O; the file manager
/// answers from its in-memory index.
#[cfg_attr(test, mockall::automock)]
pub trait FileRegistry: Send + Sync {
    /// Registers a remote file location seen on the wire and returns its
    /// handle.
    ///
    /// # Errors
    ///
    /// Returns `FileRegistryError` if the location cannot be registered.
    fn register_remote(&self, location: &RemoteFile, owner: DialogId) -> FileResult<FileId>;

    /// Reconciles a freshly received handle with the one already held.
    ///
    /// Returns the handle the holder should keep. When both name the same
    /// underlying file the file manager unifies them and may return a handle
    /// backed by more locations than either input.
    ///
    /// # Errors
    ///
    /// Returns `FileRegistryError::Conflict` if the two files differ.
    fn merge(&self, incoming: FileId, existing: FileId) -> FileResult<FileId>;

    /// Returns the current state of a file, or `None` if unknown.
    fn view(&self, file_id: FileId) -> Option<FileView>;

    /// Creates an independent handle to the same remote file, for forwards.
    ///
    /// # Errors
    ///
    /// Returns `FileRegistryError::UnknownFile` if the file is unknown.
    fn duplicate(&self, file_id: FileId) -> FileResult<FileId>;

    /// Records that a message in `owner` references `file_id`.
    fn register_reference(&self, file_id: FileId, owner: DialogId);
}
