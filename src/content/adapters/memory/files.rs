//! In-memory file manager for tests and embedding.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use crate::content::{
    domain::{DialogId, FileId},
    error::FileRegistryError,
    ports::{FileRegistry, FileResult, FileView},
    wire::RemoteFile,
};

/// Thread-safe in-memory file manager.
///
/// Every handle points at a file node. Merging two handles moves them onto
/// one node; duplicating a handle adds another handle to the same node.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileRegistry {
    state: Arc<RwLock<RegistryState>>,
}

#[derive(Debug, Default)]
struct RegistryState {
    next_id: i32,
    handles: HashMap<i32, usize>,
    nodes: Vec<FileNode>,
    by_remote: HashMap<(i64, i32), usize>,
    references: HashMap<i32, BTreeSet<DialogId>>,
}

#[derive(Debug, Default)]
struct FileNode {
    remote: Option<RemoteFile>,
    has_local: bool,
    size: i64,
}

impl RegistryState {
    fn allocate(&mut self, node: usize) -> FileId {
        self.next_id = self.next_id.saturating_add(1);
        self.handles.insert(self.next_id, node);
        FileId::new(self.next_id, 0)
    }

    fn add_node(&mut self, node: FileNode) -> usize {
        self.nodes.push(node);
        self.nodes.len().saturating_sub(1)
    }

    fn node_of(&self, file_id: FileId) -> FileResult<usize> {
        self.handles
            .get(&file_id.id)
            .copied()
            .ok_or(FileRegistryError::UnknownFile(file_id))
    }
}

impl InMemoryFileRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file that exists only locally, such as a pending upload.
    #[must_use]
    pub fn register_local(&self, size: i64) -> FileId {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let node = state.add_node(FileNode {
            remote: None,
            has_local: true,
            size,
        });
        state.allocate(node)
    }

    /// Returns the chats recorded as referencing `file_id`.
    #[must_use]
    pub fn references(&self, file_id: FileId) -> Vec<DialogId> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .references
            .get(&file_id.id)
            .map(|owners| owners.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl FileRegistry for InMemoryFileRegistry {
    fn register_remote(&self, location: &RemoteFile, owner: DialogId) -> FileResult<FileId> {
        if location.id == 0 {
            return Err(FileRegistryError::UnknownFile(FileId::default()));
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let key = (location.id, location.dc_id);
        let known = state.by_remote.get(&key).copied();
        let node = known.unwrap_or_else(|| {
            let added = state.add_node(FileNode {
                remote: Some(location.clone()),
                has_local: false,
                size: location.size,
            });
            state.by_remote.insert(key, added);
            added
        });
        let file_id = state.allocate(node);
        tracing::trace!(%file_id, %owner, remote_id = location.id, "registered remote file");
        Ok(file_id)
    }

    fn merge(&self, incoming: FileId, existing: FileId) -> FileResult<FileId> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let target = state.node_of(existing)?;
        let source = state.node_of(incoming)?;
        if source == target {
            return Ok(existing);
        }
        let (Some(source_node), Some(target_node)) =
            (state.nodes.get(source), state.nodes.get(target))
        else {
            return Err(FileRegistryError::Conflict(incoming, existing));
        };
        if let (Some(source_remote), Some(target_remote)) =
            (&source_node.remote, &target_node.remote)
            && (source_remote.id, source_remote.dc_id) != (target_remote.id, target_remote.dc_id)
        {
            return Err(FileRegistryError::Conflict(incoming, existing));
        }
        let remote = target_node.remote.clone().or_else(|| source_node.remote.clone());
        let has_local = target_node.has_local || source_node.has_local;
        let size = target_node.size.max(source_node.size);
        if let Some(node) = state.nodes.get_mut(target) {
            node.remote = remote.clone();
            node.has_local = has_local;
            node.size = size;
        }
        for handle_node in state.handles.values_mut() {
            if *handle_node == source {
                *handle_node = target;
            }
        }
        if let Some(location) = remote {
            state.by_remote.insert((location.id, location.dc_id), target);
        }
        Ok(existing)
    }

    fn view(&self, file_id: FileId) -> Option<FileView> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let node = state.node_of(file_id).ok()?;
        state.nodes.get(node).map(|found| FileView {
            has_local: found.has_local,
            has_remote: found.remote.is_some(),
            size: found.size,
        })
    }

    fn duplicate(&self, file_id: FileId) -> FileResult<FileId> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let node = state.node_of(file_id)?;
        Ok(state.allocate(node))
    }

    fn register_reference(&self, file_id: FileId, owner: DialogId) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.references.entry(file_id.id).or_default().insert(owner);
    }
}
