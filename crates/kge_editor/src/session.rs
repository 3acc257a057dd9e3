//! One editing session: a core, its command history and the document.
//!
//! This is the non-GUI half of an editor tool's main window. A shell
//! forwards property edits as commands, wires its undo/redo buttons to
//! [`HistoryState`], and calls the document operations from its menus.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use kge_core::{CoreResult, EngineCore};

use crate::commands::{CommandResult, Created, EditorCommand};
use crate::history::CommandHistory;
use crate::preferences::EditorPreferences;

/// Most recently opened documents, newest first.
#[derive(Clone, Debug)]
pub struct RecentFiles {
    files: VecDeque<PathBuf>,
    max_entries: usize,
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl RecentFiles {
    const DEFAULT_MAX: usize = 10;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            files: VecDeque::new(),
            max_entries: max,
        }
    }

    pub fn add(&mut self, path: PathBuf) {
        self.files.retain(|p| p != &path);
        self.files.push_front(path);
        self.files.truncate(self.max_entries);
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Undo/redo availability, recomputed after every history change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
    pub undo_name: Option<&'static str>,
    pub redo_name: Option<&'static str>,
}

/// Core, history and document of one editor tool.
pub struct EditorSession<C: EngineCore> {
    core: C,
    history: CommandHistory,
    recent_files: RecentFiles,
    document: Option<PathBuf>,
}

impl<C: EngineCore> EditorSession<C> {
    pub fn new(core: C) -> Self {
        Self {
            core,
            history: CommandHistory::new(),
            recent_files: RecentFiles::new(),
            document: None,
        }
    }

    /// Create a session and push the preference defaults into the core.
    pub fn with_preferences(mut core: C, prefs: &EditorPreferences) -> CoreResult<Self> {
        prefs.apply_to(&mut core)?;
        Ok(Self {
            core,
            history: CommandHistory::with_limit(prefs.history_limit),
            recent_files: RecentFiles::with_capacity(prefs.max_recent_files),
            document: None,
        })
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    /// Direct core access. Changes made here bypass the history.
    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn recent_files(&self) -> &RecentFiles {
        &self.recent_files
    }

    /// Path of the open document, if it has one.
    pub fn document(&self) -> Option<&Path> {
        self.document.as_deref()
    }

    /// Execute a command and record it for undo.
    pub fn execute(&mut self, cmd: impl Into<EditorCommand>) -> CommandResult<Option<Created>> {
        let cmd = cmd.into();
        let name = cmd.name();
        self.history.execute(cmd, &mut self.core).map_err(|e| {
            log::warn!("'{}' failed and was not recorded: {}", name, e);
            e
        })
    }

    /// # Panics
    ///
    /// Panics if there is nothing to undo.
    pub fn undo(&mut self) -> CommandResult<()> {
        self.history.undo(&mut self.core)
    }

    /// # Panics
    ///
    /// Panics if there is nothing to redo.
    pub fn redo(&mut self) -> CommandResult<()> {
        self.history.redo(&mut self.core)
    }

    /// Undo if possible. Returns whether anything was undone.
    pub fn try_undo(&mut self) -> CommandResult<bool> {
        if !self.history.can_undo() {
            return Ok(false);
        }
        self.undo()?;
        Ok(true)
    }

    /// Redo if possible. Returns whether anything was redone.
    pub fn try_redo(&mut self) -> CommandResult<bool> {
        if !self.history.can_redo() {
            return Ok(false);
        }
        self.redo()?;
        Ok(true)
    }

    pub fn history_state(&self) -> HistoryState {
        HistoryState {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            undo_name: self.history.undo_name(),
            redo_name: self.history.redo_name(),
        }
    }

    pub fn clear_history(&mut self) {
        log::info!("Clearing {} history entries", self.history.len());
        self.history.clear();
    }

    /// Load a document. The old history refers to entities that no longer
    /// exist, so it is dropped.
    pub fn open_document(&mut self, path: &Path) -> CoreResult<()> {
        self.core.load_scene(path)?;
        self.history.clear();
        self.recent_files.add(path.to_path_buf());
        self.document = Some(path.to_path_buf());
        log::info!("Opened {:?}", path);
        Ok(())
    }

    /// Save the document. The history is kept.
    pub fn save_document(&mut self, path: &Path) -> CoreResult<()> {
        self.core.save_scene(path)?;
        self.recent_files.add(path.to_path_buf());
        self.document = Some(path.to_path_buf());
        log::info!("Saved {:?}", path);
        Ok(())
    }

    pub fn close_document(&mut self) -> CoreResult<()> {
        self.core.close_scene()?;
        self.history.clear();
        self.document = None;
        log::info!("Closed document");
        Ok(())
    }

    pub fn into_core(self) -> C {
        self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_files_order() {
        let mut recent = RecentFiles::with_capacity(2);
        recent.add(PathBuf::from("a.toml"));
        recent.add(PathBuf::from("b.toml"));
        recent.add(PathBuf::from("a.toml"));
        recent.add(PathBuf::from("c.toml"));

        let files: Vec<_> = recent.files().cloned().collect();
        assert_eq!(files, vec![PathBuf::from("c.toml"), PathBuf::from("a.toml")]);
    }

    #[test]
    fn test_recent_files_clear() {
        let mut recent = RecentFiles::new();
        recent.add(PathBuf::from("a.toml"));
        assert_eq!(recent.len(), 1);

        recent.clear();
        assert!(recent.is_empty());
    }
}
