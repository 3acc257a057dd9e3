//! Linear undo/redo history.
//!
//! The history is a list of commands plus a cursor. Commands before the
//! cursor are applied to the core; commands at or after it have been
//! undone and can be redone. Executing a new command discards everything
//! after the cursor.

use kge_core::EngineCore;

use crate::commands::{CommandResult, Created, EditorCommand};

/// One row of a history list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub name: &'static str,
    /// Whether the command's effect is live in the core.
    pub applied: bool,
}

/// Undo/redo history over [`EditorCommand`]s.
#[derive(Debug, Default)]
pub struct CommandHistory {
    commands: Vec<EditorCommand>,
    /// Index just past the last applied command
    end_index: usize,
    /// Maximum number of entries kept, unbounded if `None`
    limit: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
        self.enforce_limit();
    }

    /// Execute a command and record it.
    ///
    /// The redo tail is dropped only once the command has succeeded; a
    /// failing command leaves the history exactly as it was.
    pub fn execute(
        &mut self,
        cmd: impl Into<EditorCommand>,
        core: &mut dyn EngineCore,
    ) -> CommandResult<Option<Created>> {
        let mut cmd = cmd.into();
        let created = cmd.execute(core)?;

        if self.commands.len() > self.end_index {
            log::debug!(
                "Discarding {} redo entries",
                self.commands.len() - self.end_index
            );
            self.commands.truncate(self.end_index);
        }
        log::debug!("Executed '{}' at {}", cmd.name(), self.end_index);
        self.commands.push(cmd);
        self.end_index += 1;
        self.enforce_limit();

        Ok(created)
    }

    /// Revoke the last applied command.
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to undo.
    pub fn undo(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        assert!(self.can_undo(), "undo called with nothing to undo");

        let index = self.end_index - 1;
        self.commands[index].revoke(core)?;
        self.end_index = index;

        log::debug!("Undid '{}', cursor {}", self.commands[index].name(), self.end_index);
        Ok(())
    }

    /// Execute the first undone command again.
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to redo.
    pub fn redo(&mut self, core: &mut dyn EngineCore) -> CommandResult<()> {
        assert!(self.can_redo(), "redo called with nothing to redo");

        let index = self.end_index;
        self.commands[index].execute(core)?;
        self.end_index = index + 1;

        log::debug!("Redid '{}', cursor {}", self.commands[index].name(), self.end_index);
        Ok(())
    }

    /// Forget every command. Used when the document changes.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.end_index = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.end_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.end_index < self.commands.len()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of applied commands.
    pub fn cursor(&self) -> usize {
        self.end_index
    }

    /// Name of the command `undo` would revoke.
    pub fn undo_name(&self) -> Option<&'static str> {
        self.end_index
            .checked_sub(1)
            .and_then(|i| self.command_name(i))
    }

    /// Name of the command `redo` would execute.
    pub fn redo_name(&self) -> Option<&'static str> {
        self.command_name(self.end_index)
    }

    pub fn command_name(&self, index: usize) -> Option<&'static str> {
        self.commands.get(index).map(EditorCommand::name)
    }

    pub fn get(&self, index: usize) -> Option<&EditorCommand> {
        self.commands.get(index)
    }

    /// All recorded commands, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        self.commands
            .iter()
            .enumerate()
            .map(move |(i, cmd)| HistoryEntry {
                name: cmd.name(),
                applied: i < self.end_index,
            })
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.commands.len() <= limit {
            return;
        }

        // Drop the oldest applied entries first, then the newest undone ones
        let excess = self.commands.len() - limit;
        let applied = excess.min(self.end_index);
        log::warn!("History limit {} reached, dropping {} entries", limit, excess);
        self.commands.drain(..applied);
        self.end_index -= applied;
        self.commands.truncate(limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{EntityCommand, SceneCommand};
    use kge_core::{EntityCore, EntityId, MemoryCore, SceneCore};

    fn rename(name: &str) -> SceneCommand {
        SceneCommand::set_name(name)
    }

    #[test]
    fn test_history_basic() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::new();

        assert!(!history.can_undo());
        assert!(!history.can_redo());

        history.execute(rename("A"), &mut core).unwrap();
        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_name(), Some("Set scene name"));
        assert_eq!(history.redo_name(), None);

        history.undo(&mut core).unwrap();
        assert!(!history.can_undo());
        assert!(history.can_redo());
        assert_eq!(core.scene_name().unwrap(), "");

        history.redo(&mut core).unwrap();
        assert_eq!(core.scene_name().unwrap(), "A");
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_new_command_discards_redo_tail() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::new();

        for name in ["A", "B", "C"] {
            history.execute(rename(name), &mut core).unwrap();
        }
        history.undo(&mut core).unwrap();
        history.undo(&mut core).unwrap();
        history.execute(rename("D"), &mut core).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 2);
        assert!(!history.can_redo());

        history.undo(&mut core).unwrap();
        assert_eq!(core.scene_name().unwrap(), "A");
    }

    #[test]
    fn test_failed_execute_keeps_history() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::new();

        history.execute(rename("A"), &mut core).unwrap();
        history.execute(rename("B"), &mut core).unwrap();
        history.undo(&mut core).unwrap();

        let result = history.execute(EntityCommand::set_name(EntityId(42), "Ghost"), &mut core);
        assert!(result.is_err());

        // The redo tail survives a rejected command
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.redo_name(), Some("Set scene name"));
    }

    #[test]
    fn test_failed_undo_keeps_cursor() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::new();

        let id = core.add_camera("Camera0").unwrap();
        history.execute(EntityCommand::set_name(id, "Main"), &mut core).unwrap();

        // Entity removed behind the history's back
        core.remove_entity(id).unwrap();

        assert!(history.undo(&mut core).is_err());
        assert_eq!(history.cursor(), 1);
        assert!(history.can_undo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::with_limit(Some(2));

        for name in ["A", "B", "C"] {
            history.execute(rename(name), &mut core).unwrap();
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 2);

        history.undo(&mut core).unwrap();
        history.undo(&mut core).unwrap();
        assert!(!history.can_undo());
        assert_eq!(core.scene_name().unwrap(), "A");
    }

    #[test]
    fn test_lowering_limit_keeps_cursor_in_range() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::new();

        for name in ["A", "B", "C", "D"] {
            history.execute(rename(name), &mut core).unwrap();
        }
        history.undo(&mut core).unwrap();
        history.undo(&mut core).unwrap();
        history.undo(&mut core).unwrap();

        history.set_limit(Some(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.redo_name(), Some("Set scene name"));
    }

    #[test]
    fn test_entries() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::new();

        history.execute(rename("A"), &mut core).unwrap();
        history.execute(EntityCommand::add_camera("Camera0"), &mut core).unwrap();
        history.undo(&mut core).unwrap();

        let entries: Vec<_> = history.entries().collect();
        assert_eq!(
            entries,
            vec![
                HistoryEntry { name: "Set scene name", applied: true },
                HistoryEntry { name: "Add camera", applied: false },
            ]
        );
        assert_eq!(history.command_name(1), Some("Add camera"));
        assert_eq!(history.command_name(2), None);
    }

    #[test]
    #[should_panic(expected = "nothing to undo")]
    fn test_undo_on_empty_panics() {
        let mut core = MemoryCore::new();
        CommandHistory::new().undo(&mut core).ok();
    }

    #[test]
    #[should_panic(expected = "nothing to redo")]
    fn test_redo_at_end_panics() {
        let mut core = MemoryCore::new();
        let mut history = CommandHistory::new();
        history.execute(rename("A"), &mut core).unwrap();
        history.redo(&mut core).ok();
    }
}
