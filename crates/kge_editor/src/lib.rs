//! KGE Editor Command Layer
//!
//! The undo/redo machinery shared by the KGE editor tools (scene editor,
//! material editor and model viewer).
//!
//! ## Architecture
//!
//! ```text
//! UI edit → EditorCommand → CommandHistory → EngineCore
//! ```
//!
//! Every mutation goes through a command so it can be undone. The core is
//! passed into each call rather than held by the commands, so any
//! [`EngineCore`](kge_core::EngineCore) implementation can be driven,
//! including the in-memory [`MemoryCore`](kge_core::MemoryCore).

pub mod commands;
pub mod history;
pub mod preferences;
pub mod session;

pub use commands::{
    CameraCommand, CommandCode, CommandError, CommandResult, Created, Edit, EditorCommand,
    EntityCommand, LightCommand, MaterialCommand, SceneCommand, ViewerCommand,
};
pub use history::{CommandHistory, HistoryEntry};
pub use preferences::{DisplayPreferences, EditorPreferences, PreferencesError, ViewerPreferences};
pub use session::{EditorSession, HistoryState, RecentFiles};
