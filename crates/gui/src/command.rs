//! JSON command protocol for scripted drawing sessions.
//!
//! Every command maps onto one [`TestHarness`] call.

use serde::{Deserialize, Serialize};
use shared::Point2D;

use crate::harness::TestHarness;
use crate::state::Transition;

fn default_max_frames() -> usize {
    10_000
}

/// A command the agent can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum AgentCommand {
    /// Primary click at surface coordinates
    Click { x: f64, y: f64 },
    /// Pointer moved to surface coordinates
    Move { x: f64, y: f64 },
    /// Secondary action: drop the segment being drawn
    Cancel,
    /// Full two-click gesture
    Draw { from: Point2D, to: Point2D },
    /// Start the collapse animation.
    Collapse,
    /// Run due animation frames.
    Tick { frames: usize },
    /// Collapse to empty, bounded by `max_frames`.
    RunCollapse {
        #[serde(default = "default_max_frames")]
        max_frames: usize,
    },
    /// Remove every segment.
    Clear,
    /// Inspect the drawing.
    Inspect,
    /// Export the drawing as JSON.
    Export,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn transition_name(tr: &Transition) -> &'static str {
    match tr {
        Transition::None => "none",
        Transition::Started(_) => "started",
        Transition::PreviewMoved(_) => "preview_moved",
        Transition::Committed(_) => "committed",
        Transition::Cancelled => "cancelled",
    }
}

fn transition_response(tr: Transition) -> CommandResponse {
    CommandResponse::ok_with_data(serde_json::json!({ "transition": transition_name(&tr) }))
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: AgentCommand) -> CommandResponse {
    match cmd {
        AgentCommand::Click { x, y } => transition_response(harness.click(x, y)),

        AgentCommand::Move { x, y } => transition_response(harness.move_to(x, y)),

        AgentCommand::Cancel => transition_response(harness.cancel()),

        AgentCommand::Draw { from, to } => {
            if harness.board.is_collapsing() {
                return CommandResponse::err("Cannot draw while collapsing");
            }
            match harness.draw(from, to) {
                Transition::Committed(_) => CommandResponse::ok_with_data(serde_json::json!({
                    "index": harness.segment_count() - 1,
                })),
                // Жест уже был начат: первый клик его завершил
                other => CommandResponse::err(format!(
                    "Draw ended in '{}', a gesture was already in progress",
                    transition_name(&other)
                )),
            }
        }

        AgentCommand::Collapse => {
            let started = harness.collapse();
            CommandResponse::ok_with_data(serde_json::json!({ "started": started }))
        }

        AgentCommand::Tick { frames } => {
            let ran = harness.tick(frames);
            CommandResponse::ok_with_data(serde_json::json!({
                "frames": ran,
                "collapsing": harness.board.is_collapsing(),
                "segment_count": harness.segment_count(),
            }))
        }

        AgentCommand::RunCollapse { max_frames } => match harness.run_collapse(max_frames) {
            Some(frames) => CommandResponse::ok_with_data(serde_json::json!({ "frames": frames })),
            None => CommandResponse::err(format!(
                "Collapse still running after {max_frames} frames"
            )),
        },

        AgentCommand::Clear => {
            if harness.clear() {
                CommandResponse::ok()
            } else {
                CommandResponse::err("Cannot clear while collapsing")
            }
        }

        AgentCommand::Inspect => {
            let snapshot = harness.snapshot();
            CommandResponse::ok_with_data(serde_json::json!({
                "segment_count": snapshot.segments.len(),
                "intersection_count": snapshot.intersections.len(),
                "drawing": snapshot.preview.is_some(),
                "collapsing": snapshot.collapsing,
                "collapse_frames": harness.board.collapse_frames(),
                "segments": snapshot.segments,
                "intersections": snapshot.intersections,
            }))
        }

        AgentCommand::Export => {
            let json = harness.export_json();
            CommandResponse::ok_with_data(serde_json::json!({ "drawing_json": json }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: AgentCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<AgentCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
