//! Recorded pointer scripts and headless replay.
//!
//! A script is a JSON document describing the surface's laid-out size plus
//! an ordered list of the same events the host UI would deliver live. The
//! replay harness feeds them through a [`DoodlePad`] one at a time, in
//! delivery order, exactly as the interactive path does.

use crate::config::{ColorSpec, Config};
use crate::input::{PointerEvent, Tool};
use crate::pad::DoodlePad;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CURRENT_VERSION: u32 = 1;

/// One scripted action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Pointer-down (mouse-down / touch-start)
    PointerDown { event: PointerEvent },
    /// Pointer-move (mouse-move / touch-move)
    PointerMove { event: PointerEvent },
    /// Pointer-up / touch-end
    PointerUp,
    /// Pointer-leave / pointer-cancel (terminates like pointer-up)
    PointerLeave,
    /// Select the active tool
    SetTool { tool: Tool },
    /// Select the active pen color (palette name or RGB)
    SetColor { color: ColorSpec },
    /// Repaint the surface with the background fill
    Clear,
    /// Layout change: reallocate the buffer (discards prior strokes)
    Resize {
        width: f64,
        height: f64,
        #[serde(default)]
        scale: Option<f64>,
    },
}

/// A recorded drawing session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Script {
    /// Format version; only version 1 is understood
    #[serde(default = "default_version")]
    pub version: u32,
    /// Initial logical surface width
    pub width: f64,
    /// Initial logical surface height
    pub height: f64,
    /// Device pixel ratio; falls back to the configured default when absent
    #[serde(default)]
    pub scale: Option<f64>,
    /// Events in delivery order
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

impl Script {
    /// Parses a script from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let script: Script = serde_json::from_str(raw).context("Failed to parse event script")?;
        if script.version != CURRENT_VERSION {
            bail!(
                "Unsupported script version {} (expected {})",
                script.version,
                CURRENT_VERSION
            );
        }
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid script file {}", path.display()))
    }
}

/// Replays a script against a freshly allocated pad.
///
/// Returns the pad with all events applied so the caller can export or
/// inspect the resulting pixels.
pub fn replay(script: &Script, config: &Config) -> Result<DoodlePad> {
    let scale = script.scale.unwrap_or(config.surface.scale);
    let mut pad = DoodlePad::new(script.width, script.height, scale, config)
        .context("Failed to allocate drawing surface")?;

    info!(
        "Replaying {} events on a {:.0}x{:.0} surface @ {:.2}x",
        script.events.len(),
        script.width,
        script.height,
        scale
    );

    for event in &script.events {
        debug!("applying {event:?}");
        match event {
            ScriptEvent::PointerDown { event } => pad.pointer_down(event),
            ScriptEvent::PointerMove { event } => pad.pointer_move(event),
            ScriptEvent::PointerUp | ScriptEvent::PointerLeave => pad.pointer_up(),
            ScriptEvent::SetTool { tool } => pad.set_tool(*tool),
            ScriptEvent::SetColor { color } => pad.set_color(color.to_color()),
            ScriptEvent::Clear => pad.clear(),
            ScriptEvent::Resize {
                width,
                height,
                scale,
            } => pad.resize(*width, *height, scale.unwrap_or(pad_scale(&pad))),
        }
    }

    Ok(pad)
}

fn pad_scale(pad: &DoodlePad) -> f64 {
    pad.surface().map(|s| s.scale()).unwrap_or(1.0)
}
