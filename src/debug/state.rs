//! Debug domain: debug state resource and trace recording.

use bevy::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::movement::{Body, MovementState};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the player info overlay is visible
    pub show_info: bool,
    /// Whether collider outlines are drawn
    pub show_colliders: bool,
    /// Active trace recording, if any
    pub recording: Option<TraceRecorder>,
    /// Number of traces written this session, used to name the next file
    pub traces_written: u32,
}

/// One recorded tick of player state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceSample {
    pub frame: u64,
    pub dt: f32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_floor: bool,
    pub jumping: bool,
    pub dashing: bool,
    pub hugging_wall: bool,
}

#[derive(Debug, Default)]
pub struct TraceRecorder {
    samples: Vec<TraceSample>,
}

impl TraceRecorder {
    pub fn record(&mut self, dt: f32, body: &Body, state: &MovementState) {
        self.samples.push(TraceSample {
            frame: self.samples.len() as u64,
            dt,
            x: body.position.x,
            y: body.position.y,
            vx: body.velocity.x,
            vy: body.velocity.y,
            on_floor: state.on_floor,
            jumping: state.jumping,
            dashing: state.dashing,
            hugging_wall: state.hugging_wall,
        });
    }

    pub fn samples(&self) -> &[TraceSample] {
        &self.samples
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.samples)
    }

    /// Write the trace as `trace_<index>.json` under `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path, index: u32) -> std::io::Result<PathBuf> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("trace_{}.json", index));
        fs::write(&path, json)?;
        Ok(path)
    }
}
