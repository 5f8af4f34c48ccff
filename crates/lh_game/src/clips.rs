//! The animation clip table: static mapping from `(kind, facing, state)` to
//! an ordered sequence of frame handles, plus a per-kind frame interval.
//!
//! Tables are loaded once at startup from JSON definition files and never
//! mutated afterwards. Validation is exhaustive at load time: every state a
//! kind can reach must resolve to a non-empty clip for both facings. A key
//! that is missing after validation is a programmer error, so the runtime
//! accessors panic instead of returning an Option.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Cat,
}

impl EntityKind {
    /// States reachable by this kind. Clip files must cover all of them.
    pub fn states(self) -> &'static [&'static str] {
        match self {
            Self::Player => &["idle", "walk"],
            Self::Cat => &["idle", "look", "wake", "walk"],
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Cat => "cat",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "player" => Some(Self::Player),
            "cat" => Some(Self::Cat),
            _ => None,
        }
    }

    /// Minimum frame count per state. The cat's look clip arms its idle
    /// fallback two frames before wrapping, so a single frame never finishes.
    fn min_frames(self, state: &str) -> usize {
        match (self, state) {
            (Self::Cat, "look") => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    const BOTH: [Facing; 2] = [Facing::Left, Facing::Right];
}

/// A non-empty ordered sequence of frame handles.
#[derive(Debug, Clone)]
pub struct Clip {
    pub frames: Vec<String>,
}

impl Clip {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ClipTable {
    clips: HashMap<(EntityKind, Facing, String), Clip>,
    intervals: HashMap<EntityKind, f64>,
}

impl ClipTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one kind's clip definition file and fold it into the table.
    pub fn load_file(&mut self, path: &Path) -> Result<(), String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read clip file {}: {e}", path.display()))?;
        let json: ClipFileJson = serde_json::from_str(&raw)
            .map_err(|e| format!("Failed to parse clip file {}: {e}", path.display()))?;
        validate_clip_json(&json)?;

        let kind = EntityKind::from_label(&json.kind)
            .ok_or_else(|| format!("Clip validation failed: unknown kind '{}'", json.kind))?;
        self.set_frame_interval(kind, json.frame_interval_ticks);
        for (name, frames) in json.clips {
            let (state, facing) = split_clip_name(&name)?;
            if !kind.states().contains(&state) {
                return Err(format!(
                    "Clip validation failed: '{}' is not a {} state",
                    state,
                    kind.label()
                ));
            }
            self.insert_clip(kind, facing, state, frames);
        }
        self.verify_kind_complete(kind)?;
        Ok(())
    }

    pub fn insert_clip(
        &mut self,
        kind: EntityKind,
        facing: Facing,
        state: &str,
        frames: Vec<String>,
    ) {
        self.clips
            .insert((kind, facing, state.to_string()), Clip { frames });
    }

    pub fn set_frame_interval(&mut self, kind: EntityKind, ticks: f64) {
        self.intervals.insert(kind, ticks);
    }

    /// The clip for a reachable `(kind, facing, state)` key. Panics on a key
    /// the loader should have rejected -- missing clips are configuration
    /// errors, not runtime conditions.
    pub fn clip(&self, kind: EntityKind, facing: Facing, state: &str) -> &Clip {
        self.clips
            .get(&(kind, facing, state.to_string()))
            .unwrap_or_else(|| {
                panic!(
                    "no clip registered for {} {} '{}'",
                    kind.label(),
                    facing.suffix(),
                    state
                )
            })
    }

    /// Ticks between animation-cursor advances for this kind.
    pub fn frame_interval(&self, kind: EntityKind) -> f64 {
        *self
            .intervals
            .get(&kind)
            .unwrap_or_else(|| panic!("no frame interval registered for {}", kind.label()))
    }

    fn verify_kind_complete(&self, kind: EntityKind) -> Result<(), String> {
        for state in kind.states() {
            for facing in Facing::BOTH {
                let key = (kind, facing, state.to_string());
                match self.clips.get(&key) {
                    None => {
                        return Err(format!(
                            "Clip validation failed: {} is missing clip '{}_{}'",
                            kind.label(),
                            state,
                            facing.suffix()
                        ))
                    }
                    Some(clip) if clip.is_empty() => {
                        return Err(format!(
                            "Clip validation failed: {} clip '{}_{}' has no frames",
                            kind.label(),
                            state,
                            facing.suffix()
                        ))
                    }
                    Some(clip) if clip.len() < kind.min_frames(state) => {
                        return Err(format!(
                            "Clip validation failed: {} clip '{}_{}' needs at least {} frames, got {}",
                            kind.label(),
                            state,
                            facing.suffix(),
                            kind.min_frames(state),
                            clip.len()
                        ))
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

// --- JSON deserialization types (private) ---

#[derive(Debug, Deserialize)]
struct ClipFileJson {
    version: String,
    kind: String,
    frame_interval_ticks: f64,
    clips: HashMap<String, Vec<String>>,
}

fn validate_clip_json(json: &ClipFileJson) -> Result<(), String> {
    if json.version != "0.1" {
        return Err(format!(
            "Clip validation failed: unsupported version '{}'",
            json.version
        ));
    }
    if !(json.frame_interval_ticks > 0.0) {
        return Err(format!(
            "Clip validation failed: frame_interval_ticks must be positive, got {}",
            json.frame_interval_ticks
        ));
    }
    for (name, frames) in &json.clips {
        if frames.is_empty() {
            return Err(format!(
                "Clip validation failed: clip '{}' has no frames",
                name
            ));
        }
        for (i, frame) in frames.iter().enumerate() {
            if frame.is_empty() {
                return Err(format!(
                    "Clip validation failed: clip '{}' frame {} is empty",
                    name, i
                ));
            }
        }
    }
    Ok(())
}

/// Clip names are `<state>_<facing>`, e.g. `idle_left` or `walk_right`.
fn split_clip_name(name: &str) -> Result<(&str, Facing), String> {
    let (state, facing) = name
        .rsplit_once('_')
        .ok_or_else(|| format!("Clip validation failed: malformed clip name '{}'", name))?;
    let facing = match facing {
        "left" => Facing::Left,
        "right" => Facing::Right,
        _ => {
            return Err(format!(
                "Clip validation failed: clip name '{}' must end in _left or _right",
                name
            ))
        }
    };
    Ok((state, facing))
}
