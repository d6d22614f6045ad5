//! Replayable random divider layouts.
//!
//! A `ReplayToken` fixes the seed, so the same token and config always issue
//! the same command list. Commands are candidates only: the editor may reject
//! some of them (too close, degenerate), which is part of the replay.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::editor::{Command, Editor, GridCfg};
use crate::geom::{Point, Rect};
use crate::graph::GraphError;

/// Seed plus stream index; the pair selects one sample deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed ^ self.index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Random layout parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    /// Number of candidate dividers to issue.
    pub dividers: usize,
    /// Minimum candidate length as a fraction of the area side, in `[0, 1]`.
    pub min_len_frac: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            dividers: 8,
            min_len_frac: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    EmptyArea,
    MinLenFrac(f64),
    Graph(GraphError),
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArea => write!(f, "area must have positive width and height"),
            Self::MinLenFrac(v) => write!(f, "min_len_frac must lie in [0, 1], got {v}"),
            Self::Graph(e) => write!(f, "graph error: {e}"),
        }
    }
}

impl std::error::Error for SampleError {}

impl From<GraphError> for SampleError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

impl SampleCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        if !(0.0..=1.0).contains(&self.min_len_frac) {
            return Err(SampleError::MinLenFrac(self.min_len_frac));
        }
        Ok(())
    }
}

/// `cfg.dividers` random axis-aligned candidates in local offsets of `area`.
pub fn random_commands(
    area: Rect,
    cfg: &SampleCfg,
    token: ReplayToken,
) -> Result<Vec<Command>, SampleError> {
    cfg.validate()?;
    if area.is_empty() {
        return Err(SampleError::EmptyArea);
    }
    let mut rng = token.rng();
    let (w, h) = (area.width, area.height);
    let commands = (0..cfg.dividers)
        .map(|_| {
            let vertical = rng.gen_bool(0.5);
            let (side, across) = if vertical { (h, w) } else { (w, h) };
            let min_len = ((side as f64) * cfg.min_len_frac).round() as i64;
            let len = rng.gen_range(min_len.clamp(1, side)..=side);
            let start = rng.gen_range(0..=side - len);
            let offset = rng.gen_range(0..=across);
            let (a, b) = if vertical {
                (Point::new(offset, start), Point::new(offset, start + len))
            } else {
                (Point::new(start, offset), Point::new(start + len, offset))
            };
            Command::AddDivider { a, b }
        })
        .collect();
    Ok(commands)
}

/// Editor on `area` with the sampled commands applied in order.
pub fn random_editor(
    area: Rect,
    grid_cfg: GridCfg,
    cfg: &SampleCfg,
    token: ReplayToken,
) -> Result<Editor, SampleError> {
    let commands = random_commands(area, cfg, token)?;
    let mut editor = Editor::new(area, grid_cfg)?;
    for command in commands {
        editor.apply(command);
    }
    Ok(editor)
}
