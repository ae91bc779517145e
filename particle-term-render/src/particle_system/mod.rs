//! Terminal-to-particle compiler.
//!
//! `ParticleSystem` turns a grid of styled terminal cells into a dense
//! structure-of-arrays particle store. Each frame it diffs per-cell
//! signatures, rasterizes only the changed cells into their fixed slot runs,
//! and reports the contiguous dirty range the GPU copy needs to upload.
//!
//! The implementation is split across several files:
//! - `buffers`: particle arrays and dirty-range tracking
//! - `signature`: cell signatures, selection and link overlays
//! - `rasterizer`: bitmap and vector glyph painting
//! - `layout`: grid-to-particle mapping and full rebuilds
//! - `settings`: tunables and setters, all funnelled through `invalidate`
//! - `update`: the per-frame compile step
//! - `physics`: GPU uniforms, shockwave and dispatch sizing
//! - `quality`: adaptive glow against a target frame rate

pub mod buffers;
pub mod color;
pub mod jitter;
pub mod layout;
pub mod physics;
pub mod quality;
pub mod rasterizer;
pub mod settings;
pub mod signature;
pub mod update;

pub use buffers::{DirtyRange, HIDDEN_TARGET_X, ParticleBuffers};
pub use layout::{GridLayout, particles_per_cell};
pub use physics::{PhysicsUniforms, RenderUniforms, Shockwave, WORKGROUP_SIZE, dispatch_size};
pub use settings::ParticleSettings;
pub use signature::{CellOverlay, LinkSpan, Selection, cell_signature};
pub use update::{FrameReport, PendingUpload};

use particle_term_config::Config;
use particle_term_fonts::GlyphSource;
use rand::SeedableRng;
use rand::rngs::StdRng;

use jitter::JitterTable;

/// Construction parameters for [`ParticleSystem`].
#[derive(Debug, Clone)]
pub struct ParticleSystemConfig {
    /// Fixed particle capacity; totals are clamped to it.
    pub max_particles: usize,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    pub font_id: u32,
    pub settings: ParticleSettings,
    /// Seed for the jitter table and burst angles; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ParticleSystemConfig {
    fn default() -> Self {
        Self {
            max_particles: particle_term_config::defaults::max_particles(),
            width: 800.0,
            height: 450.0,
            font_id: particle_term_config::defaults::font_id(),
            settings: ParticleSettings::default(),
            seed: None,
        }
    }
}

impl ParticleSystemConfig {
    /// Parameters for a viewport of `width × height` pixels from user config.
    pub fn from_config(config: &Config, width: f32, height: f32) -> Self {
        Self {
            max_particles: config.max_particles,
            width,
            height,
            font_id: config.font_id,
            settings: ParticleSettings::from_config(config),
            seed: None,
        }
    }
}

/// Owns the particle store and compiles terminal frames into it.
pub struct ParticleSystem {
    pub(crate) settings: ParticleSettings,
    pub(crate) glyph_source: GlyphSource,
    pub(crate) buffers: ParticleBuffers,
    pub(crate) layout: GridLayout,
    pub(crate) capacity: usize,
    /// Viewport size in pixels.
    pub(crate) viewport: [f32; 2],

    // Change detection
    pub(crate) signatures: Vec<u32>,
    pub(crate) prev_chars: Vec<u32>,

    // Overlays
    pub(crate) selection: Option<Selection>,
    pub(crate) link: Option<LinkSpan>,
    pub(crate) cursor_blink_visible: bool,

    pub(crate) jitter: JitterTable,
    pub(crate) rng: StdRng,

    // Upload bookkeeping
    pub(crate) dirty: DirtyRange,
    pub(crate) upload_all: bool,

    // Animation clock
    pub(crate) elapsed: f32,
    pub(crate) shockwave: Shockwave,
}

impl ParticleSystem {
    pub fn new(config: ParticleSystemConfig) -> Self {
        let ParticleSystemConfig {
            max_particles,
            width,
            height,
            font_id,
            settings,
            seed,
        } = config;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let jitter = JitterTable::new(&mut rng);
        let glyph_source = GlyphSource::from_id(font_id);

        log::info!(
            "Particle system: capacity={} font={} density={}",
            max_particles,
            glyph_source.name(),
            settings.density
        );

        Self {
            settings,
            glyph_source,
            buffers: ParticleBuffers::default(),
            layout: GridLayout::default(),
            capacity: max_particles,
            viewport: [width.max(1.0), height.max(1.0)],
            signatures: Vec::new(),
            prev_chars: Vec::new(),
            selection: None,
            link: None,
            cursor_blink_visible: true,
            jitter,
            rng,
            dirty: DirtyRange::default(),
            upload_all: false,
            elapsed: 0.0,
            shockwave: Shockwave::default(),
        }
    }

    // ========== Read access ==========

    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }

    /// Particles currently in use (what the GPU steps and draws).
    pub fn particle_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn glyph_source(&self) -> &GlyphSource {
        &self.glyph_source
    }

    pub fn viewport(&self) -> [f32; 2] {
        self.viewport
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn shockwave(&self) -> Shockwave {
        self.shockwave
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn link(&self) -> Option<LinkSpan> {
        self.link
    }

    /// Cached signatures, one per cell in row-major order.
    pub fn signatures(&self) -> &[u32] {
        &self.signatures
    }
}
