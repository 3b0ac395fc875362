//! Material texture renderer
//!
//! Ties the pieces together for one preview:
//! - parse the material id (unknown ids fall back to a neutral gray)
//! - paint the background with the material's generator
//! - composite the product silhouette in the material's base color
//! - encode the result as JPEG
//!
//! The renderer holds only its configuration, so renders never influence
//! each other and can run concurrently.

use cmf_config::RenderConfig;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::encode::{encode_jpeg, RenderOutput};
use crate::error::RenderError;
use crate::generators::generator_for;
use crate::material::{base_color_for, MaterialKind};
use crate::silhouette::Silhouette;
use crate::surface::RasterSurface;
use crate::validation::validate_dimensions;

/// Renders material previews at a fixed size and quality
#[derive(Debug, Clone, Default)]
pub struct MaterialTextureRenderer {
    config: RenderConfig,
}

impl MaterialTextureRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a preview for a material id with thread-local randomness
    pub fn render(&self, material: Option<&str>) -> Result<RenderOutput, RenderError> {
        self.render_with_rng(material, &mut rand::thread_rng())
    }

    /// Render a preview for a material id, drawing jitter from `rng`
    ///
    /// `None`, `""` and unknown ids all produce the neutral fallback.
    pub fn render_with_rng(
        &self,
        material: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<RenderOutput, RenderError> {
        let kind = material.and_then(MaterialKind::parse);
        if kind.is_none() {
            debug!(
                "render: no preset for {:?}, using neutral fallback",
                material
            );
        }
        self.render_kind(kind, rng)
    }

    /// Render a preview for an already-parsed material
    pub fn render_kind(
        &self,
        kind: Option<MaterialKind>,
        rng: &mut dyn RngCore,
    ) -> Result<RenderOutput, RenderError> {
        let surface = self.paint(kind, rng)?;
        let output = encode_jpeg(&surface, self.config.jpeg_quality, kind)?;
        info!(
            "Rendered {} preview: {}x{}, {} bytes",
            output.material_slug(),
            output.width,
            output.height,
            output.len()
        );
        Ok(output)
    }

    /// Paint background and silhouette without encoding.
    ///
    /// The configured size is checked first, so a zero or oversized canvas
    /// is an `InvalidSurface` error rather than a panic in a generator.
    pub fn paint(
        &self,
        kind: Option<MaterialKind>,
        rng: &mut dyn RngCore,
    ) -> Result<RasterSurface, RenderError> {
        validate_dimensions(self.config.width, self.config.height)?;
        let mut surface = RasterSurface::new(self.config.width, self.config.height);

        let generator = generator_for(kind);
        generator(&mut surface, rng);

        let silhouette = Silhouette::centered(
            self.config.width,
            self.config.height,
            self.config.geometry_scale(),
        );
        silhouette.composite(&mut surface, base_color_for(kind));

        Ok(surface)
    }

    /// Render on the blocking pool. A seed makes the result reproducible.
    pub async fn render_async(
        &self,
        material: Option<String>,
        seed: Option<u64>,
    ) -> Result<RenderOutput, RenderError> {
        let renderer = self.clone();
        tokio::task::spawn_blocking(move || {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            renderer.render_with_rng(material.as_deref(), &mut rng)
        })
        .await
        .map_err(|e| RenderError::Worker(e.to_string()))?
    }
}
