//! Render configuration resolution: environment first, then flags

use cmf_config::RenderConfig;
use tracing::debug;

use crate::cli::CanvasArgs;

/// Apply command-line overrides on top of `base`
pub fn resolve_render_config(base: RenderConfig, args: &CanvasArgs) -> RenderConfig {
    let mut config = base;
    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    if let Some(quality) = args.quality {
        config = config.with_quality(quality);
    }
    debug!("Resolved render config: {:?}", config);
    config
}
