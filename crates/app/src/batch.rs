//! Batch rendering for the `render` subcommand
//!
//! Every requested material is rendered on its own task. Results are
//! reported in argument order once all renders finish.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cmf_config::RenderConfig;
use cmf_ipc::RenderResponse;
use cmf_render::{MaterialKind, MaterialTextureRenderer, RenderError, RenderOutput};
use tracing::{error, info};

use crate::cli::RenderArgs;
use crate::config::resolve_render_config;

/// Outcome of one material in a batch
#[derive(Debug)]
pub struct BatchItem {
    /// Material id as given on the command line
    pub requested: String,
    pub result: Result<RenderOutput, RenderError>,
}

impl BatchItem {
    pub fn to_response(&self, timestamp_ms: u64) -> RenderResponse {
        response_for(Some(self.requested.as_str()), &self.result, timestamp_ms)
    }
}

/// UI response for one render; failures echo the requested id
pub fn response_for(
    requested: Option<&str>,
    result: &Result<RenderOutput, RenderError>,
    timestamp_ms: u64,
) -> RenderResponse {
    match result {
        Ok(output) => RenderResponse::ok(
            &output.bytes,
            output.mime_type,
            output.file_name(timestamp_ms),
            output.material.map(MaterialKind::id),
        ),
        Err(e) => RenderResponse::failure(requested, e),
    }
}

/// Render all materials concurrently, results in input order
pub async fn render_all(
    renderer: &MaterialTextureRenderer,
    materials: &[String],
    seed: Option<u64>,
) -> Vec<BatchItem> {
    let handles: Vec<_> = materials
        .iter()
        .map(|material| {
            let renderer = renderer.clone();
            let material = material.clone();
            tokio::spawn(async move { renderer.render_async(Some(material), seed).await })
        })
        .collect();

    let mut items = Vec::with_capacity(handles.len());
    for (handle, requested) in handles.into_iter().zip(materials) {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(RenderError::Worker(e.to_string())),
        };
        items.push(BatchItem {
            requested: requested.clone(),
            result,
        });
    }
    items
}

/// Write an output into `dir` under its download name
pub fn write_output(dir: &Path, output: &RenderOutput, timestamp_ms: u64) -> Result<PathBuf> {
    let path = dir.join(output.file_name(timestamp_ms));
    fs::write(&path, &output.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

pub fn timestamp_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Entry point for `cmf-swap render`
pub async fn run(args: RenderArgs) -> Result<()> {
    let config = resolve_render_config(RenderConfig::from_env(), &args.canvas);
    let renderer = MaterialTextureRenderer::new(config);
    info!(
        "Rendering {} preview(s) at {}x{}, quality {}",
        args.materials.len(),
        renderer.config().width,
        renderer.config().height,
        renderer.config().jpeg_quality
    );

    if !args.json {
        fs::create_dir_all(&args.out)
            .with_context(|| format!("Failed to create {}", args.out.display()))?;
    }

    let items = render_all(&renderer, &args.materials, args.seed).await;
    let base_timestamp = timestamp_ms();
    let mut failures = 0;

    for (index, item) in items.iter().enumerate() {
        // Offset keeps names distinct when a material repeats in one batch
        let timestamp = base_timestamp + index as u64;

        if args.json {
            println!("{}", item.to_response(timestamp).to_json()?);
        } else if let Ok(output) = &item.result {
            let path = write_output(&args.out, output, timestamp)?;
            info!("Wrote {} ({} bytes)", path.display(), output.len());
            println!("{}", path.display());
        }

        if let Err(e) = &item.result {
            error!("Render of {:?} failed: {}", item.requested, e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} renders failed", failures, items.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materials(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn small_renderer() -> MaterialTextureRenderer {
        MaterialTextureRenderer::new(RenderConfig::default().with_size(64))
    }

    #[tokio::test]
    async fn test_render_all_keeps_order() {
        let ids = materials(&["carbon", "plastic", "wood"]);
        let items = render_all(&small_renderer(), &ids, Some(1)).await;

        let resolved: Vec<_> = items
            .iter()
            .map(|item| item.result.as_ref().unwrap().material)
            .collect();
        assert_eq!(
            resolved,
            vec![Some(MaterialKind::Carbon), None, Some(MaterialKind::Wood)]
        );
        assert_eq!(items[1].requested, "plastic");
    }

    #[tokio::test]
    async fn test_seeded_batch_is_reproducible() {
        let ids = materials(&["marble"]);
        let first = render_all(&small_renderer(), &ids, Some(8)).await;
        let second = render_all(&small_renderer(), &ids, Some(8)).await;
        assert_eq!(
            first[0].result.as_ref().unwrap().bytes,
            second[0].result.as_ref().unwrap().bytes
        );
    }

    #[tokio::test]
    async fn test_response_for_fallback() {
        let items = render_all(&small_renderer(), &materials(&["plastic"]), Some(0)).await;
        let json = items[0].to_response(42).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["mimeType"], "image/jpeg");
        assert_eq!(value["fileName"], "cmf-design-default-42.jpg");
        assert!(value["material"].is_null());
    }

    #[test]
    fn test_failure_response_names_request() {
        let item = BatchItem {
            requested: "wood".to_string(),
            result: Err(RenderError::Worker("task panicked".to_string())),
        };
        let response = item.to_response(0);
        assert!(!response.success);
        assert_eq!(response.material.as_deref(), Some("wood"));
        assert!(response.error.unwrap().contains("task panicked"));
    }

    #[tokio::test]
    async fn test_write_output() {
        let dir = std::env::temp_dir().join(format!("cmf-swap-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let items = render_all(&small_renderer(), &materials(&["leather"]), Some(3)).await;
        let output = items[0].result.as_ref().unwrap();
        let path = write_output(&dir, output, 7).unwrap();

        assert_eq!(path.file_name().unwrap(), "cmf-design-leather-7.jpg");
        assert_eq!(fs::read(&path).unwrap(), output.bytes);
        fs::remove_dir_all(&dir).unwrap();
    }
}
