//! Line-delimited JSON mode for the `serve` subcommand
//!
//! Each input line is a `RenderRequest`. Every non-blank line gets exactly one
//! `RenderResponse` line back, in request order. A line that does not parse
//! is answered with a failure response instead of ending the session.

use anyhow::Result;
use cmf_config::RenderConfig;
use cmf_ipc::{RenderRequest, RenderResponse};
use cmf_render::MaterialTextureRenderer;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::batch::{response_for, timestamp_ms};
use crate::cli::CanvasArgs;
use crate::config::resolve_render_config;

/// Answer requests from `input` until it closes, returns the number answered
pub async fn answer_requests<R, W>(
    renderer: &MaterialTextureRenderer,
    input: R,
    mut output: W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut answered = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match RenderRequest::from_json(line) {
            Ok(request) => {
                debug!("serve: request {:?}", request);
                let result = renderer
                    .render_async(request.material.clone(), request.seed)
                    .await;
                if let Err(e) = &result {
                    warn!("Render of {:?} failed: {}", request.material, e);
                }
                response_for(request.material.as_deref(), &result, timestamp_ms())
            }
            Err(e) => {
                warn!("Rejecting malformed request: {}", e);
                RenderResponse::failure(None, e)
            }
        };

        let mut json = response.to_json()?;
        json.push('\n');
        output.write_all(json.as_bytes()).await?;
        output.flush().await?;
        answered += 1;
    }

    Ok(answered)
}

/// Entry point for `cmf-swap serve`
pub async fn run(canvas: CanvasArgs) -> Result<()> {
    let config = resolve_render_config(RenderConfig::from_env(), &canvas);
    let renderer = MaterialTextureRenderer::new(config);
    info!(
        "Serving render requests on stdin at {}x{}, quality {}",
        renderer.config().width,
        renderer.config().height,
        renderer.config().jpeg_quality
    );

    let input = BufReader::new(tokio::io::stdin());
    let answered = answer_requests(&renderer, input, tokio::io::stdout()).await?;
    info!("Input closed after {} request(s)", answered);
    Ok(())
}
