use rayon::prelude::*;

use crate::{
    captions::model::CaptionOverlay,
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{CaptionError, CaptionResult},
    },
    render::{
        engine::{CaptionFrame, CaptionRenderer},
        settings::RenderSettings,
    },
};

/// Render a range of frames (inclusive start, exclusive end) sequentially.
///
/// Frames with no active caption come back as `None`.
pub fn render_frames(
    overlay: &CaptionOverlay,
    range: FrameRange,
    settings: &RenderSettings,
) -> CaptionResult<Vec<Option<CaptionFrame>>> {
    render_frames_with_stats(overlay, range, settings, &RenderThreading::default())
        .map(|(frames, _)| frames)
}

#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStats {
    pub frames_total: u64,
    pub frames_with_caption: u64,
    pub frames_empty: u64,
}

impl RenderStats {
    fn record(&mut self, frame: &Option<CaptionFrame>) {
        self.frames_total += 1;
        if frame.is_some() {
            self.frames_with_caption += 1;
        } else {
            self.frames_empty += 1;
        }
    }
}

/// Render a range of frames, optionally fanning chunks out over a rayon pool.
///
/// Output order always follows frame order. With seeded jitter each frame draws from its
/// own stream, so parallel and sequential runs agree exactly.
#[tracing::instrument(skip(overlay, settings, threading), fields(start = range.start.0, end = range.end.0))]
pub fn render_frames_with_stats(
    overlay: &CaptionOverlay,
    range: FrameRange,
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> CaptionResult<(Vec<Option<CaptionFrame>>, RenderStats)> {
    if range.is_empty() {
        return Err(CaptionError::validation("render range must be non-empty"));
    }
    settings.validate()?;

    let len = range.len_frames();
    let mut out = Vec::with_capacity(len.min(4096) as usize);
    let mut stats = RenderStats::default();

    if !threading.parallel {
        for f in range.start.0..range.end.0 {
            let frame = CaptionRenderer::render_frame(overlay, FrameIndex(f), settings)?;
            stats.record(&frame);
            out.push(frame);
        }
        return Ok((out, stats));
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| CaptionError::evaluation(format!("invalid chunk range: {e}")))?;
        tracing::debug!(start = chunk.start.0, end = chunk.end.0, "rendering chunk");

        for frame in render_chunk_parallel(overlay, chunk, settings, &pool) {
            let frame = frame?;
            stats.record(&frame);
            out.push(frame);
        }
        chunk_start = chunk_end;
    }

    Ok((out, stats))
}

fn render_chunk_parallel(
    overlay: &CaptionOverlay,
    range: FrameRange,
    settings: &RenderSettings,
    pool: &rayon::ThreadPool,
) -> Vec<CaptionResult<Option<CaptionFrame>>> {
    let frames: Vec<u64> = (range.start.0..range.end.0).collect();
    pool.install(|| {
        frames
            .par_iter()
            .map(|&f| CaptionRenderer::render_frame(overlay, FrameIndex(f), settings))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> CaptionResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(CaptionError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CaptionError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
