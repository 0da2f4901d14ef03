use rayon::prelude::*;

use crate::foundation::core::{Rgb, Vec3};
use crate::foundation::error::{GradFieldError, GradFieldResult};
use crate::material::snapshot::KernelSnapshot;

/// Threading options for batch shading.
#[derive(Clone, Debug)]
pub struct ShadeThreading {
    /// Evaluate points on a dedicated rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Points per work item (parallel mode only). `0` is treated as `1`.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for ShadeThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 4096,
            threads: None,
        }
    }
}

/// Shade every query point against one snapshot.
///
/// Output order matches `queries`. Each point is evaluated independently, so sequential and
/// parallel modes produce identical colors.
#[tracing::instrument(
    skip(snapshot, queries, threading),
    fields(points = queries.len(), capacity = snapshot.kernel().capacity(), parallel = threading.parallel)
)]
pub fn shade_points(
    snapshot: &KernelSnapshot,
    queries: &[Vec3],
    threading: &ShadeThreading,
) -> GradFieldResult<Vec<Rgb>> {
    if !threading.parallel {
        return Ok(queries.iter().map(|&q| snapshot.evaluate(q)).collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let mut out = vec![Rgb::default(); queries.len()];
    pool.install(|| {
        out.par_chunks_mut(chunk_size)
            .zip(queries.par_chunks(chunk_size))
            .for_each(|(dst, src)| {
                for (d, &q) in dst.iter_mut().zip(src) {
                    *d = snapshot.evaluate(q);
                }
            });
    });
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> GradFieldResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GradFieldError::validation(
            "shade threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        GradFieldError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
