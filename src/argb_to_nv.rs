/*
 * Copyright (c) Radzivon Bartoshyk, 7/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::cpu_features::cpu_features;
use crate::dispatch::{DispatchPolicy, PlaneAlignment};
use crate::images::{ImageGeometry, PlaneMut, PlaneRef};
use crate::row_kernels::{ARGB_TO_UV, ARGB_TO_Y, MERGE_UV};
use crate::scratch::ScratchRows;
use crate::yuv_error::log_rejected;
use crate::yuv_support::{PixelFormat, YuvNVOrder};
use crate::YuvError;

pub(crate) fn convert_nv_rows<const UV_ORDER: u8>(
    src: PlaneRef,
    mut y_plane: PlaneMut,
    mut uv_plane: PlaneMut,
    geometry: &ImageGeometry,
    policy: DispatchPolicy,
) {
    let order: YuvNVOrder = UV_ORDER.into();
    let features = cpu_features();
    let width = geometry.width;
    let chroma_width = width.div_ceil(2);

    let luma_kernel = ARGB_TO_Y.resolve(
        policy,
        features,
        width,
        &[src.alignment(), y_plane.alignment()],
    );
    let chroma_kernel = ARGB_TO_UV.resolve(policy, features, width, &[src.alignment()]);
    let merge_kernel = MERGE_UV.resolve(
        policy,
        features,
        chroma_width,
        &[PlaneAlignment::SCRATCH, uv_plane.alignment()],
    );
    log::trace!(
        "{:?} {}x{}: {}: {:?}, {}: {:?}, {}: {:?}",
        order,
        width,
        geometry.height,
        ARGB_TO_UV.name,
        chroma_kernel,
        MERGE_UV.name,
        merge_kernel,
        ARGB_TO_Y.name,
        luma_kernel
    );

    let mut scratch = ScratchRows::new();
    let (u_row, v_row) = scratch.chroma_rows(chroma_width);

    let merge_into = |u_row: &[u8], v_row: &[u8], dst: &mut [u8]| match order {
        YuvNVOrder::UV => (merge_kernel.func)(u_row, v_row, dst, chroma_width),
        YuvNVOrder::VU => (merge_kernel.func)(v_row, u_row, dst, chroma_width),
    };

    let pairs = geometry.height / 2;
    for pair in 0..pairs {
        let row0 = src.row(pair * 2);
        let row1 = src.row(pair * 2 + 1);
        (chroma_kernel.func)(row0, row1, u_row, v_row, width);
        merge_into(u_row, v_row, uv_plane.row_mut(pair));
        (luma_kernel.func)(row0, y_plane.row_mut(pair * 2), width);
        (luma_kernel.func)(row1, y_plane.row_mut(pair * 2 + 1), width);
    }

    if geometry.height & 1 != 0 {
        let last = geometry.height - 1;
        let row = src.row(last);
        (chroma_kernel.func)(row, row, u_row, v_row, width);
        merge_into(u_row, v_row, uv_plane.row_mut(pairs));
        (luma_kernel.func)(row, y_plane.row_mut(last), width);
    }
}

#[allow(clippy::too_many_arguments)]
fn argb_to_nv_impl<const UV_ORDER: u8>(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_uv: &mut [u8],
    dst_stride_uv: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    let order: YuvNVOrder = UV_ORDER.into();
    let target = match order {
        YuvNVOrder::UV => PixelFormat::Nv12,
        YuvNVOrder::VU => PixelFormat::Nv21,
    };
    let geometry = ImageGeometry::new(width, height, target)?;
    let src = PlaneRef::new(
        src_argb,
        src_stride_argb as usize,
        PixelFormat::Argb,
        0,
        &geometry,
        geometry.flip_source(target),
    )?;
    let y_plane = PlaneMut::new(dst_y, dst_stride_y as usize, target, 0, &geometry, false)?;
    let uv_plane = PlaneMut::new(dst_uv, dst_stride_uv as usize, target, 1, &geometry, false)?;

    convert_nv_rows::<UV_ORDER>(src, y_plane, uv_plane, &geometry, DispatchPolicy::current());
    Ok(())
}

/// Convert ARGB image data to YUV NV12 bi-planar format.
///
/// Luma plane followed by one interleaved `U, V` plane at half resolution
/// in both directions.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_y` - Target luma plane.
/// * `dst_stride_y` - Bytes per luma row.
/// * `dst_uv` - Target chroma plane, `(width + 1) / 2` pairs per row.
/// * `dst_stride_uv` - Bytes per chroma row.
/// * `width` - Image width, at most [crate::MAX_ROW_WIDTH].
/// * `height` - Image height, negative when the source is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero, the width exceeds the row
/// capacity or any plane is too short. Nothing is written in that case.
///
#[allow(clippy::too_many_arguments)]
pub fn argb_to_nv12(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_uv: &mut [u8],
    dst_stride_uv: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_nv_impl::<{ YuvNVOrder::UV as u8 }>(
        src_argb,
        src_stride_argb,
        dst_y,
        dst_stride_y,
        dst_uv,
        dst_stride_uv,
        width,
        height,
    )
    .inspect_err(|e| log_rejected(PixelFormat::Nv12, e))
}

/// Convert ARGB image data to YUV NV21 bi-planar format.
///
/// Same as [argb_to_nv12] with `V, U` chroma order.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_y` - Target luma plane.
/// * `dst_stride_y` - Bytes per luma row.
/// * `dst_vu` - Target chroma plane, `(width + 1) / 2` pairs per row.
/// * `dst_stride_vu` - Bytes per chroma row.
/// * `width` - Image width, at most [crate::MAX_ROW_WIDTH].
/// * `height` - Image height, negative when the source is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero, the width exceeds the row
/// capacity or any plane is too short. Nothing is written in that case.
///
#[allow(clippy::too_many_arguments)]
pub fn argb_to_nv21(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_vu: &mut [u8],
    dst_stride_vu: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_nv_impl::<{ YuvNVOrder::VU as u8 }>(
        src_argb,
        src_stride_argb,
        dst_y,
        dst_stride_y,
        dst_vu,
        dst_stride_vu,
        width,
        height,
    )
    .inspect_err(|e| log_rejected(PixelFormat::Nv21, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_features::{CpuFeatures, CpuFlag};
    use crate::dispatch::KernelTier;
    use crate::{argb_to_i420, with_reference_kernels, MAX_ROW_WIDTH};
    use rand::Rng;

    const SENTINEL: u8 = 0x5A;

    fn random_argb(width: usize, height: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..width * height * 4)
            .map(|_| rng.random_range(0..=255u8))
            .collect()
    }

    type NvEntry =
        fn(&[u8], u32, &mut [u8], u32, &mut [u8], u32, u32, i32) -> Result<(), YuvError>;

    fn run_nv(entry: NvEntry, src: &[u8], width: usize, height: i32) -> (Vec<u8>, Vec<u8>) {
        let rows = height.unsigned_abs() as usize;
        let uv_stride = width.div_ceil(2) * 2;
        let mut y = vec![SENTINEL; width * rows];
        let mut uv = vec![SENTINEL; uv_stride * rows.div_ceil(2)];
        entry(
            src,
            (width * 4) as u32,
            &mut y,
            width as u32,
            &mut uv,
            uv_stride as u32,
            width as u32,
            height,
        )
        .unwrap();
        (y, uv)
    }

    fn run_nv12(src: &[u8], width: usize, height: i32) -> (Vec<u8>, Vec<u8>) {
        run_nv(argb_to_nv12, src, width, height)
    }

    #[test]
    fn test_nv12_matches_i420_chroma() {
        for (width, height) in [(1usize, 1usize), (2, 2), (5, 3), (16, 4), (33, 7), (64, 2)] {
            let src = random_argb(width, height);
            let (y, uv) = run_nv12(&src, width, height as i32);

            let chroma_width = width.div_ceil(2);
            let chroma_rows = height.div_ceil(2);
            let mut i420_y = vec![0u8; width * height];
            let mut u = vec![0u8; chroma_width * chroma_rows];
            let mut v = vec![0u8; chroma_width * chroma_rows];
            argb_to_i420(
                &src,
                (width * 4) as u32,
                &mut i420_y,
                width as u32,
                &mut u,
                chroma_width as u32,
                &mut v,
                chroma_width as u32,
                width as u32,
                height as i32,
            )
            .unwrap();

            assert_eq!(y, i420_y);
            for (i, pair) in uv.chunks_exact(2).enumerate() {
                assert_eq!(pair[0], u[i], "U at {} for {}x{}", i, width, height);
                assert_eq!(pair[1], v[i], "V at {} for {}x{}", i, width, height);
            }
        }
    }

    #[test]
    fn test_nv21_swaps_chroma() {
        let (width, height) = (21usize, 5usize);
        let src = random_argb(width, height);
        let (y12, uv) = run_nv12(&src, width, height as i32);
        let uv_stride = width.div_ceil(2) * 2;
        let mut y21 = vec![0u8; width * height];
        let mut vu = vec![0u8; uv.len()];
        argb_to_nv21(
            &src,
            (width * 4) as u32,
            &mut y21,
            width as u32,
            &mut vu,
            uv_stride as u32,
            width as u32,
            height as i32,
        )
        .unwrap();
        assert_eq!(y12, y21);
        for (a, b) in uv.chunks_exact(2).zip(vu.chunks_exact(2)) {
            assert_eq!(a[0], b[1]);
            assert_eq!(a[1], b[0]);
        }
    }

    #[test]
    fn test_accelerated_matches_reference() {
        for width in [3usize, 15, 16, 17, 31, 32, 33, 64, 100] {
            for height in [1i32, 2, 3, -3, 6] {
                let src = random_argb(width, height.unsigned_abs() as usize);
                let fast = run_nv12(&src, width, height);
                let reference = with_reference_kernels(|| run_nv12(&src, width, height));
                assert_eq!(fast, reference, "{}x{}", width, height);
            }
        }
    }

    #[test]
    fn test_17x3_resolves_mixed_tiers() {
        let features = CpuFeatures::none()
            .with(CpuFlag::Sse2)
            .with(CpuFlag::Ssse3)
            .with(CpuFlag::Avx2)
            .with(CpuFlag::Neon);
        let policy = DispatchPolicy::default();
        let unaligned = PlaneAlignment {
            address: 1,
            stride: 68,
        };
        let luma = ARGB_TO_Y.resolve(policy, &features, 17, &[unaligned, unaligned]);
        let chroma = ARGB_TO_UV.resolve(policy, &features, 17, &[unaligned]);
        let merge = MERGE_UV.resolve(policy, &features, 9, &[PlaneAlignment::SCRATCH, unaligned]);
        if !ARGB_TO_Y.families.is_empty() {
            assert_eq!(luma.tier, KernelTier::Any);
            assert_eq!(chroma.tier, KernelTier::Any);
        }
        assert_eq!(merge.tier, KernelTier::Reference);

        let forced = ARGB_TO_Y.resolve(
            DispatchPolicy::reference_only(),
            &features,
            17,
            &[unaligned, unaligned],
        );
        assert_eq!(forced.tier, KernelTier::Reference);

        let src = random_argb(17, 3);
        let fast = run_nv12(&src, 17, 3);
        let reference = with_reference_kernels(|| run_nv12(&src, 17, 3));
        assert_eq!(fast, reference);
        assert_eq!(fast.1.len(), 18 * 2);
    }

    #[test]
    fn test_negative_height_mirrors_source() {
        let (width, height) = (18usize, 5usize);
        let src = random_argb(width, height);
        let flipped: Vec<u8> = src.chunks_exact(width * 4).rev().flatten().copied().collect();
        assert_eq!(
            run_nv12(&src, width, -(height as i32)),
            run_nv12(&flipped, width, height as i32)
        );
    }

    #[test]
    fn test_row_capacity_bound() {
        for entry in [argb_to_nv12 as NvEntry, argb_to_nv21] {
            for width in [MAX_ROW_WIDTH - 1, MAX_ROW_WIDTH] {
                let src = random_argb(width, 3);
                let fast = run_nv(entry, &src, width, 3);
                let reference = with_reference_kernels(|| run_nv(entry, &src, width, 3));
                assert_eq!(fast, reference, "width {}", width);
            }

            let over = MAX_ROW_WIDTH + 1;
            let src = vec![0u8; over * 4 * 2];
            let mut y = vec![SENTINEL; over * 2];
            let mut uv = vec![SENTINEL; over.div_ceil(2) * 2];
            let result = entry(
                &src,
                (over * 4) as u32,
                &mut y,
                over as u32,
                &mut uv,
                (over.div_ceil(2) * 2) as u32,
                over as u32,
                2,
            );
            assert!(matches!(result, Err(YuvError::WidthExceedsRowCapacity(_))));
            assert!(y.iter().all(|&x| x == SENTINEL));
            assert!(uv.iter().all(|&x| x == SENTINEL));
        }
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let (width, height) = (37usize, 5usize);
        let src = random_argb(width, height);
        let other = random_argb(width * 2, height + 2);
        for entry in [argb_to_nv12 as NvEntry, argb_to_nv21] {
            let first = run_nv(entry, &src, width, height as i32);
            // a wider image in between leaves different data in the staging rows
            run_nv(entry, &other, width * 2, (height + 2) as i32);
            let second = run_nv(entry, &src, width, height as i32);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_short_chroma_plane_is_rejected() {
        let src = random_argb(8, 4);
        let mut y = vec![SENTINEL; 32];
        let mut uv = vec![SENTINEL; 15];
        assert!(matches!(
            argb_to_nv21(&src, 32, &mut y, 8, &mut uv, 8, 8, 4),
            Err(YuvError::ChromaPlaneMinimumSizeMismatch(_))
        ));
        assert!(y.iter().all(|&x| x == SENTINEL));
        assert!(uv.iter().all(|&x| x == SENTINEL));
    }
}
