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
use crate::row_kernels::{ARGB_TO_UV422, ARGB_TO_Y, YUV422_TO_UYVY, YUV422_TO_YUY2};
use crate::scratch::ScratchRows;
use crate::yuv_error::log_rejected;
use crate::yuv_support::{PixelFormat, Yuy2Description};
use crate::YuvError;

fn argb_to_yuy2_impl<const TARGET: u8>(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    let description: Yuy2Description = TARGET.into();
    let target = match description {
        Yuy2Description::YUYV => PixelFormat::Yuy2,
        Yuy2Description::UYVY => PixelFormat::Uyvy,
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
    let dst_plane = PlaneMut::new(
        dst,
        dst_stride as usize,
        target,
        0,
        &geometry,
        geometry.flip_destination(target),
    )?;
    convert_yuy2_rows::<TARGET>(src, dst_plane, &geometry, DispatchPolicy::current());
    Ok(())
}

pub(crate) fn convert_yuy2_rows<const TARGET: u8>(
    src: PlaneRef,
    mut dst_plane: PlaneMut,
    geometry: &ImageGeometry,
    policy: DispatchPolicy,
) {
    let description: Yuy2Description = TARGET.into();
    let (target, packer) = match description {
        Yuy2Description::YUYV => (PixelFormat::Yuy2, &YUV422_TO_YUY2),
        Yuy2Description::UYVY => (PixelFormat::Uyvy, &YUV422_TO_UYVY),
    };
    let features = cpu_features();
    let width = geometry.width;
    let chroma_width = width.div_ceil(2);

    let chroma_kernel = ARGB_TO_UV422.resolve(policy, features, width, &[src.alignment()]);
    let luma_kernel = ARGB_TO_Y.resolve(
        policy,
        features,
        width,
        &[src.alignment(), PlaneAlignment::SCRATCH],
    );
    let pack_kernel = packer.resolve(
        policy,
        features,
        width,
        &[PlaneAlignment::SCRATCH, dst_plane.alignment()],
    );
    log::trace!(
        "{:?} {}x{}: {}: {:?}, {}: {:?}, {}: {:?}",
        target,
        width,
        geometry.height,
        ARGB_TO_UV422.name,
        chroma_kernel,
        ARGB_TO_Y.name,
        luma_kernel,
        packer.name,
        pack_kernel
    );

    let mut scratch = ScratchRows::new();
    let (y_row, u_row, v_row) = scratch.rows(width, chroma_width);

    for y in 0..geometry.height {
        let src_row = src.row(y);
        (chroma_kernel.func)(src_row, u_row, v_row, width);
        (luma_kernel.func)(src_row, y_row, width);
        (pack_kernel.func)(y_row, u_row, v_row, dst_plane.row_mut(y), width);
    }
}

/// Convert ARGB image data to packed YUV 4:2:2 YUY2.
///
/// Every macro-pixel is `Y0, U, Y1, V`; an odd last pixel is written as
/// `Y, U, 0, V`. A negative height stores the destination bottom-up.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_yuy2` - Target packed image, `(width + 1) / 2 * 4` bytes per row.
/// * `dst_stride_yuy2` - Bytes per target row.
/// * `width` - Image width, at most [crate::MAX_ROW_WIDTH].
/// * `height` - Image height, negative when the destination is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero, the width exceeds the row
/// capacity or any buffer is too short. Nothing is written in that case.
///
pub fn argb_to_yuy2(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_yuy2: &mut [u8],
    dst_stride_yuy2: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_yuy2_impl::<{ Yuy2Description::YUYV as u8 }>(
        src_argb,
        src_stride_argb,
        dst_yuy2,
        dst_stride_yuy2,
        width,
        height,
    )
    .inspect_err(|e| log_rejected(PixelFormat::Yuy2, e))
}

/// Convert ARGB image data to packed YUV 4:2:2 UYVY.
///
/// Every macro-pixel is `U, Y0, V, Y1`; an odd last pixel is written as
/// `U, Y, V, 0`. A negative height stores the destination bottom-up.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_uyvy` - Target packed image, `(width + 1) / 2 * 4` bytes per row.
/// * `dst_stride_uyvy` - Bytes per target row.
/// * `width` - Image width, at most [crate::MAX_ROW_WIDTH].
/// * `height` - Image height, negative when the destination is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero, the width exceeds the row
/// capacity or any buffer is too short. Nothing is written in that case.
///
pub fn argb_to_uyvy(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_uyvy: &mut [u8],
    dst_stride_uyvy: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_yuy2_impl::<{ Yuy2Description::UYVY as u8 }>(
        src_argb,
        src_stride_argb,
        dst_uyvy,
        dst_stride_uyvy,
        width,
        height,
    )
    .inspect_err(|e| log_rejected(PixelFormat::Uyvy, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{argb_to_i422, with_reference_kernels, MAX_ROW_WIDTH};
    use rand::Rng;

    const SENTINEL: u8 = 0xC3;

    type PackedEntry = fn(&[u8], u32, &mut [u8], u32, u32, i32) -> Result<(), YuvError>;

    fn random_argb(width: usize, height: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..width * height * 4)
            .map(|_| rng.random_range(0..=255u8))
            .collect()
    }

    fn run_packed(entry: PackedEntry, src: &[u8], width: usize, height: i32) -> Vec<u8> {
        let stride = width.div_ceil(2) * 4;
        let mut dst = vec![SENTINEL; stride * height.unsigned_abs() as usize];
        entry(
            src,
            (width * 4) as u32,
            &mut dst,
            stride as u32,
            width as u32,
            height,
        )
        .unwrap();
        dst
    }

    fn planar_422(src: &[u8], width: usize, height: usize) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let chroma_width = width.div_ceil(2);
        let mut y = vec![0u8; width * height];
        let mut u = vec![0u8; chroma_width * height];
        let mut v = vec![0u8; chroma_width * height];
        argb_to_i422(
            src,
            (width * 4) as u32,
            &mut y,
            width as u32,
            &mut u,
            chroma_width as u32,
            &mut v,
            chroma_width as u32,
            width as u32,
            height as i32,
        )
        .unwrap();
        (y, u, v)
    }

    #[test]
    fn test_yuy2_layout() {
        for width in [1usize, 2, 5, 16, 31, 32, 47] {
            let height = 3;
            let src = random_argb(width, height);
            let yuy2 = run_packed(argb_to_yuy2, &src, width, height as i32);
            let uyvy = run_packed(argb_to_uyvy, &src, width, height as i32);
            let (y, u, v) = planar_422(&src, width, height);
            let chroma_width = width.div_ceil(2);
            for row in 0..height {
                for x in 0..chroma_width {
                    let m = &yuy2[(row * chroma_width + x) * 4..(row * chroma_width + x) * 4 + 4];
                    let n = &uyvy[(row * chroma_width + x) * 4..(row * chroma_width + x) * 4 + 4];
                    let y0 = y[row * width + x * 2];
                    let y1 = if x * 2 + 1 < width {
                        y[row * width + x * 2 + 1]
                    } else {
                        0
                    };
                    let (cu, cv) = (u[row * chroma_width + x], v[row * chroma_width + x]);
                    assert_eq!(m, [y0, cu, y1, cv], "YUY2 width {} x {}", width, x);
                    assert_eq!(n, [cu, y0, cv, y1], "UYVY width {} x {}", width, x);
                }
            }
        }
    }

    #[test]
    fn test_accelerated_matches_reference() {
        for entry in [argb_to_yuy2 as PackedEntry, argb_to_uyvy] {
            for width in [3usize, 15, 16, 17, 32, 33, 64, 99] {
                for height in [1i32, 4, -5] {
                    let src = random_argb(width, height.unsigned_abs() as usize);
                    let fast = run_packed(entry, &src, width, height);
                    let reference = with_reference_kernels(|| run_packed(entry, &src, width, height));
                    assert_eq!(fast, reference, "{}x{}", width, height);
                }
            }
        }
    }

    #[test]
    fn test_negative_height_mirrors_destination() {
        let (width, height) = (20usize, 6usize);
        let src = random_argb(width, height);
        let stride = width.div_ceil(2) * 4;
        let upward = run_packed(argb_to_yuy2, &src, width, -(height as i32));
        let direct = run_packed(argb_to_yuy2, &src, width, height as i32);
        let mirrored: Vec<u8> = direct.chunks_exact(stride).rev().flatten().copied().collect();
        assert_eq!(upward, mirrored);
    }

    #[test]
    fn test_row_capacity_bound() {
        for entry in [argb_to_yuy2 as PackedEntry, argb_to_uyvy] {
            for width in [MAX_ROW_WIDTH - 1, MAX_ROW_WIDTH] {
                let src = random_argb(width, 2);
                let fast = run_packed(entry, &src, width, 2);
                let reference = with_reference_kernels(|| run_packed(entry, &src, width, 2));
                assert_eq!(fast, reference, "width {}", width);
            }

            let width = MAX_ROW_WIDTH + 1;
            let stride = width.div_ceil(2) * 4;
            let src = vec![0u8; width * 4];
            let mut dst = vec![SENTINEL; stride];
            assert!(matches!(
                entry(&src, (width * 4) as u32, &mut dst, stride as u32, width as u32, 1),
                Err(YuvError::WidthExceedsRowCapacity(_))
            ));
            assert!(dst.iter().all(|&x| x == SENTINEL));
        }
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let (width, height) = (29usize, 4usize);
        let src = random_argb(width, height);
        let other = random_argb(width * 3, height);
        for entry in [argb_to_yuy2 as PackedEntry, argb_to_uyvy] {
            let first = run_packed(entry, &src, width, height as i32);
            run_packed(entry, &other, width * 3, height as i32);
            let second = run_packed(entry, &src, width, height as i32);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rejects_short_destination() {
        let src = vec![0u8; 16];
        let mut short = vec![SENTINEL; 7];
        assert!(matches!(
            argb_to_yuy2(&src, 16, &mut short, 8, 4, 1),
            Err(YuvError::DestinationMinimumSizeMismatch(_))
        ));
        assert!(short.iter().all(|&x| x == SENTINEL));
    }
}
