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
use crate::dispatch::{DispatchPolicy, KernelCatalog};
use crate::images::{ImageGeometry, PlaneMut, PlaneRef};
use crate::row_kernels::{
    PixelRowFn, ARGB_TO_ARGB1555, ARGB_TO_ARGB4444, ARGB_TO_RAW, ARGB_TO_RGB24, ARGB_TO_RGB565,
    ARGB_TO_RGBA,
};
use crate::yuv_error::log_rejected;
use crate::yuv_support::PixelFormat;
use crate::YuvError;

#[allow(clippy::too_many_arguments)]
fn reshuffle_argb(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: i32,
    target: PixelFormat,
    catalog: &KernelCatalog<PixelRowFn>,
) -> Result<(), YuvError> {
    let geometry = ImageGeometry::new(width, height, target)?;
    let src = PlaneRef::new(
        src_argb,
        src_stride_argb as usize,
        PixelFormat::Argb,
        0,
        &geometry,
        geometry.flip_source(target),
    )?;
    let dst_plane = PlaneMut::new(dst, dst_stride as usize, target, 0, &geometry, false)?;
    convert_reshuffle_rows(src, dst_plane, &geometry, DispatchPolicy::current(), catalog);
    Ok(())
}

/// One row in, one row out reshuffle through a single kernel
pub(crate) fn convert_reshuffle_rows(
    src: PlaneRef,
    mut dst_plane: PlaneMut,
    geometry: &ImageGeometry,
    policy: DispatchPolicy,
    catalog: &KernelCatalog<PixelRowFn>,
) {
    let kernel = catalog.resolve(
        policy,
        cpu_features(),
        geometry.width,
        &[src.alignment(), dst_plane.alignment()],
    );
    log::trace!(
        "{} {}x{}: {:?}",
        catalog.name,
        geometry.width,
        geometry.height,
        kernel
    );

    for y in 0..geometry.height {
        (kernel.func)(src.row(y), dst_plane.row_mut(y), geometry.width);
    }
}

macro_rules! reshuffle_entry {
    ($(#[$meta:meta])* $name:ident, $dst:ident, $dst_stride:ident, $target:expr, $catalog:expr) => {
        $(#[$meta])*
        ///
        /// # Arguments
        ///
        /// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
        /// * `src_stride_argb` - Bytes per source row.
        #[doc = concat!("* `", stringify!($dst), "` - Target image.")]
        #[doc = concat!("* `", stringify!($dst_stride), "` - Bytes per target row.")]
        /// * `width` - Image width.
        /// * `height` - Image height, negative when the source is stored bottom-up.
        ///
        /// # Errors
        ///
        /// Returns [YuvError] when the size is zero or any buffer is too short,
        /// nothing is written in that case.
        ///
        pub fn $name(
            src_argb: &[u8],
            src_stride_argb: u32,
            $dst: &mut [u8],
            $dst_stride: u32,
            width: u32,
            height: i32,
        ) -> Result<(), YuvError> {
            reshuffle_argb(
                src_argb,
                src_stride_argb,
                $dst,
                $dst_stride,
                width,
                height,
                $target,
                &$catalog,
            )
            .inspect_err(|e| log_rejected($target, e))
        }
    };
}

reshuffle_entry!(
    /// Convert ARGB image data to RGBA, `A, B, G, R` in memory.
    argb_to_rgba, dst_rgba, dst_stride_rgba, PixelFormat::Rgba, ARGB_TO_RGBA
);

reshuffle_entry!(
    /// Convert ARGB image data to 24-bit RGB24, `B, G, R` in memory. Alpha is dropped.
    argb_to_rgb24, dst_rgb24, dst_stride_rgb24, PixelFormat::Rgb24, ARGB_TO_RGB24
);

reshuffle_entry!(
    /// Convert ARGB image data to 24-bit RAW, `R, G, B` in memory. Alpha is dropped.
    argb_to_raw, dst_raw, dst_stride_raw, PixelFormat::Raw, ARGB_TO_RAW
);

reshuffle_entry!(
    /// Convert ARGB image data to little endian RGB565.
    ///
    /// Channels are truncated to 5, 6 and 5 bits, blue occupies the low bits.
    argb_to_rgb565, dst_rgb565, dst_stride_rgb565, PixelFormat::Rgb565, ARGB_TO_RGB565
);

reshuffle_entry!(
    /// Convert ARGB image data to little endian ARGB1555.
    ///
    /// Colors are truncated to 5 bits, alpha keeps its top bit.
    argb_to_argb1555, dst_argb1555, dst_stride_argb1555, PixelFormat::Argb1555, ARGB_TO_ARGB1555
);

reshuffle_entry!(
    /// Convert ARGB image data to little endian ARGB4444.
    argb_to_argb4444, dst_argb4444, dst_stride_argb4444, PixelFormat::Argb4444, ARGB_TO_ARGB4444
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::with_reference_kernels;
    use rand::Rng;

    type ReshuffleEntry = fn(&[u8], u32, &mut [u8], u32, u32, i32) -> Result<(), YuvError>;

    const ENTRIES: [(ReshuffleEntry, PixelFormat); 6] = [
        (argb_to_rgba, PixelFormat::Rgba),
        (argb_to_rgb24, PixelFormat::Rgb24),
        (argb_to_raw, PixelFormat::Raw),
        (argb_to_rgb565, PixelFormat::Rgb565),
        (argb_to_argb1555, PixelFormat::Argb1555),
        (argb_to_argb4444, PixelFormat::Argb4444),
    ];

    fn random_argb(width: usize, height: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..width * height * 4)
            .map(|_| rng.random_range(0..=255u8))
            .collect()
    }

    fn run(
        entry: ReshuffleEntry,
        target: PixelFormat,
        src: &[u8],
        width: usize,
        height: i32,
    ) -> Vec<u8> {
        let stride = target.min_stride(0, width as u32).unwrap();
        let mut dst = vec![0u8; stride * height.unsigned_abs() as usize];
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

    #[test]
    fn test_known_pixel() {
        let src = [0x10u8, 0x80, 0xF0, 0xC0];
        assert_eq!(run(argb_to_rgba, PixelFormat::Rgba, &src, 1, 1), [0xC0, 0x10, 0x80, 0xF0]);
        assert_eq!(run(argb_to_rgb24, PixelFormat::Rgb24, &src, 1, 1), [0x10, 0x80, 0xF0]);
        assert_eq!(run(argb_to_raw, PixelFormat::Raw, &src, 1, 1), [0xF0, 0x80, 0x10]);

        let rgb565 = (0x10u16 >> 3) | ((0x80u16 >> 2) << 5) | ((0xF0u16 >> 3) << 11);
        assert_eq!(
            run(argb_to_rgb565, PixelFormat::Rgb565, &src, 1, 1),
            rgb565.to_le_bytes()
        );
        let argb1555 = (0x10u16 >> 3) | ((0x80u16 >> 3) << 5) | ((0xF0u16 >> 3) << 10) | (1 << 15);
        assert_eq!(
            run(argb_to_argb1555, PixelFormat::Argb1555, &src, 1, 1),
            argb1555.to_le_bytes()
        );
        assert_eq!(
            run(argb_to_argb4444, PixelFormat::Argb4444, &src, 1, 1),
            0xCF81u16.to_le_bytes()
        );
    }

    #[test]
    fn test_accelerated_matches_reference() {
        for (entry, target) in ENTRIES {
            for width in [1usize, 3, 4, 7, 8, 9, 16, 17, 31, 48, 65] {
                for height in [1i32, 3, -4] {
                    let src = random_argb(width, height.unsigned_abs() as usize);
                    let fast = run(entry, target, &src, width, height);
                    let reference = with_reference_kernels(|| run(entry, target, &src, width, height));
                    assert_eq!(fast, reference, "{:?} {}x{}", target, width, height);
                }
            }
        }
    }

    #[test]
    fn test_negative_height_mirrors_source() {
        for (entry, target) in ENTRIES {
            let (width, height) = (11usize, 4usize);
            let src = random_argb(width, height);
            let flipped: Vec<u8> = src.chunks_exact(width * 4).rev().flatten().copied().collect();
            assert_eq!(
                run(entry, target, &src, width, -(height as i32)),
                run(entry, target, &flipped, width, height as i32),
                "{:?}",
                target
            );
        }
    }

    #[test]
    fn test_wide_rows_need_no_scratch() {
        let width = crate::MAX_ROW_WIDTH + 5;
        let src = random_argb(width, 1);
        let out = run(argb_to_raw, PixelFormat::Raw, &src, width, 1);
        assert_eq!(out.len(), width * 3);
    }

    #[test]
    fn test_rejected_calls_write_nothing() {
        let src = random_argb(4, 2);
        let mut dst = vec![0x77u8; 15];
        assert!(matches!(
            argb_to_rgb24(&src, 16, &mut dst, 12, 4, 2),
            Err(YuvError::DestinationMinimumSizeMismatch(_))
        ));
        assert!(matches!(
            argb_to_rgb565(&src, 16, &mut dst, 8, 4, 0),
            Err(YuvError::ZeroBaseSize)
        ));
        assert!(matches!(
            argb_to_rgba(&src[..31], 16, &mut dst, 0, 4, 2),
            Err(YuvError::SourceMinimumSizeMismatch(_))
        ));
        assert!(dst.iter().all(|&x| x == 0x77));
    }
}
