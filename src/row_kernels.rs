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

//! Catalog of every row operation and the variants compiled into this build.

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
use crate::avx2::*;
use crate::cpu_features::CpuFlag;
use crate::dispatch::{KernelCatalog, KernelFamily};
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::*;
use crate::row_reference::*;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::*;
use crate::yuv_support::{Rgb16Layout, Rgb24Order, Yuy2Description};

/// `(src, dst, width)`
pub(crate) type PixelRowFn = fn(&[u8], &mut [u8], usize);
/// `(row0, row1, u, v, width)`, a single row is passed as both rows
pub(crate) type ChromaPairRowFn = fn(&[u8], &[u8], &mut [u8], &mut [u8], usize);
/// `(src, u, v, width)`
pub(crate) type ChromaRowFn = fn(&[u8], &mut [u8], &mut [u8], usize);
/// `(first, second, dst, width)`, width counts samples of one chroma row
pub(crate) type MergeRowFn = fn(&[u8], &[u8], &mut [u8], usize);
/// `(y, u, v, dst, width)`
pub(crate) type PackedRowFn = fn(&[u8], &[u8], &[u8], &mut [u8], usize);

#[allow(unused_imports)]
use CpuFlag::*;

pub(crate) static ARGB_TO_Y: KernelCatalog<PixelRowFn> = KernelCatalog {
    name: "ArgbToY",
    reference: argb_to_y_row,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 16,
            alignment: 16,
            any: sse_argb_to_y_row_any,
            unaligned: sse_argb_to_y_row,
            aligned: Some(sse_argb_to_y_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_y_row_any,
            unaligned: neon_argb_to_y_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_UV: KernelCatalog<ChromaPairRowFn> = KernelCatalog {
    name: "ArgbToUV",
    reference: argb_to_uv_row,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 16,
            alignment: 16,
            any: sse_argb_to_uv_row_any,
            unaligned: sse_argb_to_uv_row,
            aligned: Some(sse_argb_to_uv_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 16,
            alignment: 16,
            any: neon_argb_to_uv_row_any,
            unaligned: neon_argb_to_uv_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_UV422: KernelCatalog<ChromaRowFn> = KernelCatalog {
    name: "ArgbToUV422",
    reference: argb_to_uv422_row,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 16,
            alignment: 16,
            any: sse_argb_to_uv422_row_any,
            unaligned: sse_argb_to_uv422_row,
            aligned: Some(sse_argb_to_uv422_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 16,
            alignment: 16,
            any: neon_argb_to_uv422_row_any,
            unaligned: neon_argb_to_uv422_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_UV444: KernelCatalog<ChromaRowFn> = KernelCatalog {
    name: "ArgbToUV444",
    reference: argb_to_uv444_row,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 8,
            alignment: 16,
            any: sse_argb_to_uv444_row_any,
            unaligned: sse_argb_to_uv444_row,
            aligned: Some(sse_argb_to_uv444_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_uv444_row_any,
            unaligned: neon_argb_to_uv444_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_UV411: KernelCatalog<ChromaRowFn> = KernelCatalog {
    name: "ArgbToUV411",
    reference: argb_to_uv411_row,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 16,
            alignment: 16,
            any: sse_argb_to_uv411_row_any,
            unaligned: sse_argb_to_uv411_row,
            aligned: Some(sse_argb_to_uv411_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 16,
            alignment: 16,
            any: neon_argb_to_uv411_row_any,
            unaligned: neon_argb_to_uv411_row,
            aligned: None,
        },
    ],
};

pub(crate) static MERGE_UV: KernelCatalog<MergeRowFn> = KernelCatalog {
    name: "MergeUV",
    reference: merge_uv_row,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 16,
            alignment: 16,
            any: sse_merge_uv_row_any,
            unaligned: sse_merge_uv_row,
            aligned: Some(sse_merge_uv_row_aligned),
        },
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        KernelFamily {
            flag: Avx2,
            block: 32,
            alignment: 32,
            any: avx2_merge_uv_row_any,
            unaligned: avx2_merge_uv_row,
            aligned: Some(avx2_merge_uv_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 16,
            alignment: 16,
            any: neon_merge_uv_row_any,
            unaligned: neon_merge_uv_row,
            aligned: None,
        },
    ],
};

pub(crate) static YUV422_TO_YUY2: KernelCatalog<PackedRowFn> = KernelCatalog {
    name: "I422ToYUY2",
    reference: yuv422_to_packed_row::<{ Yuy2Description::YUYV as u8 }>,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 16,
            alignment: 16,
            any: sse_yuv422_to_yuy2_row_any,
            unaligned: sse_yuv422_to_yuy2_row,
            aligned: Some(sse_yuv422_to_yuy2_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 16,
            alignment: 16,
            any: neon_yuv422_to_yuy2_row_any,
            unaligned: neon_yuv422_to_yuy2_row,
            aligned: None,
        },
    ],
};

pub(crate) static YUV422_TO_UYVY: KernelCatalog<PackedRowFn> = KernelCatalog {
    name: "I422ToUYVY",
    reference: yuv422_to_packed_row::<{ Yuy2Description::UYVY as u8 }>,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 16,
            alignment: 16,
            any: sse_yuv422_to_uyvy_row_any,
            unaligned: sse_yuv422_to_uyvy_row,
            aligned: Some(sse_yuv422_to_uyvy_row_aligned),
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 16,
            alignment: 16,
            any: neon_yuv422_to_uyvy_row_any,
            unaligned: neon_yuv422_to_uyvy_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_RGBA: KernelCatalog<PixelRowFn> = KernelCatalog {
    name: "ArgbToRgba",
    reference: argb_to_rgba_row,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Ssse3,
            block: 4,
            alignment: 16,
            any: ssse3_argb_to_rgba_row_any,
            unaligned: ssse3_argb_to_rgba_row,
            aligned: None,
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_rgba_row_any,
            unaligned: neon_argb_to_rgba_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_RGB24: KernelCatalog<PixelRowFn> = KernelCatalog {
    name: "ArgbToRgb24",
    reference: argb_to_rgb24_row::<{ Rgb24Order::Bgr as u8 }>,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Ssse3,
            block: 16,
            alignment: 16,
            any: ssse3_argb_to_rgb24_row_any,
            unaligned: ssse3_argb_to_rgb24_row,
            aligned: None,
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_rgb24_row_any,
            unaligned: neon_argb_to_rgb24_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_RAW: KernelCatalog<PixelRowFn> = KernelCatalog {
    name: "ArgbToRaw",
    reference: argb_to_rgb24_row::<{ Rgb24Order::Rgb as u8 }>,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Ssse3,
            block: 16,
            alignment: 16,
            any: ssse3_argb_to_raw_row_any,
            unaligned: ssse3_argb_to_raw_row,
            aligned: None,
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_raw_row_any,
            unaligned: neon_argb_to_raw_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_RGB565: KernelCatalog<PixelRowFn> = KernelCatalog {
    name: "ArgbToRgb565",
    reference: argb_to_rgb16_row::<{ Rgb16Layout::Rgb565 as u8 }>,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 8,
            alignment: 16,
            any: sse_argb_to_rgb565_row_any,
            unaligned: sse_argb_to_rgb565_row,
            aligned: None,
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_rgb565_row_any,
            unaligned: neon_argb_to_rgb565_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_ARGB1555: KernelCatalog<PixelRowFn> = KernelCatalog {
    name: "ArgbToArgb1555",
    reference: argb_to_rgb16_row::<{ Rgb16Layout::Argb1555 as u8 }>,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 8,
            alignment: 16,
            any: sse_argb_to_argb1555_row_any,
            unaligned: sse_argb_to_argb1555_row,
            aligned: None,
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_argb1555_row_any,
            unaligned: neon_argb_to_argb1555_row,
            aligned: None,
        },
    ],
};

pub(crate) static ARGB_TO_ARGB4444: KernelCatalog<PixelRowFn> = KernelCatalog {
    name: "ArgbToArgb4444",
    reference: argb_to_rgb16_row::<{ Rgb16Layout::Argb4444 as u8 }>,
    families: &[
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        KernelFamily {
            flag: Sse2,
            block: 8,
            alignment: 16,
            any: sse_argb_to_argb4444_row_any,
            unaligned: sse_argb_to_argb4444_row,
            aligned: None,
        },
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        KernelFamily {
            flag: Neon,
            block: 8,
            alignment: 16,
            any: neon_argb_to_argb4444_row_any,
            unaligned: neon_argb_to_argb4444_row,
            aligned: None,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_features::cpu_features;
    use rand::Rng;

    const MISALIGN: usize = 1;

    /// Source and destination offsets from a 32 byte boundary, every combination
    const SHIFTS: [(usize, usize); 4] = [
        (0, 0),
        (MISALIGN, 0),
        (0, MISALIGN),
        (MISALIGN, MISALIGN),
    ];

    /// Returns a `len` bytes window of `storage` starting at a 32 byte
    /// boundary plus `shift`.
    fn window(storage: &mut Vec<u8>, len: usize, shift: usize) -> std::ops::Range<usize> {
        storage.resize(len + 64 + shift, 0);
        let base = storage.as_ptr() as usize;
        let start = (32 - base % 32) % 32 + shift;
        start..start + len
    }

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    fn widths(block: usize) -> Vec<usize> {
        vec![
            1,
            block - 1,
            block,
            block + 1,
            block * 2,
            block * 2 + 3,
            block * 4 + block / 2 + 1,
        ]
        .into_iter()
        .filter(|x| *x > 0)
        .collect()
    }

    /// Variants of a family that are legal for `width` at the given alignment
    fn legal_variants<F: Copy>(family: &KernelFamily<F>, width: usize, aligned: bool) -> Vec<F> {
        let mut variants = vec![family.any];
        if width % family.block == 0 {
            variants.push(family.unaligned);
            if aligned && family.alignment <= 32 {
                if let Some(kernel) = family.aligned {
                    variants.push(kernel);
                }
            }
        }
        variants
    }

    fn check_pixel_catalog(catalog: &KernelCatalog<PixelRowFn>, dst_bpp: usize) {
        let features = cpu_features();
        for family in catalog.families.iter().filter(|x| features.has(x.flag)) {
            for width in widths(family.block) {
                for (src_shift, dst_shift) in SHIFTS {
                    let source = random_bytes(width * 4);
                    let mut src_storage = Vec::new();
                    let src_range = window(&mut src_storage, width * 4, src_shift);
                    src_storage[src_range.clone()].copy_from_slice(&source);

                    let mut expected = vec![0u8; width * dst_bpp];
                    (catalog.reference)(&source, &mut expected, width);

                    for kernel in legal_variants(family, width, src_shift == 0 && dst_shift == 0) {
                        let mut dst_storage = Vec::new();
                        let dst_range = window(&mut dst_storage, width * dst_bpp, dst_shift);
                        kernel(
                            &src_storage[src_range.clone()],
                            &mut dst_storage[dst_range.clone()],
                            width,
                        );
                        assert_eq!(
                            &dst_storage[dst_range],
                            &expected[..],
                            "{} {:?} width {} shifts {} {}",
                            catalog.name,
                            family.flag,
                            width,
                            src_shift,
                            dst_shift
                        );
                    }
                }
            }
        }
    }

    fn check_chroma_catalog(catalog: &KernelCatalog<ChromaRowFn>, h_sub: usize) {
        let features = cpu_features();
        for family in catalog.families.iter().filter(|x| features.has(x.flag)) {
            for width in widths(family.block) {
                for (src_shift, dst_shift) in SHIFTS {
                    let chroma_width = width.div_ceil(h_sub);
                    let source = random_bytes(width * 4);
                    let mut src_storage = Vec::new();
                    let src_range = window(&mut src_storage, width * 4, src_shift);
                    src_storage[src_range.clone()].copy_from_slice(&source);

                    let mut expected_u = vec![0u8; chroma_width];
                    let mut expected_v = vec![0u8; chroma_width];
                    (catalog.reference)(&source, &mut expected_u, &mut expected_v, width);

                    for kernel in legal_variants(family, width, src_shift == 0 && dst_shift == 0) {
                        let mut u_storage = Vec::new();
                        let u_range = window(&mut u_storage, chroma_width, dst_shift);
                        let mut v_storage = Vec::new();
                        let v_range = window(&mut v_storage, chroma_width, dst_shift);
                        kernel(
                            &src_storage[src_range.clone()],
                            &mut u_storage[u_range.clone()],
                            &mut v_storage[v_range.clone()],
                            width,
                        );
                        assert_eq!(
                            &u_storage[u_range],
                            &expected_u[..],
                            "{} width {} shifts {} {}",
                            catalog.name,
                            width,
                            src_shift,
                            dst_shift
                        );
                        assert_eq!(
                            &v_storage[v_range],
                            &expected_v[..],
                            "{} width {} shifts {} {}",
                            catalog.name,
                            width,
                            src_shift,
                            dst_shift
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_luma_tiers_match_reference() {
        check_pixel_catalog(&ARGB_TO_Y, 1);
    }

    #[test]
    fn test_reshuffle_tiers_match_reference() {
        check_pixel_catalog(&ARGB_TO_RGBA, 4);
        check_pixel_catalog(&ARGB_TO_RGB24, 3);
        check_pixel_catalog(&ARGB_TO_RAW, 3);
        check_pixel_catalog(&ARGB_TO_RGB565, 2);
        check_pixel_catalog(&ARGB_TO_ARGB1555, 2);
        check_pixel_catalog(&ARGB_TO_ARGB4444, 2);
    }

    #[test]
    fn test_chroma_tiers_match_reference() {
        check_chroma_catalog(&ARGB_TO_UV444, 1);
        check_chroma_catalog(&ARGB_TO_UV422, 2);
        check_chroma_catalog(&ARGB_TO_UV411, 4);
    }

    #[test]
    fn test_chroma_pair_tiers_match_reference() {
        let features = cpu_features();
        let catalog = &ARGB_TO_UV;
        for family in catalog.families.iter().filter(|x| features.has(x.flag)) {
            for width in widths(family.block) {
                for (src_shift, dst_shift) in SHIFTS {
                    let chroma_width = width.div_ceil(2);
                    let top = random_bytes(width * 4);
                    let bottom = random_bytes(width * 4);
                    let mut top_storage = Vec::new();
                    let top_range = window(&mut top_storage, width * 4, src_shift);
                    top_storage[top_range.clone()].copy_from_slice(&top);
                    let mut bottom_storage = Vec::new();
                    let bottom_range = window(&mut bottom_storage, width * 4, dst_shift);
                    bottom_storage[bottom_range.clone()].copy_from_slice(&bottom);

                    let mut expected_u = vec![0u8; chroma_width];
                    let mut expected_v = vec![0u8; chroma_width];
                    (catalog.reference)(&top, &bottom, &mut expected_u, &mut expected_v, width);

                    for kernel in legal_variants(family, width, src_shift == 0 && dst_shift == 0) {
                        let mut u = vec![0u8; chroma_width];
                        let mut v = vec![0u8; chroma_width];
                        kernel(
                            &top_storage[top_range.clone()],
                            &bottom_storage[bottom_range.clone()],
                            &mut u,
                            &mut v,
                            width,
                        );
                        assert_eq!(u, expected_u, "width {}", width);
                        assert_eq!(v, expected_v, "width {}", width);

                        // a row paired with itself
                        let mut u = vec![0u8; chroma_width];
                        let mut v = vec![0u8; chroma_width];
                        let mut self_u = vec![0u8; chroma_width];
                        let mut self_v = vec![0u8; chroma_width];
                        let row = &top_storage[top_range.clone()];
                        kernel(row, row, &mut u, &mut v, width);
                        (catalog.reference)(&top, &top, &mut self_u, &mut self_v, width);
                        assert_eq!(u, self_u);
                        assert_eq!(v, self_v);
                    }
                }
            }
        }
    }

    #[test]
    fn test_merge_tiers_match_reference() {
        let features = cpu_features();
        let catalog = &MERGE_UV;
        for family in catalog.families.iter().filter(|x| features.has(x.flag)) {
            for width in widths(family.block) {
                for (src_shift, dst_shift) in SHIFTS {
                    let first = random_bytes(width);
                    let second = random_bytes(width);
                    let mut first_storage = Vec::new();
                    let first_range = window(&mut first_storage, width, src_shift);
                    first_storage[first_range.clone()].copy_from_slice(&first);
                    let mut second_storage = Vec::new();
                    let second_range = window(&mut second_storage, width, src_shift);
                    second_storage[second_range.clone()].copy_from_slice(&second);

                    let mut expected = vec![0u8; width * 2];
                    (catalog.reference)(&first, &second, &mut expected, width);

                    for kernel in legal_variants(family, width, src_shift == 0 && dst_shift == 0) {
                        let mut dst_storage = Vec::new();
                        let dst_range = window(&mut dst_storage, width * 2, dst_shift);
                        kernel(
                            &first_storage[first_range.clone()],
                            &second_storage[second_range.clone()],
                            &mut dst_storage[dst_range.clone()],
                            width,
                        );
                        assert_eq!(&dst_storage[dst_range], &expected[..], "width {}", width);
                    }
                }
            }
        }
    }

    #[test]
    fn test_packed_tiers_match_reference() {
        let features = cpu_features();
        for catalog in [&YUV422_TO_YUY2, &YUV422_TO_UYVY] {
            for family in catalog.families.iter().filter(|x| features.has(x.flag)) {
                for width in widths(family.block) {
                    for (src_shift, dst_shift) in SHIFTS {
                        let chroma_width = width.div_ceil(2);
                        let packed_len = chroma_width * 4;
                        let y = random_bytes(width);
                        let u = random_bytes(chroma_width);
                        let v = random_bytes(chroma_width);
                        let mut y_storage = Vec::new();
                        let y_range = window(&mut y_storage, width, src_shift);
                        y_storage[y_range.clone()].copy_from_slice(&y);

                        let mut expected = vec![0u8; packed_len];
                        (catalog.reference)(&y, &u, &v, &mut expected, width);

                        for kernel in legal_variants(family, width, src_shift == 0 && dst_shift == 0) {
                            let mut dst_storage = Vec::new();
                            let dst_range = window(&mut dst_storage, packed_len, dst_shift);
                            kernel(
                                &y_storage[y_range.clone()],
                                &u,
                                &v,
                                &mut dst_storage[dst_range.clone()],
                                width,
                            );
                            assert_eq!(
                                &dst_storage[dst_range],
                                &expected[..],
                                "{} width {}",
                                catalog.name,
                                width
                            );
                        }
                    }
                }
            }
        }
    }
}
