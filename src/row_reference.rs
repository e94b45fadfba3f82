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

use crate::yuv_support::{Rgb16Layout, Rgb24Order, Yuy2Description};

// BT.601 studio range, 8 bit fractional precision.
// Every intermediate stays within 16 bits unsigned, SIMD kernels rely on it.

#[inline(always)]
pub(crate) const fn rgb_to_y(r: u8, g: u8, b: u8) -> u8 {
    ((66 * r as u32 + 129 * g as u32 + 25 * b as u32 + 0x1080) >> 8) as u8
}

#[inline(always)]
pub(crate) const fn rgb_to_u(r: u8, g: u8, b: u8) -> u8 {
    ((112 * b as i32 - 74 * g as i32 - 38 * r as i32 + 0x8080) >> 8) as u8
}

#[inline(always)]
pub(crate) const fn rgb_to_v(r: u8, g: u8, b: u8) -> u8 {
    ((112 * r as i32 - 94 * g as i32 - 18 * b as i32 + 0x8080) >> 8) as u8
}

pub(crate) fn argb_to_y_row(src: &[u8], dst: &mut [u8], width: usize) {
    for (dst, src) in dst.iter_mut().zip(src.chunks_exact(4)).take(width) {
        *dst = rgb_to_y(src[2], src[1], src[0]);
    }
}

/// 4:2:0 chroma of a row pair, `row0` and `row1` may be the same row.
pub(crate) fn argb_to_uv_row(
    row0: &[u8],
    row1: &[u8],
    u_dst: &mut [u8],
    v_dst: &mut [u8],
    width: usize,
) {
    let row0 = &row0[..width * 4];
    let row1 = &row1[..width * 4];
    for (((u_dst, v_dst), src0), src1) in u_dst
        .iter_mut()
        .zip(v_dst.iter_mut())
        .zip(row0.chunks_exact(8))
        .zip(row1.chunks_exact(8))
    {
        let b = (src0[0] as u16 + src0[4] as u16 + src1[0] as u16 + src1[4] as u16 + 2) >> 2;
        let g = (src0[1] as u16 + src0[5] as u16 + src1[1] as u16 + src1[5] as u16 + 2) >> 2;
        let r = (src0[2] as u16 + src0[6] as u16 + src1[2] as u16 + src1[6] as u16 + 2) >> 2;
        *u_dst = rgb_to_u(r as u8, g as u8, b as u8);
        *v_dst = rgb_to_v(r as u8, g as u8, b as u8);
    }

    if width & 1 != 0 {
        let src0 = row0.chunks_exact(8).remainder();
        let src1 = row1.chunks_exact(8).remainder();
        let b = (src0[0] as u16 + src1[0] as u16 + 1) >> 1;
        let g = (src0[1] as u16 + src1[1] as u16 + 1) >> 1;
        let r = (src0[2] as u16 + src1[2] as u16 + 1) >> 1;
        let last = width / 2;
        u_dst[last] = rgb_to_u(r as u8, g as u8, b as u8);
        v_dst[last] = rgb_to_v(r as u8, g as u8, b as u8);
    }
}

pub(crate) fn argb_to_uv444_row(src: &[u8], u_dst: &mut [u8], v_dst: &mut [u8], width: usize) {
    for ((u_dst, v_dst), src) in u_dst
        .iter_mut()
        .zip(v_dst.iter_mut())
        .zip(src.chunks_exact(4))
        .take(width)
    {
        *u_dst = rgb_to_u(src[2], src[1], src[0]);
        *v_dst = rgb_to_v(src[2], src[1], src[0]);
    }
}

pub(crate) fn argb_to_uv422_row(src: &[u8], u_dst: &mut [u8], v_dst: &mut [u8], width: usize) {
    let src = &src[..width * 4];
    for ((u_dst, v_dst), src) in u_dst
        .iter_mut()
        .zip(v_dst.iter_mut())
        .zip(src.chunks_exact(8))
    {
        let b = ((src[0] as u16 + src[4] as u16 + 1) >> 1) as u8;
        let g = ((src[1] as u16 + src[5] as u16 + 1) >> 1) as u8;
        let r = ((src[2] as u16 + src[6] as u16 + 1) >> 1) as u8;
        *u_dst = rgb_to_u(r, g, b);
        *v_dst = rgb_to_v(r, g, b);
    }

    if width & 1 != 0 {
        let src = src.chunks_exact(8).remainder();
        let last = width / 2;
        u_dst[last] = rgb_to_u(src[2], src[1], src[0]);
        v_dst[last] = rgb_to_v(src[2], src[1], src[0]);
    }
}

/// 4:1:1 chroma, four pixels per sample. A trailing group of fewer
/// pixels averages what it has.
pub(crate) fn argb_to_uv411_row(src: &[u8], u_dst: &mut [u8], v_dst: &mut [u8], width: usize) {
    let src = &src[..width * 4];
    for ((u_dst, v_dst), src) in u_dst
        .iter_mut()
        .zip(v_dst.iter_mut())
        .zip(src.chunks_exact(16))
    {
        let b = ((src[0] as u16 + src[4] as u16 + src[8] as u16 + src[12] as u16 + 2) >> 2) as u8;
        let g = ((src[1] as u16 + src[5] as u16 + src[9] as u16 + src[13] as u16 + 2) >> 2) as u8;
        let r =
            ((src[2] as u16 + src[6] as u16 + src[10] as u16 + src[14] as u16 + 2) >> 2) as u8;
        *u_dst = rgb_to_u(r, g, b);
        *v_dst = rgb_to_v(r, g, b);
    }

    let rem = src.chunks_exact(16).remainder();
    if !rem.is_empty() {
        let count = rem.len() / 4;
        let mut sums = [0u16; 3];
        for px in rem.chunks_exact(4) {
            sums[0] += px[0] as u16;
            sums[1] += px[1] as u16;
            sums[2] += px[2] as u16;
        }
        let [b, g, r] = sums.map(|s| match count {
            3 => ((s + 1) / 3) as u8,
            2 => ((s + 1) >> 1) as u8,
            _ => s as u8,
        });
        let last = width / 4;
        u_dst[last] = rgb_to_u(r, g, b);
        v_dst[last] = rgb_to_v(r, g, b);
    }
}

/// Interleaves two chroma rows, `first` lands on even bytes.
pub(crate) fn merge_uv_row(first: &[u8], second: &[u8], dst: &mut [u8], width: usize) {
    for ((dst, &first), &second) in dst
        .chunks_exact_mut(2)
        .zip(first.iter())
        .zip(second.iter())
        .take(width)
    {
        dst[0] = first;
        dst[1] = second;
    }
}

/// Repacks one 4:2:2 row into macro-pixels.
///
/// An odd trailing pixel writes a full macro-pixel with a zero second luma.
pub(crate) fn yuv422_to_packed_row<const TARGET: u8>(
    y_src: &[u8],
    u_src: &[u8],
    v_src: &[u8],
    dst: &mut [u8],
    width: usize,
) {
    let target: Yuy2Description = TARGET.into();
    let y_src = &y_src[..width];
    for (((dst, y_src), &u), &v) in dst
        .chunks_exact_mut(4)
        .zip(y_src.chunks_exact(2))
        .zip(u_src.iter())
        .zip(v_src.iter())
    {
        dst[target.get_first_y_position()] = y_src[0];
        dst[target.get_u_position()] = u;
        dst[target.get_second_y_position()] = y_src[1];
        dst[target.get_v_position()] = v;
    }

    if width & 1 != 0 {
        let last = width / 2;
        let dst = &mut dst[last * 4..last * 4 + 4];
        dst[target.get_first_y_position()] = y_src[width - 1];
        dst[target.get_u_position()] = u_src[last];
        dst[target.get_second_y_position()] = 0;
        dst[target.get_v_position()] = v_src[last];
    }
}

/// `B, G, R, A` to `A, B, G, R` in memory
pub(crate) fn argb_to_rgba_row(src: &[u8], dst: &mut [u8], width: usize) {
    for (dst, src) in dst
        .chunks_exact_mut(4)
        .zip(src.chunks_exact(4))
        .take(width)
    {
        dst[0] = src[3];
        dst[1] = src[0];
        dst[2] = src[1];
        dst[3] = src[2];
    }
}

pub(crate) fn argb_to_rgb24_row<const ORDER: u8>(src: &[u8], dst: &mut [u8], width: usize) {
    let order: Rgb24Order = ORDER.into();
    for (dst, src) in dst
        .chunks_exact_mut(3)
        .zip(src.chunks_exact(4))
        .take(width)
    {
        match order {
            Rgb24Order::Bgr => {
                dst[0] = src[0];
                dst[1] = src[1];
                dst[2] = src[2];
            }
            Rgb24Order::Rgb => {
                dst[0] = src[2];
                dst[1] = src[1];
                dst[2] = src[0];
            }
        }
    }
}

pub(crate) fn argb_to_rgb16_row<const LAYOUT: u8>(src: &[u8], dst: &mut [u8], width: usize) {
    let layout: Rgb16Layout = LAYOUT.into();
    for (dst, src) in dst
        .chunks_exact_mut(2)
        .zip(src.chunks_exact(4))
        .take(width)
    {
        let packed = layout.pack(src[0], src[1], src[2], src[3]);
        dst.copy_from_slice(&packed.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studio_range() {
        assert_eq!(rgb_to_y(0, 0, 0), 16);
        assert_eq!(rgb_to_y(255, 255, 255), 235);
        assert_eq!(rgb_to_u(0, 0, 0), 128);
        assert_eq!(rgb_to_v(0, 0, 0), 128);
        assert_eq!(rgb_to_u(0, 0, 255), 240);
        assert_eq!(rgb_to_v(255, 0, 0), 240);
        assert_eq!(rgb_to_u(255, 255, 0), 16);
        assert_eq!(rgb_to_v(0, 255, 255), 16);
    }

    #[test]
    fn test_uv_row_odd_width() {
        // three pixels, the last column only averages vertically
        let row0 = [10u8, 20, 30, 255, 30, 40, 50, 255, 100, 0, 200, 255];
        let row1 = [20u8, 30, 40, 255, 40, 50, 60, 255, 50, 100, 0, 255];
        let mut u = [0u8; 2];
        let mut v = [0u8; 2];
        argb_to_uv_row(&row0, &row1, &mut u, &mut v, 3);
        assert_eq!(u[0], rgb_to_u(45, 35, 25));
        assert_eq!(v[0], rgb_to_v(45, 35, 25));
        assert_eq!(u[1], rgb_to_u(100, 50, 75));
        assert_eq!(v[1], rgb_to_v(100, 50, 75));
    }

    #[test]
    fn test_uv422_matches_pair_with_itself() {
        let row: Vec<u8> = (0..7 * 4).map(|x| (x * 37 % 251) as u8).collect();
        let mut u0 = [0u8; 4];
        let mut v0 = [0u8; 4];
        let mut u1 = [0u8; 4];
        let mut v1 = [0u8; 4];
        argb_to_uv422_row(&row, &mut u0, &mut v0, 7);
        argb_to_uv_row(&row, &row, &mut u1, &mut v1, 7);
        assert_eq!(u0, u1);
        assert_eq!(v0, v1);
    }

    #[test]
    fn test_uv411_tail() {
        let row: Vec<u8> = [
            [0u8, 0, 0, 0],
            [4, 4, 4, 0],
            [8, 8, 8, 0],
            [12, 12, 12, 0],
            [1, 2, 3, 0],
            [2, 3, 5, 0],
            [4, 5, 7, 0],
        ]
        .concat();
        let mut u = [0u8; 2];
        let mut v = [0u8; 2];
        argb_to_uv411_row(&row, &mut u, &mut v, 7);
        assert_eq!(u[0], rgb_to_u(6, 6, 6));
        assert_eq!(u[1], rgb_to_u(5, 3, 2));
        assert_eq!(v[1], rgb_to_v(5, 3, 2));
    }

    #[test]
    fn test_packed_odd_tail() {
        let y = [1u8, 2, 3];
        let u = [4u8, 5];
        let v = [6u8, 7];
        let mut yuy2 = [0xFFu8; 8];
        yuv422_to_packed_row::<{ Yuy2Description::YUYV as u8 }>(&y, &u, &v, &mut yuy2, 3);
        assert_eq!(yuy2, [1, 4, 2, 6, 3, 5, 0, 7]);
        let mut uyvy = [0xFFu8; 8];
        yuv422_to_packed_row::<{ Yuy2Description::UYVY as u8 }>(&y, &u, &v, &mut uyvy, 3);
        assert_eq!(uyvy, [4, 1, 6, 2, 5, 3, 7, 0]);
    }

    #[test]
    fn test_reshuffles() {
        let src = [1u8, 2, 3, 4];
        let mut rgba = [0u8; 4];
        argb_to_rgba_row(&src, &mut rgba, 1);
        assert_eq!(rgba, [4, 1, 2, 3]);
        let mut rgb24 = [0u8; 3];
        argb_to_rgb24_row::<{ Rgb24Order::Bgr as u8 }>(&src, &mut rgb24, 1);
        assert_eq!(rgb24, [1, 2, 3]);
        let mut raw = [0u8; 3];
        argb_to_rgb24_row::<{ Rgb24Order::Rgb as u8 }>(&src, &mut raw, 1);
        assert_eq!(raw, [3, 2, 1]);
        let mut rgb565 = [0u8; 2];
        argb_to_rgb16_row::<{ Rgb16Layout::Rgb565 as u8 }>(&[0, 0, 255, 255], &mut rgb565, 1);
        assert_eq!(rgb565, [0x00, 0xF8]);
    }
}
