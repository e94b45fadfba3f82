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
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use yuvpack::{
    argb_to_i420, argb_to_i444, argb_to_nv12, argb_to_raw, argb_to_rgba, argb_to_uyvy,
    with_reference_kernels,
};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let src = (0..WIDTH as usize * HEIGHT as usize * 4)
        .map(|_| rng.random_range(0..=255u8))
        .collect::<Vec<u8>>();
    let src_stride = WIDTH * 4;
    let luma_len = WIDTH as usize * HEIGHT as usize;
    let chroma_width = WIDTH.div_ceil(2);
    let chroma_len = chroma_width as usize * HEIGHT.div_ceil(2) as usize;

    let mut y_plane = vec![0u8; luma_len];
    let mut u_plane = vec![0u8; luma_len];
    let mut v_plane = vec![0u8; luma_len];
    let mut uv_plane = vec![0u8; chroma_len * 2];
    let mut packed = vec![0u8; luma_len * 4];

    c.bench_function("yuvpack ARGB -> I420", |b| {
        b.iter(|| {
            argb_to_i420(
                &src,
                src_stride,
                &mut y_plane,
                WIDTH,
                &mut u_plane[..chroma_len],
                chroma_width,
                &mut v_plane[..chroma_len],
                chroma_width,
                WIDTH,
                HEIGHT as i32,
            )
            .unwrap();
        })
    });

    c.bench_function("yuvpack ARGB -> I420 reference", |b| {
        b.iter(|| {
            with_reference_kernels(|| {
                argb_to_i420(
                    &src,
                    src_stride,
                    &mut y_plane,
                    WIDTH,
                    &mut u_plane[..chroma_len],
                    chroma_width,
                    &mut v_plane[..chroma_len],
                    chroma_width,
                    WIDTH,
                    HEIGHT as i32,
                )
                .unwrap();
            })
        })
    });

    c.bench_function("yuvpack ARGB -> I444", |b| {
        b.iter(|| {
            argb_to_i444(
                &src,
                src_stride,
                &mut y_plane,
                WIDTH,
                &mut u_plane,
                WIDTH,
                &mut v_plane,
                WIDTH,
                WIDTH,
                HEIGHT as i32,
            )
            .unwrap();
        })
    });

    c.bench_function("yuvpack ARGB -> NV12", |b| {
        b.iter(|| {
            argb_to_nv12(
                &src,
                src_stride,
                &mut y_plane,
                WIDTH,
                &mut uv_plane,
                chroma_width * 2,
                WIDTH,
                HEIGHT as i32,
            )
            .unwrap();
        })
    });

    c.bench_function("yuvpack ARGB -> NV12 reference", |b| {
        b.iter(|| {
            with_reference_kernels(|| {
                argb_to_nv12(
                    &src,
                    src_stride,
                    &mut y_plane,
                    WIDTH,
                    &mut uv_plane,
                    chroma_width * 2,
                    WIDTH,
                    HEIGHT as i32,
                )
                .unwrap();
            })
        })
    });

    c.bench_function("yuvpack ARGB -> UYVY", |b| {
        b.iter(|| {
            argb_to_uyvy(
                &src,
                src_stride,
                &mut packed,
                chroma_width * 4,
                WIDTH,
                HEIGHT as i32,
            )
            .unwrap();
        })
    });

    c.bench_function("yuvpack ARGB -> RGBA", |b| {
        b.iter(|| {
            argb_to_rgba(&src, src_stride, &mut packed, WIDTH * 4, WIDTH, HEIGHT as i32).unwrap();
        })
    });

    c.bench_function("yuvpack ARGB -> RAW", |b| {
        b.iter(|| {
            argb_to_raw(&src, src_stride, &mut packed, WIDTH * 3, WIDTH, HEIGHT as i32).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
