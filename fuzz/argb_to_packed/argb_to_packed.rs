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

#![no_main]

use libfuzzer_sys::fuzz_target;
use yuvpack::{
    argb_to_argb1555, argb_to_argb4444, argb_to_raw, argb_to_rgb24, argb_to_rgb565, argb_to_rgba,
    argb_to_uyvy, argb_to_yuy2, with_reference_kernels, PixelFormat, YuvError,
};

type PackedFn = fn(&[u8], u32, &mut [u8], u32, u32, i32) -> Result<(), YuvError>;

fuzz_target!(|data: (u8, u8, Vec<u8>, bool)| {
    let (i_width, i_height, pixels, bottom_up) = data;
    if i_width == 0 || i_height == 0 || pixels.is_empty() {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let src = pixels
        .iter()
        .cycle()
        .take(width as usize * height as usize * 4)
        .copied()
        .collect::<Vec<u8>>();
    let signed_height = if bottom_up {
        -(height as i32)
    } else {
        height as i32
    };

    let conversions: [(PackedFn, PixelFormat); 8] = [
        (argb_to_yuy2, PixelFormat::Yuy2),
        (argb_to_uyvy, PixelFormat::Uyvy),
        (argb_to_rgba, PixelFormat::Rgba),
        (argb_to_rgb24, PixelFormat::Rgb24),
        (argb_to_raw, PixelFormat::Raw),
        (argb_to_rgb565, PixelFormat::Rgb565),
        (argb_to_argb1555, PixelFormat::Argb1555),
        (argb_to_argb4444, PixelFormat::Argb4444),
    ];

    for (conversion, format) in conversions {
        let Some(stride) = format.min_stride(0, width) else {
            return;
        };
        let Some(size) = format.plane_size(0, width, height, stride as u32) else {
            return;
        };
        let run = || {
            let mut dst = vec![0u8; size];
            conversion(
                &src,
                width * 4,
                &mut dst,
                stride as u32,
                width,
                signed_height,
            )
            .unwrap();
            dst
        };
        let accelerated = run();
        let reference = with_reference_kernels(run);
        assert_eq!(accelerated, reference, "{:?}", format);
    }
});
