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
use yuvpack::{argb_to_nv12, argb_to_nv21, with_reference_kernels};

fuzz_target!(|data: (u8, u8, Vec<u8>, bool)| {
    let (i_width, i_height, pixels, bottom_up) = data;
    if i_width == 0 || i_height == 0 || pixels.is_empty() {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let src = pixels
        .iter()
        .cycle()
        .take(width * height * 4)
        .copied()
        .collect::<Vec<u8>>();
    let signed_height = if bottom_up {
        -(height as i32)
    } else {
        height as i32
    };

    for conversion in [argb_to_nv12, argb_to_nv21] {
        let run = || {
            let uv_stride = width.div_ceil(2) * 2;
            let mut y = vec![0u8; width * height];
            let mut uv = vec![0u8; uv_stride * height.div_ceil(2)];
            conversion(
                &src,
                width as u32 * 4,
                &mut y,
                width as u32,
                &mut uv,
                uv_stride as u32,
                width as u32,
                signed_height,
            )
            .unwrap();
            (y, uv)
        };
        let accelerated = run();
        let reference = with_reference_kernels(run);
        assert_eq!(accelerated, reference);
    }
});
