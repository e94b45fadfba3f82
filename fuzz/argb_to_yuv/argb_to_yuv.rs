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
use yuvpack::{argb_to_i411, argb_to_i420, argb_to_i422, argb_to_i444, argb_to_i400, YuvError};

type PlanarFn = fn(
    &[u8],
    u32,
    &mut [u8],
    u32,
    &mut [u8],
    u32,
    &mut [u8],
    u32,
    u32,
    i32,
) -> Result<(), YuvError>;

fuzz_target!(|data: (u8, u8, u8, bool, u8)| {
    let (i_width, i_height, value, bottom_up, padding) = data;
    fuzz_planar(argb_to_i444, 1, 1, i_width, i_height, value, bottom_up, padding);
    fuzz_planar(argb_to_i422, 2, 1, i_width, i_height, value, bottom_up, padding);
    fuzz_planar(argb_to_i411, 4, 1, i_width, i_height, value, bottom_up, padding);
    fuzz_planar(argb_to_i420, 2, 2, i_width, i_height, value, bottom_up, padding);
    fuzz_luma(i_width, i_height, value, bottom_up, padding);
});

#[allow(clippy::too_many_arguments)]
fn fuzz_planar(
    conversion: PlanarFn,
    h_sub: usize,
    v_sub: usize,
    i_width: u8,
    i_height: u8,
    value: u8,
    bottom_up: bool,
    padding: u8,
) {
    let width = i_width as usize;
    let height = i_height as usize;
    let src_stride = width * 4 + padding as usize;
    let src = vec![value; src_stride * height];
    let chroma_width = width.div_ceil(h_sub);
    let chroma_height = height.div_ceil(v_sub);
    let mut y = vec![0u8; width * height];
    let mut u = vec![0u8; chroma_width * chroma_height];
    let mut v = vec![0u8; chroma_width * chroma_height];

    let signed_height = if bottom_up {
        -(height as i32)
    } else {
        height as i32
    };
    let result = conversion(
        &src,
        src_stride as u32,
        &mut y,
        width as u32,
        &mut u,
        chroma_width as u32,
        &mut v,
        chroma_width as u32,
        width as u32,
        signed_height,
    );
    if width == 0 || height == 0 {
        assert_eq!(result, Err(YuvError::ZeroBaseSize));
        return;
    }
    result.unwrap();
    // a flat source has flat output
    assert!(y.windows(2).all(|x| x[0] == x[1]));
    assert!(u.windows(2).all(|x| x[0] == x[1]));
    assert!(v.windows(2).all(|x| x[0] == x[1]));
}

fn fuzz_luma(i_width: u8, i_height: u8, value: u8, bottom_up: bool, padding: u8) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let y_stride = width + padding as usize;
    let src = vec![value; width * height * 4];
    let mut y = vec![0u8; y_stride * height];
    let signed_height = if bottom_up {
        -(height as i32)
    } else {
        height as i32
    };
    argb_to_i400(
        &src,
        width as u32 * 4,
        &mut y,
        y_stride as u32,
        width as u32,
        signed_height,
    )
    .unwrap();
}
