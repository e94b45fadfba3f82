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
use rand::Rng;
use std::time::Instant;
use yuvpack::{
    argb_to_i420, argb_to_nv12, argb_to_rgb565, argb_to_yuy2, describe_acceleration,
    with_reference_kernels, YuvError,
};

struct Frame {
    width: u32,
    height: u32,
    argb: Vec<u8>,
}

impl Frame {
    fn random(width: u32, height: u32) -> Frame {
        let mut rng = rand::rng();
        let argb = (0..width as usize * height as usize * 4)
            .map(|_| rng.random_range(0..=255u8))
            .collect();
        Frame {
            width,
            height,
            argb,
        }
    }

    fn stride(&self) -> u32 {
        self.width * 4
    }
}

fn i420(frame: &Frame) -> Result<Vec<u8>, YuvError> {
    let chroma_width = frame.width.div_ceil(2);
    let chroma_len = chroma_width as usize * frame.height.div_ceil(2) as usize;
    let mut y = vec![0u8; frame.width as usize * frame.height as usize];
    let mut u = vec![0u8; chroma_len];
    let mut v = vec![0u8; chroma_len];
    argb_to_i420(
        &frame.argb,
        frame.stride(),
        &mut y,
        frame.width,
        &mut u,
        chroma_width,
        &mut v,
        chroma_width,
        frame.width,
        frame.height as i32,
    )?;
    y.extend_from_slice(&u);
    y.extend_from_slice(&v);
    Ok(y)
}

fn nv12(frame: &Frame) -> Result<Vec<u8>, YuvError> {
    let uv_stride = frame.width.div_ceil(2) * 2;
    let mut y = vec![0u8; frame.width as usize * frame.height as usize];
    let mut uv = vec![0u8; uv_stride as usize * frame.height.div_ceil(2) as usize];
    argb_to_nv12(
        &frame.argb,
        frame.stride(),
        &mut y,
        frame.width,
        &mut uv,
        uv_stride,
        frame.width,
        frame.height as i32,
    )?;
    y.extend_from_slice(&uv);
    Ok(y)
}

fn yuy2(frame: &Frame) -> Result<Vec<u8>, YuvError> {
    let stride = frame.width.div_ceil(2) * 4;
    let mut dst = vec![0u8; stride as usize * frame.height as usize];
    argb_to_yuy2(
        &frame.argb,
        frame.stride(),
        &mut dst,
        stride,
        frame.width,
        frame.height as i32,
    )?;
    Ok(dst)
}

fn rgb565(frame: &Frame) -> Result<Vec<u8>, YuvError> {
    let stride = frame.width * 2;
    let mut dst = vec![0u8; stride as usize * frame.height as usize];
    argb_to_rgb565(
        &frame.argb,
        frame.stride(),
        &mut dst,
        stride,
        frame.width,
        frame.height as i32,
    )?;
    Ok(dst)
}

fn main() -> Result<(), YuvError> {
    println!("{}", describe_acceleration());

    let frame = Frame::random(1921, 1081);
    let conversions: [(&str, fn(&Frame) -> Result<Vec<u8>, YuvError>); 4] = [
        ("ARGB -> I420", i420),
        ("ARGB -> NV12", nv12),
        ("ARGB -> YUY2", yuy2),
        ("ARGB -> RGB565", rgb565),
    ];

    for (name, conversion) in conversions {
        let start = Instant::now();
        let accelerated = conversion(&frame)?;
        let accelerated_time = start.elapsed();

        let start = Instant::now();
        let reference = with_reference_kernels(|| conversion(&frame))?;
        let reference_time = start.elapsed();

        let mismatches = accelerated
            .iter()
            .zip(reference.iter())
            .filter(|(a, b)| a != b)
            .count();
        println!(
            "{name}: accelerated {:?}, reference {:?}, mismatched bytes {mismatches}",
            accelerated_time, reference_time
        );
    }
    Ok(())
}
