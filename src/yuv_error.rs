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

use crate::yuv_support::PixelFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Every variant is an invalid-argument rejection raised before any
/// destination byte is written.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum YuvError {
    ZeroBaseSize,
    NullPointer,
    PointerOverflow,
    /// `expected` is the maximum supported width, `received` is the requested one
    WidthExceedsRowCapacity(MismatchedSize),
    SourceMinimumSizeMismatch(MismatchedSize),
    LumaPlaneMinimumSizeMismatch(MismatchedSize),
    ChromaPlaneMinimumSizeMismatch(MismatchedSize),
    DestinationMinimumSizeMismatch(MismatchedSize),
}

impl YuvError {
    /// Status reported through the C ABI, there is a single failure status.
    #[inline]
    pub const fn status_code(&self) -> i32 {
        -1
    }
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::NullPointer => f.write_str("Required plane pointer is null"),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::WidthExceedsRowCapacity(size) => f.write_fmt(format_args!(
                "Width {} exceeds maximum supported row width {}",
                size.received, size.expected
            )),
            YuvError::SourceMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Source must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::LumaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Luma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::ChromaPlaneMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Chroma plane have invalid size, it must be at least {}, but it was {}",
                size.expected, size.received
            )),
            YuvError::DestinationMinimumSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

/// Minimal byte length of a plane: every row but the last spans `stride`,
/// the last one only needs `row_bytes`.
#[inline]
pub(crate) fn plane_min_len(stride: usize, row_bytes: usize, rows: usize) -> Result<usize, YuvError> {
    if rows == 0 {
        return Ok(0);
    }
    check_overflow_v2(stride, rows - 1)?
        .checked_add(row_bytes)
        .ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn log_rejected(target: PixelFormat, error: &YuvError) {
    log::debug!("Conversion to {:?} rejected: {}", target, error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_len() {
        assert_eq!(plane_min_len(64, 60, 3), Ok(188));
        assert_eq!(plane_min_len(0, 60, 3), Ok(60));
        assert_eq!(plane_min_len(64, 60, 0), Ok(0));
        assert_eq!(
            plane_min_len(usize::MAX, 1, 3),
            Err(YuvError::PointerOverflow)
        );
    }

    #[test]
    fn test_status_is_single_class() {
        let errors = [
            YuvError::ZeroBaseSize,
            YuvError::NullPointer,
            YuvError::PointerOverflow,
            YuvError::WidthExceedsRowCapacity(MismatchedSize {
                expected: 1,
                received: 2,
            }),
        ];
        for error in errors.iter() {
            assert_eq!(error.status_code(), -1);
            assert!(!error.to_string().is_empty());
        }
    }
}
