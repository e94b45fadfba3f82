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

use std::fmt::Write;
use std::sync::OnceLock;

/// SIMD extensions the kernel selector branches on
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CpuFlag {
    Sse2,
    Ssse3,
    Avx2,
    Neon,
}

impl CpuFlag {
    const ALL: [CpuFlag; 4] = [CpuFlag::Sse2, CpuFlag::Ssse3, CpuFlag::Avx2, CpuFlag::Neon];

    #[inline]
    const fn bit(self) -> u32 {
        match self {
            CpuFlag::Sse2 => 1,
            CpuFlag::Ssse3 => 1 << 1,
            CpuFlag::Avx2 => 1 << 2,
            CpuFlag::Neon => 1 << 3,
        }
    }
}

/// Capability set of the running processor.
///
/// Detected once per process, read-only afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CpuFeatures {
    flags: u32,
}

impl CpuFeatures {
    fn detect() -> Self {
        let mut flags = 0u32;
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if std::arch::is_x86_feature_detected!("sse2") {
                flags |= CpuFlag::Sse2.bit();
            }
            if std::arch::is_x86_feature_detected!("ssse3") {
                flags |= CpuFlag::Ssse3.bit();
            }
            if std::arch::is_x86_feature_detected!("avx2") {
                flags |= CpuFlag::Avx2.bit();
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                flags |= CpuFlag::Neon.bit();
            }
        }
        let features = CpuFeatures { flags };
        log::debug!("Detected CPU capabilities: {}", features);
        features
    }

    /// Set with no capability at all, every selection lands on reference kernels
    pub const fn none() -> Self {
        CpuFeatures { flags: 0 }
    }

    #[inline]
    pub const fn has(&self, flag: CpuFlag) -> bool {
        self.flags & flag.bit() != 0
    }

    #[cfg(test)]
    pub(crate) const fn with(self, flag: CpuFlag) -> Self {
        CpuFeatures {
            flags: self.flags | flag.bit(),
        }
    }
}

impl std::fmt::Display for CpuFeatures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        let mut first = true;
        for flag in CpuFlag::ALL.iter().filter(|x| self.has(**x)) {
            if !first {
                f.write_char(',')?;
            }
            first = false;
            f.write_fmt(format_args!("{:?}", flag))?;
        }
        f.write_char(']')
    }
}

/// Process-wide capability set, initialized on first use.
pub fn cpu_features() -> &'static CpuFeatures {
    static INSTANCE: OnceLock<CpuFeatures> = OnceLock::new();
    INSTANCE.get_or_init(CpuFeatures::detect)
}

/// Returns a description of the instruction sets kernels may be selected from
///
/// # Examples
/// ```
/// println!("{}", yuvpack::describe_acceleration());
/// // => {arch:x86_64,instruction-sets:[Sse2,Ssse3,Avx2]}
/// ```
pub fn describe_acceleration() -> String {
    format!(
        "{{arch:{},instruction-sets:{}}}",
        std::env::consts::ARCH,
        cpu_features()
    )
}
