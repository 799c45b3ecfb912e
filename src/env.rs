//! Compilation environment
//!
//! The [`CompilationEnvironment`] is assembled once by the driver from the
//! command line and then only read.  The type parser consults it for the
//! size of `size`, `ssize`, pointers, arrays and object handles.

use std::fmt;
use std::str::FromStr;

/// Target word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bits {
    ThirtyTwo,
    SixtyFour,
}

impl Bits {
    /// Width of the machine the compiler itself runs on.
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "32") {
            Bits::ThirtyTwo
        } else {
            Bits::SixtyFour
        }
    }

    pub fn as_u32(self) -> u32 {
        match self {
            Bits::ThirtyTwo => 32,
            Bits::SixtyFour => 64,
        }
    }

    /// Bytes in a pointer, array handle, or object reference.
    pub fn pointer_size(self) -> usize {
        self.as_u32() as usize / 8
    }
}

impl Default for Bits {
    fn default() -> Self {
        Bits::host()
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl FromStr for Bits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "32" => Ok(Bits::ThirtyTwo),
            "64" => Ok(Bits::SixtyFour),
            other => Err(format!("-m must be given as 32 or 64, not '{}'", other)),
        }
    }
}

/// Toggles for non-fatal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningFlags {
    /// Warn about literals like `0755`, which are decimal in Alpha.
    pub octalish: bool,
}

impl Default for WarningFlags {
    fn default() -> Self {
        WarningFlags { octalish: true }
    }
}

/// The warnings that `-W` can switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    Octalish,
}

/// One parsed `-W` value: `octalish` or `no-octalish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningToggle {
    pub kind: WarningKind,
    pub enable: bool,
}

impl FromStr for WarningToggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (enable, name) = match s.strip_prefix("no-") {
            Some(rest) => (false, rest),
            None => (true, s),
        };

        let kind = match name {
            "octalish" => WarningKind::Octalish,
            _ => return Err(format!("unknown warning option -W{}", s)),
        };
        Ok(WarningToggle { kind, enable })
    }
}

impl WarningFlags {
    pub fn set(&mut self, toggle: WarningToggle) {
        match toggle.kind {
            WarningKind::Octalish => self.octalish = toggle.enable,
        }
    }
}

/// Everything about the target and the requested diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompilationEnvironment {
    pub bits: Bits,
    pub warnings: WarningFlags,
}

impl CompilationEnvironment {
    pub fn new(bits: Bits) -> Self {
        CompilationEnvironment {
            bits,
            warnings: WarningFlags::default(),
        }
    }

    pub fn pointer_size(&self) -> usize {
        self.bits.pointer_size()
    }
}
