/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the DBT IR types library.

--*/

mod error;
mod macros;

pub use crate::error::{CodecError, CodecErrorCause};

/// RISCV Address width
pub type RvAddr = u64;

/// Raw instruction word. Compressed instructions occupy the low 16 bits.
pub type RvWord = u32;
