/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the RISC-V instruction codec library.

--*/

mod bits;
mod decode;
mod descriptor;
mod encode;
mod fields;
pub mod fmt16;
pub mod fmt32;
mod instr;
mod opcode;
mod operand;
mod quadrant;
mod reg;
mod table;
mod trie;
mod width;

pub use crate::decode::{decode, decode_from_copy};
pub use crate::descriptor::{lookup_descriptor, Fld, InstrDescriptor, OpndSpec};
pub use crate::encode::encode;
pub use crate::instr::{Instr, MAX_DSTS, MAX_SRCS};
pub use crate::opcode::{IsaExt, Opcode};
pub use crate::operand::{Operand, OpndSize, RvReg, Target};
pub use crate::reg::{FReg, XReg};
pub use crate::width::instr_width;
