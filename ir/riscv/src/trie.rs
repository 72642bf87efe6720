/*++

Licensed under the Apache-2.0 license.

File Name:

    trie.rs

Abstract:

    File contains the dispatch trie for 32-bit encodings. The trie is a flat
    array built breadth-first from the descriptor table: each interior node
    extracts a bit field of the raw word and adds it to the index of its
    first child. Leaves hold a descriptor index or the not-found sentinel.

--*/

use crate::descriptor::InstrDescriptor;
use crate::table::INSTR_TABLE;
use lazy_static::lazy_static;
use std::collections::VecDeque;

/// Leaf marker for an undefined encoding.
pub(crate) const NOT_FOUND: u16 = u16::MAX;

/// Upper bound on the walk length. The builder never nests this deep.
const MAX_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrieNode {
    /// Width of the dispatch field, as a bit mask. Zero marks a leaf.
    pub mask: u8,
    /// Right shift applied to the raw word before masking.
    pub shift: u8,
    /// First-child index for interior nodes, descriptor index for leaves.
    pub index: u16,
}

const LEAF_NOT_FOUND: TrieNode = TrieNode {
    mask: 0,
    shift: 0,
    index: NOT_FOUND,
};

lazy_static! {
    static ref INSTR_TRIE: Vec<TrieNode> = build_trie(&INSTR_TABLE);
}

/// Walk the trie for a raw 32-bit word. Returns the descriptor table index.
pub(crate) fn lookup(word: u32) -> Option<u16> {
    let trie: &[TrieNode] = &INSTR_TRIE;
    let mut index = 0usize;
    for _ in 0..MAX_DEPTH {
        let node = trie.get(index)?;
        if node.mask == 0 {
            if node.index == NOT_FOUND {
                return None;
            }
            return Some(node.index);
        }
        index = node.index as usize + ((word >> node.shift) & node.mask as u32) as usize;
    }
    debug_assert!(false, "dispatch trie deeper than MAX_DEPTH");
    None
}

/// Build the trie over the non-compressed descriptors.
///
/// Compressed encodings dispatch by quadrant instead and never reach the
/// trie. Integrity violations in the descriptor table are programmer errors
/// and abort construction.
fn build_trie(table: &[InstrDescriptor]) -> Vec<TrieNode> {
    // root extracts the primary opcode field, children follow contiguously
    let mut trie = vec![TrieNode {
        mask: 0x7f,
        shift: 0,
        index: 1,
    }];
    trie.resize(1 + 0x80, LEAF_NOT_FOUND);

    let mut work: VecDeque<(usize, Vec<u16>)> = VecDeque::new();
    for op in 0..0x80u32 {
        let bucket: Vec<u16> = table
            .iter()
            .enumerate()
            .filter(|(_, desc)| !desc.is_compressed() && desc.match_bits & 0x7f == op)
            .map(|(index, _)| index as u16)
            .collect();
        if !bucket.is_empty() {
            work.push_back((1 + op as usize, bucket));
        }
    }

    while let Some((node, bucket)) = work.pop_front() {
        if let [single] = bucket[..] {
            trie[node] = TrieNode {
                mask: 0,
                shift: 0,
                index: single,
            };
            continue;
        }

        // dispatch on the lowest run of fixed bits whose values differ,
        // restricted to bits fixed in every candidate
        let fixed = bucket
            .iter()
            .fold(!0u32, |acc, &i| acc & table[i as usize].mask_bits);
        let and_match = bucket
            .iter()
            .fold(!0u32, |acc, &i| acc & table[i as usize].match_bits);
        let or_match = bucket
            .iter()
            .fold(0u32, |acc, &i| acc | table[i as usize].match_bits);
        let differing = fixed & (and_match ^ or_match);
        assert_ne!(differing, 0, "indistinguishable patterns in one bucket");

        let shift = differing.trailing_zeros();
        let run = (differing >> shift).trailing_ones();
        assert!(run <= 8, "dispatch field wider than eight bits");
        let mask = (1u32 << run) - 1;

        let first_child = trie.len();
        assert!(first_child + mask as usize <= NOT_FOUND as usize - 1);
        for value in 0..=mask {
            let child: Vec<u16> = bucket
                .iter()
                .copied()
                .filter(|&i| (table[i as usize].match_bits >> shift) & mask == value)
                .collect();
            let index = trie.len();
            trie.push(LEAF_NOT_FOUND);
            if !child.is_empty() {
                work.push_back((index, child));
            }
        }
        trie[node] = TrieNode {
            mask: mask as u8,
            shift: shift as u8,
            index: first_child as u16,
        };
    }
    trie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_finds_itself() {
        for (index, desc) in INSTR_TABLE.iter().enumerate() {
            if desc.is_compressed() {
                continue;
            }
            assert_eq!(
                lookup(desc.match_bits),
                Some(index as u16),
                "{}",
                desc.name
            );
        }
    }

    #[test]
    fn test_operand_bits_do_not_change_dispatch() {
        use crate::opcode::Opcode;
        // addi a0, a0, 1
        assert_eq!(
            lookup(0x0015_0513).map(|i| INSTR_TABLE[i as usize].opcode),
            Some(Opcode::Addi)
        );
        // srai a1, ra, 3 separates from srli on funct7
        assert_eq!(
            lookup(0x4030_d593).map(|i| INSTR_TABLE[i as usize].opcode),
            Some(Opcode::Srai)
        );
        assert_eq!(
            lookup(0x0030_d593).map(|i| INSTR_TABLE[i as usize].opcode),
            Some(Opcode::Srli)
        );
        // sret and mret only differ deep in the funct12 field
        assert_eq!(
            lookup(0x1020_0073).map(|i| INSTR_TABLE[i as usize].opcode),
            Some(Opcode::Sret)
        );
        assert_eq!(
            lookup(0x3020_0073).map(|i| INSTR_TABLE[i as usize].opcode),
            Some(Opcode::Mret)
        );
    }

    #[test]
    fn test_undefined_encodings_miss() {
        // unused primary opcode
        assert_eq!(lookup(0xffff_ffff), None);
        // load opcode with undefined funct3 0b111
        assert_eq!(lookup(0x0000_7003), None);
    }
}
