use crate::instr::Addr;

/// One finished entry for a single opcode byte.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OpcodeRecord {
    pub name: String,
    pub mode: Addr,
    pub cycles: u32,
}

/// The 256-slot lookup table under construction. Owned by the run and threaded
/// through the pipeline; slots left vacant are defaulted at emission, not here.
pub struct OpcodeTable {
    slots: [Option<OpcodeRecord>; 256],
}

impl Default for OpcodeTable {
    fn default() -> Self {
        const VACANT: Option<OpcodeRecord> = None;
        OpcodeTable { slots: [VACANT; 256] }
    }
}

impl OpcodeTable {
    /// First writer wins; a later record for an occupied slot is dropped.
    pub fn insert_if_vacant(&mut self, opcode: u8, rec: OpcodeRecord) -> bool {
        let slot = &mut self.slots[opcode as usize];
        match slot {
            Some(_) => false,
            None => {
                *slot = Some(rec);
                true
            }
        }
    }

    pub fn get(&self, opcode: u8) -> Option<&OpcodeRecord> {
        self.slots[opcode as usize].as_ref()
    }

    pub fn slots(&self) -> &[Option<OpcodeRecord>] {
        &self.slots
    }
}
