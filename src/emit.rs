use crate::instr::Addr;
use crate::lut::{OpcodeRecord, OpcodeTable};
use std::fmt::Write;

/// Render the finished table as a Rust array literal, one entry per opcode in
/// ascending order. Slots no table row ever claimed get the synthetic halt
/// record: the page lists those opcodes (0x02, 0x12, ...) only as free text,
/// never as a table row.
pub fn render(lut: &OpcodeTable) -> String {
    let mut out = String::new();
    out.push_str("// generated by lut6502 from the masswerk 6502 instruction set reference\n");
    out.push_str("pub static OPCODE_LUT: [Entry; 256] = [\n");
    for (opcode, slot) in lut.slots().iter().enumerate() {
        let (line, note) = match slot {
            Some(rec) => (entry(rec), ""),
            None => (entry(&halt()), " (JAM/KIL)"),
        };
        writeln!(&mut out, "{:<56} // 0x{:02X}{}", line, opcode, note).unwrap();
    }
    out.push_str("];\n");
    out
}

fn halt() -> OpcodeRecord {
    OpcodeRecord { name: "JAM".to_owned(), mode: Addr::Imp, cycles: 0 }
}

fn entry(rec: &OpcodeRecord) -> String {
    format!(
        "    Entry {{ name: {:?}, mode: Addr::{:?}, cycles: {} }},",
        rec.name, rec.mode, rec.cycles
    )
}
