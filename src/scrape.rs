use crate::instr;
use crate::lut::{OpcodeRecord, OpcodeTable};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref H2_OR_TABLE: Selector = Selector::parse("h2, table").unwrap();
    static ref TR: Selector = Selector::parse("tr").unwrap();
    static ref TD: Selector = Selector::parse("td").unwrap();
}

/// Reference sections eligible for extraction. Everything else on the page
/// (WDC/Rockwell extension sets, appendices) is skipped wholesale.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumString)]
enum Section {
    #[strum(serialize = "details")]
    Standard,
    #[strum(serialize = "illegals")]
    Illegal,
}

/// One row of an accepted table. The unofficial-NOP tables drop the assembler
/// column and lead with the opcode, hence the second shape.
#[derive(Debug, PartialEq, Eq)]
enum RowClass {
    Generic {
        addressing: String,
        assembler: String,
        opcode: String,
        cycles: String,
    },
    Nop {
        opcode: String,
        addressing: String,
        cycles: String,
    },
    Skip,
}

/// Walk the document once per section and fill the table write-if-vacant.
/// Standard tables are visited before illegal ones, whatever their document
/// order, so an illegal-section row reusing a standard opcode can never
/// displace the standard definition.
pub fn extract(doc: &Html) -> OpcodeTable {
    let mut lut = OpcodeTable::default();
    for &section in &[Section::Standard, Section::Illegal] {
        for table in section_tables(doc, section) {
            scrape_table(table, &mut lut);
        }
    }
    lut
}

/// Tables whose nearest preceding <h2> carries the wanted section id, in
/// document order. Tables before the first <h2>, or under an <h2> with an
/// unknown or missing id, belong to no section.
fn section_tables<'a>(doc: &'a Html, want: Section) -> Vec<ElementRef<'a>> {
    let mut current: Option<Section> = None;
    let mut tables = Vec::new();
    for el in doc.select(&H2_OR_TABLE) {
        match el.value().name() {
            "h2" => current = el.value().attr("id").and_then(|id| id.parse().ok()),
            "table" if current == Some(want) => tables.push(el),
            _ => {}
        }
    }
    tables
}

fn scrape_table(table: ElementRef, lut: &mut OpcodeTable) {
    // masswerk tags the mnemonic-less NOP tables with class="nops"
    let nop_table = table
        .value()
        .attr("class")
        .map_or(false, |classes| classes.split_whitespace().any(|c| c == "nops"));
    for row in table.select(&TR) {
        if let Some((opcode, rec)) = record_from_row(classify_row(row, nop_table)) {
            lut.insert_if_vacant(opcode, rec);
        }
    }
}

fn classify_row(row: ElementRef, nop_table: bool) -> RowClass {
    let cells: Vec<String> = row.select(&TD).map(cell_text).collect();
    match cells.as_slice() {
        // addressing | assembler | opc | bytes | cycles (bytes unused)
        [addressing, assembler, opcode, _bytes, cycles, ..] => RowClass::Generic {
            addressing: addressing.clone(),
            assembler: assembler.clone(),
            opcode: opcode.clone(),
            cycles: cycles.clone(),
        },
        // opc | addressing | bytes | cycles (bytes unused)
        [opcode, addressing, _bytes, cycles] if nop_table => RowClass::Nop {
            opcode: opcode.clone(),
            addressing: addressing.clone(),
            cycles: cycles.clone(),
        },
        _ => RowClass::Skip,
    }
}

fn cell_text(td: ElementRef) -> String {
    td.text().collect::<String>().trim().to_owned()
}

fn record_from_row(row: RowClass) -> Option<(u8, OpcodeRecord)> {
    let (opcode_text, name, addressing, cycles) = match row {
        RowClass::Generic { addressing, assembler, opcode, cycles } => {
            (opcode, instr::mnemonic(&assembler)?, addressing, cycles)
        }
        RowClass::Nop { opcode, addressing, cycles } => {
            (opcode, "NOP".to_owned(), addressing, cycles)
        }
        RowClass::Skip => return None,
    };
    let opcode = match u8::from_str_radix(&opcode_text, 16) {
        Ok(opcode) => opcode,
        Err(_) => {
            eprintln!("skipping row, unparseable opcode {:?}", opcode_text);
            return None;
        }
    };
    let rec = OpcodeRecord {
        name,
        mode: instr::addr_mode(&addressing),
        cycles: instr::cycle_count(&cycles),
    };
    Some((opcode, rec))
}
