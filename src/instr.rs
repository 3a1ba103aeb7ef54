use lazy_static::lazy_static;
use regex::Regex;

/// http://www.obelisk.me.uk/6502/addressing.html
///
/// The serialize attrs match the addressing column of the masswerk page
/// verbatim; `addr_mode` is the only way in.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumString)]
pub enum Addr {
    #[strum(serialize = "implied")]
    Imp,
    #[strum(serialize = "accumulator")]
    Acc,
    #[strum(serialize = "immediate")]
    Imm,
    #[strum(serialize = "zeropage")]
    Zpi,
    #[strum(serialize = "zeropage,X")]
    ZpX,
    #[strum(serialize = "zeropage,Y")]
    ZpY,
    #[strum(serialize = "relative")]
    PCr,
    #[strum(serialize = "absolute")]
    Abs,
    #[strum(serialize = "absolute,X")]
    AbX,
    #[strum(serialize = "absolute,Y")]
    AbY,
    #[strum(serialize = "indirect")]
    Ind,
    #[strum(serialize = "(indirect,X)")]
    IzX,
    #[strum(serialize = "(indirect),Y")]
    IzY,
}

/// The page is inconsistent about the accumulator cell ("accumulator",
/// "A (accumulator)", ...), so the substring check runs before the phrase
/// lookup. Anything else unrecognized falls back to implied.
pub fn addr_mode(raw: &str) -> Addr {
    if raw.contains("accumulator") {
        return Addr::Acc;
    }
    raw.parse().unwrap_or(Addr::Imp)
}

/// First token of the assembler column ("LDA #oper" => "LDA", the operand
/// placeholder is dropped). The page uses KIL and HLT interchangeably for the
/// halt instruction; both become JAM.
pub fn mnemonic(asm: &str) -> Option<String> {
    let name = asm.split_whitespace().next()?;
    Some(match name {
        "KIL" | "HLT" => "JAM".to_owned(),
        _ => name.to_owned(),
    })
}

/// Leading digit run of the cycles column. Footnote stars ("2*", "5**") mark
/// page-boundary penalties the table does not model; text without a leading
/// digit costs the baseline 2.
pub fn cycle_count(raw: &str) -> u32 {
    lazy_static! {
        static ref LEADING_DIGITS: Regex = Regex::new(r"^\d+").unwrap();
    }
    LEADING_DIGITS
        .find(raw)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_mode_phrase_map() {
        use maplit::hashmap;
        let tt = hashmap! {
            "immediate" => Addr::Imm,
            "zeropage" => Addr::Zpi,
            "zeropage,X" => Addr::ZpX,
            "zeropage,Y" => Addr::ZpY,
            "absolute" => Addr::Abs,
            "absolute,X" => Addr::AbX,
            "absolute,Y" => Addr::AbY,
            "(indirect,X)" => Addr::IzX,
            "(indirect),Y" => Addr::IzY,
            "indirect" => Addr::Ind,
            "relative" => Addr::PCr,
            "implied" => Addr::Imp,
            "accumulator" => Addr::Acc,
        };
        for (raw, exp) in tt {
            assert_eq!(addr_mode(raw), exp, "{:?}", raw);
        }
    }

    #[test]
    fn addr_mode_accumulator_text_always_wins() {
        assert_eq!(addr_mode("accumulator"), Addr::Acc);
        assert_eq!(addr_mode("A (accumulator)"), Addr::Acc);
        assert_eq!(addr_mode("accumulator "), Addr::Acc);
    }

    #[test]
    fn addr_mode_unknown_defaults_to_implied() {
        assert_eq!(addr_mode(""), Addr::Imp);
        assert_eq!(addr_mode("zeropage,Z"), Addr::Imp);
        assert_eq!(addr_mode("IMPLIED"), Addr::Imp);
    }

    #[test]
    fn mnemonic_takes_first_token() {
        assert_eq!(mnemonic("LDA #oper"), Some("LDA".to_owned()));
        assert_eq!(mnemonic("STA oper,X"), Some("STA".to_owned()));
        assert_eq!(mnemonic("   "), None);
    }

    #[test]
    fn mnemonic_jam_synonyms_collapse() {
        assert_eq!(mnemonic("KIL"), Some("JAM".to_owned()));
        assert_eq!(mnemonic("HLT"), Some("JAM".to_owned()));
        // already canonical stays canonical
        assert_eq!(mnemonic("JAM"), Some("JAM".to_owned()));
    }

    #[test]
    fn cycle_count_strips_footnote_stars() {
        assert_eq!(cycle_count("7"), 7);
        assert_eq!(cycle_count("2*"), 2);
        assert_eq!(cycle_count("5**"), 5);
    }

    #[test]
    fn cycle_count_falls_back_to_two() {
        assert_eq!(cycle_count(""), 2);
        assert_eq!(cycle_count("n/a"), 2);
        assert_eq!(cycle_count("*2"), 2);
    }
}
