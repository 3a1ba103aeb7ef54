#[macro_use]
extern crate strum_macros;

mod emit;
mod instr;
mod lut;
mod scrape;

use structopt::StructOpt;

/// Generate a 256-entry 6502 opcode lookup table from the masswerk
/// "6502 Instruction Set" reference page.
///
/// The generated table (stdout) covers the documented standard and illegal
/// instructions; WDC/Rockwell extension sections of the page are ignored.
#[derive(StructOpt)]
struct Args {
    /// Saved copy of the reference page, e.g. "6502 Instruction Set.html"
    #[structopt(parse(from_os_str))]
    input: std::path::PathBuf,
}

fn main() {
    let args = Args::from_args();
    let html = match std::fs::read_to_string(&args.input) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("cannot read {}: {}", args.input.display(), err);
            std::process::exit(1);
        }
    };
    let doc = scraper::Html::parse_document(&html);
    let lut = scrape::extract(&doc);
    print!("{}", emit::render(&lut));
}
