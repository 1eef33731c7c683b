//! One-shot commands of the `bch11` binary

use anyhow::{Context, Result};
use bch11_core::Codeword;
use bch11_decoder::{decode, ErrorClass, Syndromes};
use std::io::Write;
use tracing::info;

use crate::config::{OutputFormat, ShellConfig};
use crate::report::{render_json, render_text};

/// Join command line tokens into one codeword and parse it
pub fn parse_word_args(tokens: &[String]) -> Result<Codeword> {
    let text = tokens.join(" ");
    text.parse::<Codeword>()
        .with_context(|| format!("Invalid codeword {:?}", text))
}

/// Decode a single word and print the result
pub fn run_decode<W: Write>(word: &Codeword, config: &ShellConfig, out: &mut W) -> Result<ErrorClass> {
    let outcome = decode(word).with_context(|| format!("Decoder failure on {}", word))?;
    info!("Decoded {} as {}", word, outcome.class());

    match config.format {
        OutputFormat::Text => writeln!(out, "{}", render_text(&outcome, config.rule_width, config.show_syndromes))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(&outcome)?)?,
    }

    Ok(outcome.class())
}

/// Print the syndromes and locator coefficients of a word
pub fn run_syndrome<W: Write>(word: &Codeword, format: OutputFormat, out: &mut W) -> Result<()> {
    let syndromes = Syndromes::compute(word);
    let coefficients = syndromes.locator_coefficients();

    match format {
        OutputFormat::Text => {
            writeln!(out, "Word:         {}", word)?;
            writeln!(out, "Syndromes:    {}", syndromes)?;
            writeln!(out, "Coefficients: {}", coefficients)?;
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "word": word,
                "syndromes": syndromes,
                "p": coefficients.p,
                "q": coefficients.q,
                "r": coefficients.r,
                "discriminant": coefficients.discriminant(),
            });
            writeln!(out, "{}", value)?;
        }
    }

    Ok(())
}

/// Show code parameters and input format
pub fn show_info<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "=== bch11 - BCH decoder over GF(11) ===")?;
    writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;

    writeln!(out, "\n=== Code Parameters ===")?;
    writeln!(out, "  • Field:       GF(11), symbols 0-10")?;
    writeln!(out, "  • Length:      10 symbols, positions 1-10")?;
    writeln!(out, "  • Syndromes:   S_k = sum y_i * i^(k-1), k = 1..4")?;
    writeln!(out, "  • Correction:  up to 2 symbol errors, 3+ reported")?;

    writeln!(out, "\n=== Input Format ===")?;
    writeln!(out, "  • Separated:   3 7 4 5 1 9 5 8 7 6  or  3,7,4,5,1,9,5,8,7,6")?;
    writeln!(out, "  • Contiguous:  3745195876 (single digits only)")?;
    writeln!(out, "  • Brackets are optional: [10, 7, 4, 5, 1, 9, 5, 8, 7, 6]")?;

    writeln!(out, "\n=== Example Usage ===")?;
    writeln!(out, "  Shell:    bch11")?;
    writeln!(out, "  Decode:   bch11 decode 3945195876")?;
    writeln!(out, "  JSON:     bch11 decode --format json 3 7 1 5 1 9 5 0 7 6")?;
    writeln!(out, "  Inspect:  bch11 syndrome 3945195876")?;

    Ok(())
}
