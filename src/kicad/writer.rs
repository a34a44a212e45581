//! Text writer for KiCad footprint (`.kicad_mod`) files.
//!
//! Emits the s-expression footprint format KiCad module files use:
//!
//! ```text
//! (module NAME (layer F.Cu) (tedit 0)
//!   (descr "...")
//!   (tags "...")
//!   (fp_text reference REF** (at 0 0) (layer F.SilkS)
//!     (effects (font (size 1 1) (thickness 0.15))))
//!   (fp_text value NAME (at 0 0) (layer F.Fab)
//!     (effects (font (size 1 1) (thickness 0.15))))
//!   (fp_line (start X1 Y1) (end X2 Y2) (layer LAYER) (width W))
//!   (pad N smd rect (at X Y) (size W H) (layers F.Cu F.Mask))
//! )
//! ```

use std::fmt::Write as _;

use super::primitives::{Layer, Line, Pad};
use super::Footprint;

/// Serialises a footprint to `.kicad_mod` s-expression text.
#[must_use]
pub fn encode_footprint(footprint: &Footprint) -> String {
    let mut out = String::new();
    let name = &footprint.name;

    let _ = writeln!(out, "(module {name} (layer F.Cu) (tedit 0)");
    if !footprint.description.is_empty() {
        let _ = writeln!(out, "  (descr \"{}\")", footprint.description);
    }
    if !footprint.tags.is_empty() {
        let _ = writeln!(out, "  (tags \"{}\")", footprint.tags);
    }
    encode_text(&mut out, "reference", "REF**", Layer::FSilkS);
    encode_text(&mut out, "value", name, Layer::FFab);

    for line in &footprint.lines {
        encode_line(&mut out, line);
    }
    for pad in &footprint.pads {
        encode_pad(&mut out, pad);
    }

    out.push_str(")\n");
    out
}

/// Writes one `fp_text` entry.
fn encode_text(out: &mut String, kind: &str, text: &str, layer: Layer) {
    let _ = writeln!(
        out,
        "  (fp_text {kind} {text} (at 0 0) (layer {})\n    (effects (font (size 1 1) (thickness 0.15))))",
        layer.name()
    );
}

/// Writes one `fp_line` entry.
fn encode_line(out: &mut String, line: &Line) {
    let _ = writeln!(
        out,
        "  (fp_line (start {} {}) (end {} {}) (layer {}) (width {}))",
        fmt_num(line.x1),
        fmt_num(line.y1),
        fmt_num(line.x2),
        fmt_num(line.y2),
        line.layer.name(),
        fmt_num(line.width),
    );
}

/// Writes one `pad` entry.
fn encode_pad(out: &mut String, pad: &Pad) {
    let layers = pad
        .layers
        .iter()
        .map(|l| l.name())
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(
        out,
        "  (pad {} smd rect (at {} {}) (size {} {}) (layers {layers})",
        pad.number,
        fmt_num(pad.x),
        fmt_num(pad.y),
        fmt_num(pad.width),
        fmt_num(pad.height),
    );
    if let Some(margin) = pad.solder_mask_margin {
        let _ = write!(out, " (solder_mask_margin {})", fmt_num(margin));
    }
    out.push_str(")\n");
}

/// Formats a coordinate with six decimal places and trailing zeros trimmed,
/// the way KiCad itself writes numbers.
fn fmt_num(value: f64) -> String {
    let mut s = format!("{value:.6}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = String::from("0");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(25.4), "25.4");
        assert_eq!(fmt_num(0.0508), "0.0508");
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.000_000_4), "0");
        assert_eq!(fmt_num(-2.5), "-2.5");
    }

    #[test]
    fn encode_minimal_module() {
        let footprint = Footprint::new("test-pads");
        let text = encode_footprint(&footprint);
        assert!(text.starts_with("(module test-pads (layer F.Cu)"));
        assert!(text.contains("(fp_text reference REF**"));
        assert!(text.contains("(fp_text value test-pads"));
        assert!(text.trim_end().ends_with(')'));
    }

    #[test]
    fn encode_pad_entry() {
        let mut footprint = Footprint::new("p");
        footprint.add_pad(Pad::smt_rect(7, 1.5, -2.0, 0.0508, 3.4544).with_solder_mask_margin(0.25));
        let text = encode_footprint(&footprint);
        assert!(text.contains(
            "(pad 7 smd rect (at 1.5 -2) (size 0.0508 3.4544) (layers F.Cu F.Mask) (solder_mask_margin 0.25))"
        ));
    }

    #[test]
    fn encode_line_entry() {
        let mut footprint = Footprint::new("p");
        footprint.add_line(Line::new(0.0, 0.0, 0.0, 8.38, Layer::EdgeCuts, 0.15));
        let text = encode_footprint(&footprint);
        assert!(text.contains("(fp_line (start 0 0) (end 0 8.38) (layer Edge.Cuts) (width 0.15))"));
    }

    #[test]
    fn description_and_tags_are_quoted() {
        let mut footprint = Footprint::new("z");
        footprint.description = String::from("footprint for z");
        footprint.tags = String::from("zacc footprint z");
        let text = encode_footprint(&footprint);
        assert!(text.contains("(descr \"footprint for z\")"));
        assert!(text.contains("(tags \"zacc footprint z\")"));
    }
}
