//! Fuzz smoke tests for the tokenizer and emitter.
//!
//! Random, adversarial, and edge-case inputs are fed through the pipeline to
//! verify it never panics and that the structural invariants hold on every
//! output: byte-exact round-trip, FieldData/FieldSeparator pairing, and
//! determinism.
//!
//! No external crate dependencies are used — a simple deterministic PRNG
//! provides reproducible randomness.

mod common;

use common::assert_pairing;
use zpl_composer_core::{Token, emit, tokenize, tokenize_bytes};

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range(&mut self, max: usize) -> usize {
        (self.next() as usize) % max
    }

    fn gen_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next() as u8).collect()
    }
}

// ─── Invariant checking ─────────────────────────────────────────────────────

/// Run a byte input through the pipeline and check every invariant.
fn fuzz_bytes(input: &[u8]) {
    let toks = tokenize_bytes(input);
    assert_eq!(
        emit(&toks),
        input,
        "round-trip failed for {} bytes: {:?}",
        input.len(),
        truncate_bytes(input, 120),
    );
    assert_pairing(&toks, &format!("{:?}", truncate_bytes(input, 120)));
    assert_eq!(toks, tokenize_bytes(input), "tokenizer not deterministic");
}

/// Run a text input through the pipeline and check every invariant, plus
/// the text-only guarantee that no byte runs appear.
fn fuzz_text(input: &str) {
    let toks = tokenize(input);
    assert_eq!(
        emit(&toks),
        input.as_bytes(),
        "round-trip failed for input {input:?}"
    );
    assert!(
        toks.iter().all(|t| !matches!(t, Token::ByteRun { .. })),
        "ByteRun from text input {input:?}"
    );
    assert_pairing(&toks, input);
    assert_eq!(toks, tokenize(input), "tokenizer not deterministic");
}

fn truncate_bytes(b: &[u8], max: usize) -> Vec<u8> {
    b[..b.len().min(max)].to_vec()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category A: Random inputs
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_random_bytes() {
    let mut rng = SimpleRng::new(0xDEAD_BEEF);
    for len in [0, 1, 2, 5, 10, 50, 100, 500, 1000, 5000] {
        for _ in 0..20 {
            fuzz_bytes(&rng.gen_bytes(len));
        }
    }
}

#[test]
fn no_panic_random_ascii() {
    let mut rng = SimpleRng::new(0x1234_5678);
    let ascii_chars: Vec<u8> = (0x20..=0x7E).collect();
    for len in [0, 1, 5, 20, 100, 500, 2000] {
        for _ in 0..20 {
            let s: String = (0..len)
                .map(|_| ascii_chars[rng.gen_range(ascii_chars.len())] as char)
                .collect();
            fuzz_text(&s);
        }
    }
}

#[test]
fn no_panic_random_zpl_like() {
    let mut rng = SimpleRng::new(0xBAAD_F00D);
    let alphabet: &[u8] = b"^~XAZFOFDFS,01234567890ABCDEFabcdef \n";
    for len in [1, 5, 20, 100, 500] {
        for _ in 0..30 {
            let s: String = (0..len)
                .map(|_| alphabet[rng.gen_range(alphabet.len())] as char)
                .collect();
            fuzz_text(&s);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category B: Adversarial mark sequences
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_adversarial_marks() {
    let cases = [
        "^",
        "~",
        "^^",
        "~~",
        "^^^^",
        "~~~~",
        "^~^~^~",
        "~^~^~^",
        "^~",
        "~^",
        "^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
        "^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~^~",
    ];
    for input in &cases {
        fuzz_text(input);
    }
}

#[test]
fn no_panic_marks_with_non_ascii() {
    let cases = [
        "^é",
        "~日本語",
        "^🎉",
        "~λ",
        "^XAé^XZ",
        "^FDñoño^FS",
        "^XA^FD中文^FS^XZ",
        "^±²³",
        "~µ¶·",
        "^XA^FD\u{FEFF}^FS^XZ", // BOM
        "^XA^FD\u{200B}^FS^XZ", // zero-width space
    ];
    for input in &cases {
        fuzz_text(input);
    }
}

#[test]
fn no_panic_marks_at_eof() {
    let cases = [
        "^XA^",
        "^XA~",
        "^XA^FO0,0^",
        "^XA^FD",
        "^XA^FDhello",
        "^XA^A",
        "^XA^A0",
    ];
    for input in &cases {
        fuzz_text(input);
    }
}

#[test]
fn no_panic_truncated_utf8_after_mark() {
    let cases: &[&[u8]] = &[
        b"^\xC3",
        b"^\xE2\x82",
        b"^\xF0\x9F\x8E",
        b"~\xFF",
        b"^XA^\xC3^XZ",
        b"^FD\xC3^FS",
    ];
    for input in cases {
        fuzz_bytes(input);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category C: Pathological repetition
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_repeated_format_starts() {
    fuzz_text(&"^XA".repeat(10_000));
}

#[test]
fn no_panic_repeated_labels() {
    fuzz_text(&"^XA^XZ".repeat(1_000));
}

#[test]
fn no_panic_repeated_field_blocks() {
    let mut input = String::from("^XA");
    for _ in 0..1_000 {
        input.push_str("^FDtest^FS");
    }
    input.push_str("^XZ");
    fuzz_text(&input);
}

#[test]
fn no_panic_very_long_field_data() {
    let content = "A".repeat(100_000);
    fuzz_text(&format!("^XA^FD{content}^FS^XZ"));
}

#[test]
fn no_panic_very_long_arg_string() {
    fuzz_text(&format!("^XA^FO{}^XZ", ",0".repeat(5_000)));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category D: Edge-case strings
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_empty_and_single_chars() {
    let cases = ["", "\n", "\r", "\t", " ", "\0", ",", ";", "X", "A", "Z"];
    for input in &cases {
        fuzz_text(input);
    }
}

#[test]
fn no_panic_null_bytes() {
    let cases = [
        "\0",
        "\0\0\0\0\0\0\0\0\0\0",
        "^XA\0^XZ",
        "^XA^FD\0\0\0^FS^XZ",
        "\0^XA\0^FO0,0\0^XZ\0",
    ];
    for input in &cases {
        fuzz_text(input);
    }
}

#[test]
fn no_panic_unicode_variety() {
    let cases = [
        "^XA^FD\u{0000}^FS^XZ",
        "^XA^FD\u{FFFF}^FS^XZ",
        "^XA^FD\u{10FFFF}^FS^XZ",
        "^XA^FDé à ü ñ ö^FS^XZ",
        "^XA^FD🎉🚀💻🔥^FS^XZ",
        "^XA^FDمرحبا^FS^XZ",
        "^XA^FDΑλφα^FS^XZ",
        "^XA^FD\u{200E}\u{200F}\u{200B}^FS^XZ",
        "^XA^FD\u{202A}\u{202B}\u{202C}^FS^XZ",
    ];
    for input in &cases {
        fuzz_text(input);
    }
}

#[test]
fn no_panic_all_single_bytes() {
    for b in 0u8..=255 {
        fuzz_bytes(&[b]);
    }
}

#[test]
fn no_panic_interesting_byte_pairs() {
    let interesting: &[u8] = &[
        0, 1, 9, 10, 13, 32, 44, 59, 64, 65, 68, 70, 83, 88, 90, 94, 126, 127, 128, 195, 255,
    ];
    for &a in interesting {
        for &b in interesting {
            fuzz_bytes(&[a, b]);
        }
    }
}

#[test]
fn no_panic_binary_blob_with_embedded_marks() {
    let mut rng = SimpleRng::new(0xFACE_FEED);
    for _ in 0..50 {
        let mut blob = rng.gen_bytes(200);
        // Sprinkle mark bytes through the blob so command parsing engages.
        for i in (0..blob.len()).step_by(17) {
            blob[i] = b'^';
        }
        let mut input = b"^XA^FD".to_vec();
        input.extend_from_slice(&blob);
        input.extend_from_slice(b"^FS^XZ");
        fuzz_bytes(&input);
    }
}
