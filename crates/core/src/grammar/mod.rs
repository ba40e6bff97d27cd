/// JSON serialization helpers for token sequences.
pub mod dump;
/// ZPL emitter — token sequence back to exact bytes.
pub mod emit;
/// ZPL tokenizer — raw text or bytes into a token sequence.
pub mod lexer;
/// Mnemonic grammar: mark characters and command-name widths.
pub mod mnemonics;
/// Lossless token model for ZPL documents.
pub mod token;
