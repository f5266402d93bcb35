#![allow(dead_code)]

// ============================================================================
// Test Data
// ============================================================================

/// A short incoming byte stream.
pub const TEST_DATA: [u8; 5] = [0xAA, 0xFE, 0x23, 0x4D, 0x44];

pub type DataParser = fn(&[u8]) -> String;

// ============================================================================
// Test Parsers
// ============================================================================

fn hex_join<'a>(bytes: impl Iterator<Item = &'a u8>) -> String {
    bytes
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_forward(bytes: &[u8]) -> String {
    hex_join(bytes.iter())
}

pub fn print_backward(bytes: &[u8]) -> String {
    hex_join(bytes.iter().rev())
}

pub fn sum_all(bytes: &[u8]) -> String {
    let sum: u32 = bytes.iter().map(|&b| u32::from(b)).sum();
    format!("Sum: {sum}")
}

// ============================================================================
// Integer Ops
// ============================================================================

pub type IntOp = fn(i32) -> i32;

pub fn add_one(x: i32) -> i32 {
    x + 1
}

pub fn square(x: i32) -> i32 {
    x * x
}

pub fn negate(x: i32) -> i32 {
    -x
}

pub fn doubler(x: i32) -> i32 {
    x * 2
}
