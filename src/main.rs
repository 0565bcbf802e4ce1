use std::{
    io::{self, prelude::*},
    process::ExitCode,
};

use huffcode::{huffman_encode, report};

fn main() -> io::Result<ExitCode> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let encoded = match huffman_encode(&input) {
        Ok(encoded) => encoded,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", encoded.bits);
    println!();
    println!("{:<10} {:>6} {:>6}  code", "char", "freq", "len");
    for row in report::table_rows(&encoded) {
        println!(
            "{:<10} {:>6} {:>6}  {}",
            row.symbol, row.frequency, row.length, row.code
        );
    }

    let chars = input.chars().count();
    let bytes = report::encoded_bytes(&encoded.bits);
    println!();
    println!("input:  {chars} characters");
    println!("output: {} bits ({bytes} bytes)", encoded.bits.len());
    println!("ratio:  {:.1} %", report::compression_ratio(bytes, chars));

    Ok(ExitCode::SUCCESS)
}
