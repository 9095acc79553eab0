use crc15::{check_integrity, format::bin16, protect, CrcConfig, Integrity};

fn main() {
    let config = CrcConfig::default();
    let message = protect(b"AB", config).expect("Protect failed");
    println!("message> {}", String::from_utf8_lossy(&message.data));
    println!("crc > {:x} - {}", message.crc, bin16(message.crc));
    println!(
        "trailer > {:02x} {:02x} - {}",
        message.trailer[0],
        message.trailer[1],
        bin16(u16::from_be_bytes(message.trailer))
    );

    let mut buffer = message.to_bytes();
    buffer[1] = b'a';

    match check_integrity(&buffer, message.data.len(), config).expect("Check failed") {
        Integrity::Intact => println!("CRC: 0. The data is OK"),
        Integrity::Corrupted(remainder) => println!("CRC: {remainder:x}. The data is not OK"),
    }
}
