use crc15::*;

fn message(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(37).wrapping_add(seed))
        .collect()
}

fn embedded(data: &[u8], config: CrcConfig) -> Vec<u8> {
    let mut buffer = data.to_vec();
    buffer.extend_from_slice(&[0; TRAILER_LEN]);
    let crc = compute_crc15(&buffer, config).unwrap();
    embed_checksum(crc, &mut buffer, data.len(), config).unwrap();
    buffer
}

#[test]
fn roundtrip_to_zero_every_length_and_config() {
    for config in CrcConfig::ALL {
        for len in MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN {
            for seed in [0x00, 0x5A, 0xFF] {
                let data = message(len, seed);
                let buffer = embedded(&data, config);
                assert_eq!(
                    check_integrity(&buffer, len, config),
                    Ok(Integrity::Intact),
                    "{config:?} len {len} seed {seed:#04x}"
                );
                assert_eq!(compute_crc15(&buffer, config), Ok(0));
            }
        }
    }
}

#[test]
fn boundary_lengths() {
    for config in CrcConfig::ALL {
        let shortest = protect(b"A", config).unwrap();
        assert_eq!(shortest.verify(), Ok(Integrity::Intact));

        let longest = protect(b"Hello World!!!", config).unwrap();
        assert_eq!(longest.data.len(), MAX_MESSAGE_LEN);
        assert_eq!(longest.verify(), Ok(Integrity::Intact));
    }
}

#[test]
fn detects_every_single_bit_error() {
    for config in CrcConfig::ALL {
        for data in [[0x41, 0x42], [0x00, 0x00], [0xFF, 0x81]] {
            let buffer = embedded(&data, config);
            for bit in 0..data.len() * 8 {
                let mut corrupted = buffer.clone();
                corrupted[bit / 8] ^= 1 << (bit % 8);
                let integrity = check_integrity(&corrupted, data.len(), config).unwrap();
                assert!(
                    matches!(integrity, Integrity::Corrupted(r) if r != 0),
                    "{config:?} {data:02x?} bit {bit} undetected"
                );
            }
        }
    }
}

#[test]
fn detects_single_bit_errors_in_long_messages() {
    let config = CrcConfig::default();
    let data = message(MAX_MESSAGE_LEN, 0x13);
    let buffer = embedded(&data, config);
    for bit in 0..data.len() * 8 {
        let mut corrupted = buffer.clone();
        corrupted[bit / 8] ^= 1 << (bit % 8);
        assert!(!check_integrity(&corrupted, data.len(), config)
            .unwrap()
            .is_intact());
    }
}

#[test]
fn embedding_leaves_data_untouched() {
    for config in CrcConfig::ALL {
        for len in MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN {
            let data = message(len, 0xA5);
            let mut buffer = data.clone();
            buffer.extend_from_slice(&[0xEE; TRAILER_LEN]);
            embed_checksum(0x7FFF, &mut buffer, len, config).unwrap();
            assert_eq!(&buffer[..len], &data[..]);
        }
    }
}

#[test]
fn mismatched_config_does_not_validate() {
    let buffer = embedded(b"AB", CrcConfig::PRODUCTION);
    assert_eq!(
        check_integrity(&buffer, 2, CrcConfig::PRODUCTION),
        Ok(Integrity::Intact)
    );
    assert!(!check_integrity(&buffer, 2, CrcConfig::REGULAR)
        .unwrap()
        .is_intact());
}

#[test]
fn known_vector_ab() {
    let input = hex::decode("41420000").unwrap();
    assert_eq!(compute_crc15(&input, CrcConfig::PRODUCTION), Ok(0x54FB));
    assert_eq!(embedded(b"AB", CrcConfig::PRODUCTION), hex::decode("41422ADF").unwrap());
}
