//! Coefficient wire layout
//!
//! A filter section occupies five consecutive parameter words in the
//! order `B0, B1, A1, B2, A2`. A bandpass band is the highpass section
//! followed by the lowpass section, ten words total starting at the
//! band's head address.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{filter::FilterSection, fixed_point::FixedPoint};

/// Width of one parameter word on the wire.
pub const WORD_BYTES: usize = 4;

/// Words per filter section.
pub const SECTION_WORDS: usize = 5;

/// Words per bandpass band (highpass + lowpass sections).
pub const BAND_WORDS: usize = 2 * SECTION_WORDS;

/// Encodes a section into its five parameter words.
pub fn section_to_words(section: &FilterSection) -> [[u8; WORD_BYTES]; SECTION_WORDS] {
    [
        FixedPoint::from_f64(section.b0).to_bytes(),
        FixedPoint::from_f64(section.b1).to_bytes(),
        FixedPoint::from_f64(section.a1).to_bytes(),
        FixedPoint::from_f64(section.b2).to_bytes(),
        FixedPoint::from_f64(section.a2).to_bytes(),
    ]
}

/// Decodes five parameter words back into a section.
pub fn words_to_section(words: &[[u8; WORD_BYTES]; SECTION_WORDS]) -> FilterSection {
    FilterSection {
        b0: FixedPoint::from_bytes(words[0]).to_f64(),
        b1: FixedPoint::from_bytes(words[1]).to_f64(),
        a1: FixedPoint::from_bytes(words[2]).to_f64(),
        b2: FixedPoint::from_bytes(words[3]).to_f64(),
        a2: FixedPoint::from_bytes(words[4]).to_f64(),
    }
}

/// Serializes a bandpass cascade into the contiguous 10-word block
/// written at the band's head address.
pub fn band_to_bytes(highpass: &FilterSection, lowpass: &FilterSection) -> Bytes {
    let mut buf = BytesMut::with_capacity(BAND_WORDS * WORD_BYTES);
    for words in [section_to_words(highpass), section_to_words(lowpass)] {
        for word in words {
            buf.put_slice(&word);
        }
    }
    buf.freeze()
}

/// Splits raw parameter memory into words.
///
/// Panics when the buffer isn't a whole number of words; a partial
/// word can only come from a wiring bug, never from device state.
pub fn split_words(data: &[u8]) -> Vec<[u8; WORD_BYTES]> {
    assert!(
        data.len() % WORD_BYTES == 0,
        "parameter data length {} is not word-aligned",
        data.len()
    );
    data.chunks_exact(WORD_BYTES)
        .map(|chunk| chunk.try_into().unwrap())
        .collect()
}

#[cfg(test)]
mod test {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn section_word_order() {
        let section = FilterSection {
            b0: 1.0,
            b1: 2.0,
            b2: 3.0,
            a1: 4.0,
            a2: 5.0,
        };
        let words = section_to_words(&section);
        let decoded: Vec<f64> = words
            .iter()
            .map(|&w| FixedPoint::from_bytes(w).to_f64())
            .collect();
        // Wire order is B0, B1, A1, B2, A2.
        assert_eq!(decoded, vec![1.0, 2.0, 4.0, 3.0, 5.0]);
    }

    #[test]
    fn section_roundtrip() {
        let section = FilterSection {
            b0: 0.1219,
            b1: -0.56,
            b2: 0.0,
            a1: 0.8781,
            a2: 0.0,
        };
        let decoded = words_to_section(&section_to_words(&section));
        assert_approx_eq!(decoded.b0, section.b0, 1e-6);
        assert_approx_eq!(decoded.b1, section.b1, 1e-6);
        assert_approx_eq!(decoded.b2, section.b2, 1e-6);
        assert_approx_eq!(decoded.a1, section.a1, 1e-6);
        assert_approx_eq!(decoded.a2, section.a2, 1e-6);
    }

    #[test]
    fn band_block_layout() {
        let hp = FilterSection {
            b0: -0.9,
            b1: 0.9,
            ..Default::default()
        };
        let lp = FilterSection {
            b0: 0.1,
            a1: 0.9,
            ..Default::default()
        };
        let block = band_to_bytes(&hp, &lp);
        assert_eq!(block.len(), BAND_WORDS * WORD_BYTES);

        let words = split_words(&block);
        let head: [[u8; WORD_BYTES]; SECTION_WORDS] = words[..SECTION_WORDS].try_into().unwrap();
        let tail: [[u8; WORD_BYTES]; SECTION_WORDS] = words[SECTION_WORDS..].try_into().unwrap();
        assert_approx_eq!(words_to_section(&head).b0, -0.9, 1e-6);
        assert_approx_eq!(words_to_section(&tail).a1, 0.9, 1e-6);
    }

    #[test]
    #[should_panic(expected = "word-aligned")]
    fn split_rejects_partial_words() {
        split_words(&[0u8; 7]);
    }
}
