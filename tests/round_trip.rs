use dnsleap::{
    Announcement, decode_address,
    sans::{
        announcement::decode_octets,
        check::{CHECK_VALUE, crc8},
    },
};

/// Packs announcements into addresses, choosing check bytes by table lookup.
///
/// The CRC is affine in its input, so `crc8(a ^ b) == crc8(a) ^ crc8(b) ^
/// crc8(0)`, and the check byte for a message follows from its check value with
/// a zero check byte.
struct Encoder {
    check_bytes: [u8; 256],
}

impl Encoder {
    fn new() -> Self {
        let mut check_bytes = [0; 256];
        for b in 0..=255u8 {
            check_bytes[crc8(u32::from(b)) as usize] = b;
        }
        Self { check_bytes }
    }

    fn encode(&self, a: Announcement) -> Option<[u8; 4]> {
        let months = (u32::from(a.year).checked_sub(1971)? * 12 + u32::from(a.month) - 1)
            .checked_sub(10)
            .filter(|m| *m <= 0x7ff)?;
        let action: u32 = match a.delta {
            0 => 0,
            -1 => 1,
            1 => 2,
            _ => return None,
        };
        if a.dtai > 0x7f {
            return None;
        }

        let message = 0xf_u32 << 28 | months << 17 | action << 15 | u32::from(a.dtai) << 8;
        let residue = CHECK_VALUE ^ crc8(message) ^ crc8(0);
        let message = message | u32::from(self.check_bytes[residue as usize]);

        Some(message.to_be_bytes())
    }
}

#[test]
fn round_trip_every_announcement() {
    let encoder = Encoder::new();
    let mut count = 0;

    for year in 1971..=2140 {
        for month in 1..=12 {
            for dtai in 0..=127 {
                for delta in [-1, 0, 1] {
                    let a = Announcement {
                        year,
                        month,
                        dtai,
                        delta,
                    };

                    let Some(octets) = encoder.encode(a) else {
                        assert!((year, month) < (1971, 11), "{a:?} not encodable");
                        continue;
                    };

                    assert_eq!(decode_octets(octets), Ok(a));
                    count += 1;
                }
            }
        }
    }

    assert_eq!(count, (170 * 12 - 10) * 128 * 3);
}

#[test]
fn round_trip_through_text() {
    let encoder = Encoder::new();
    let a = Announcement {
        year: 2016,
        month: 12,
        dtai: 36,
        delta: 1,
    };

    let [o1, o2, o3, o4] = encoder.encode(a).unwrap();
    let text = format!("{o1}.{o2}.{o3}.{o4}");

    assert_eq!(decode_address(&text), Ok(a));
}

#[test]
fn encoder_matches_published_vector() {
    let encoder = Encoder::new();
    let a = Announcement {
        year: 1971,
        month: 12,
        dtai: 9,
        delta: 1,
    };

    assert_eq!(encoder.encode(a), Some([240, 3, 9, 77]));
}

#[test]
fn earliest_representable_month() {
    let encoder = Encoder::new();
    let november = Announcement {
        year: 1971,
        month: 11,
        dtai: 9,
        delta: 0,
    };
    let october = Announcement { month: 10, ..november };

    let octets = encoder.encode(november).unwrap();
    assert_eq!(octets[0], 0xf0);
    assert_eq!(octets[1] >> 1, 0);
    assert_eq!(decode_octets(octets), Ok(november));

    assert_eq!(encoder.encode(october), None);
}
