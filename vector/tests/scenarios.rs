use packvec::{BitVec, Error, FloatVec, IntVec, NumVec, Radix, Traverse};
use pretty_assertions::assert_eq;

fn evens(len: usize) -> BitVec {
    let mut bits = BitVec::with_len(len);
    for i in (0..len).step_by(2) {
        bits.set(i as isize, true).unwrap();
    }
    bits
}

#[test]
fn even_bits_in_every_radix() {
    let bits = evens(20);
    assert_eq!(bits.to_string_radix(Radix::Base2), "0b10101010101010101010");
    assert_eq!(bits.to_string_radix(Radix::Base16), "0x55555");
    assert_eq!(bits.to_string_radix(Radix::Base8), "05252521");
    assert_eq!(bits.to_string_radix(Radix::Base64), "/lll1");
}

#[test]
fn legacy_base64_strings() {
    for s in ["1000AFG", "jba87uygb890jhg+/kjAHJGGJHGgsh"] {
        let encoded = format!("/{s}");
        let bits: BitVec = encoded.parse().unwrap();
        assert!(bits.len() >= s.len() * 6);
        assert_eq!(bits.to_string(), encoded);
        assert_eq!(bits.to_string_radix(Radix::Base64), encoded);
    }
}

#[test]
fn unprefixed_strings_are_rejected() {
    assert!(matches!(
        "1000AFG".parse::<BitVec>(),
        Err(Error::Parse { input_pos: 0, .. })
    ));
    assert!("".parse::<BitVec>().is_err());
    assert!("0x1z".parse::<BitVec>().is_err());
}

#[test]
fn radix_conversion() {
    let bits: BitVec = "0x55555".parse().unwrap();
    assert_eq!(bits, evens(20));
    let bits: BitVec = "0b10101010101010101010".parse().unwrap();
    assert_eq!(bits, evens(20));
}

#[test]
fn json_forms() {
    let bits = evens(20);
    assert_eq!(bits.to_json_string(), "BitVec[/lll1]");
    assert_eq!(serde_json::to_string(&bits).unwrap(), "\"/lll1\"");
    let back: BitVec = serde_json::from_str("\"/lll1\"").unwrap();
    assert_eq!(back.to_string(), "/lll1");
    assert_eq!(back, bits);
    assert!(serde_json::from_str::<BitVec>("\"lll1\"").is_err());

    let ints: IntVec = "1,-2,3".parse().unwrap();
    assert_eq!(ints.to_json_string(), "IntVec:1,-2,3");
    assert_eq!(serde_json::to_string(&ints).unwrap(), "[1,-2,3]");
    let back: IntVec = serde_json::from_str("[1,-2,3]").unwrap();
    assert_eq!(back, ints);

    let floats: FloatVec = serde_json::from_str("[0.5,2.0]").unwrap();
    assert_eq!(floats.to_string(), "0.5,2");
    assert_eq!(floats.to_json_string(), "FloatVec[0.5,2]");
}

#[test]
fn numeric_scenarios() {
    let v: IntVec = "1,2,3".parse().unwrap();
    assert_eq!(v.to_string(), "1,2,3");
    assert_eq!(v.get(1000), 0);

    let mut v = IntVec::new();
    assert_eq!(v.set(2, 3), Ok(3));
    assert_eq!(v.to_string(), "0,0,3");
    assert_eq!(v.len(), 3);

    let v = NumVec::<i64>::with_len(5);
    assert_eq!(v.to_string(), "0,0,0,0,0");
}

#[test]
fn malformed_numbers() {
    assert!("1,two,3".parse::<IntVec>().is_err());
    assert!("1;2".parse::<IntVec>().is_err());
    assert!("1.5.2".parse::<FloatVec>().is_err());
    assert!("".parse::<IntVec>().unwrap().is_empty());
}

#[test]
fn traversal_leaves_source_alone() {
    let bits = evens(10);
    let before = bits.clone();
    let doubled = bits.map(|b| if b { 2 } else { 0 });
    assert_eq!(doubled.len(), bits.len());
    assert_eq!(bits.reduce(0, |acc, b| acc * 2 + u32::from(b)), 0b1010101010);
    assert_eq!(bits, before);
}
