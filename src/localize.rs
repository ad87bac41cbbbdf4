//! City-name localization
//!
//! OpenWeatherMap reports Korean cities under romanized English names,
//! often with jurisdiction suffixes ("Suwon-si"). Display names come from
//! a static lookup table; unmapped names pass through unchanged so the
//! lookup is total and idempotent on already-localized names.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Provider-specific place-name suffixes stripped on a lookup miss
const JURISDICTION_SUFFIXES: [&str; 3] = ["-si", "-gun", "-do"];

static CITY_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Metropolitan cities
        ("Seoul", "서울"),
        ("Busan", "부산"),
        ("Daegu", "대구"),
        ("Incheon", "인천"),
        ("Gwangju", "광주"),
        ("Daejeon", "대전"),
        ("Ulsan", "울산"),
        ("Sejong", "세종"),
        // Gyeonggi-do
        ("Seongnam", "성남"),
        ("Suwon", "수원"),
        ("Goyang", "고양"),
        ("Yongin", "용인"),
        ("Bucheon", "부천"),
        ("Ansan", "안산"),
        ("Anyang", "안양"),
        ("Namyangju", "남양주"),
        ("Hwaseong", "화성"),
        ("Pyeongtaek", "평택"),
        ("Uijeongbu", "의정부"),
        ("Siheung", "시흥"),
        ("Gimpo", "김포"),
        ("Gwangmyeong", "광명"),
        ("Gunpo", "군포"),
        ("Hanam", "하남"),
        ("Osan", "오산"),
        ("Icheon", "이천"),
        ("Yangju", "양주"),
        ("Paju", "파주"),
        ("Anseong", "안성"),
        ("Guri", "구리"),
        ("Pocheon", "포천"),
        ("Uiwang", "의왕"),
        ("Yangpyeong", "양평"),
        ("Yeoju", "여주"),
        ("Dongducheon", "동두천"),
        ("Gwacheon", "과천"),
        ("Gapyeong", "가평"),
        ("Yeoncheon", "연천"),
        // Gangwon-do
        ("Chuncheon", "춘천"),
        ("Wonju", "원주"),
        ("Gangneung", "강릉"),
        // Chungcheong-do
        ("Cheongju", "청주"),
        ("Cheonan", "천안"),
        // Jeolla-do
        ("Jeonju", "전주"),
        ("Mokpo", "목포"),
        // Gyeongsang-do
        ("Pohang", "포항"),
        ("Changwon", "창원"),
        ("Gimhae", "김해"),
        ("Jinju", "진주"),
    ])
});

/// Map a provider-supplied place name to its display name.
///
/// On a table miss, jurisdiction suffixes are stripped and the lookup is
/// retried once; a second miss returns the input unchanged.
#[must_use]
pub fn localize(provider_name: &str) -> String {
    if let Some(display) = CITY_NAMES.get(provider_name) {
        return (*display).to_string();
    }

    let stripped = strip_jurisdiction_suffixes(provider_name);
    if let Some(display) = CITY_NAMES.get(stripped.as_str()) {
        return (*display).to_string();
    }

    provider_name.to_string()
}

/// Remove every jurisdiction-suffix occurrence, case-insensitively
fn strip_jurisdiction_suffixes(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;

    'outer: while !rest.is_empty() {
        for suffix in JURISDICTION_SUFFIXES {
            if rest.len() >= suffix.len()
                && rest.is_char_boundary(suffix.len())
                && rest[..suffix.len()].eq_ignore_ascii_case(suffix)
            {
                rest = &rest[suffix.len()..];
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Seoul", "서울")]
    #[case("Busan", "부산")]
    #[case("Suwon", "수원")]
    #[case("Suwon-si", "수원")]
    #[case("Cheongju-si", "청주")]
    #[case("Gimhae-SI", "김해")]
    #[case("Hwaseong-si", "화성")]
    fn test_known_cities(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(localize(input), expected);
    }

    #[test]
    fn test_unmapped_name_passes_through() {
        assert_eq!(localize("Springfield"), "Springfield");
        assert_eq!(localize(""), "");
    }

    #[test]
    fn test_unmapped_name_keeps_suffix() {
        // Stripping is a lookup fallback, not a display transformation.
        assert_eq!(localize("Springfield-si"), "Springfield-si");
    }

    #[test]
    fn test_idempotent_on_localized_names() {
        for input in ["Seoul", "Suwon-si", "Springfield", "수원"] {
            let once = localize(input);
            assert_eq!(localize(&once), once);
        }
    }

    #[test]
    fn test_suffix_stripping() {
        assert_eq!(strip_jurisdiction_suffixes("Suwon-si"), "Suwon");
        assert_eq!(strip_jurisdiction_suffixes("Yangpyeong-gun"), "Yangpyeong");
        assert_eq!(strip_jurisdiction_suffixes("Gyeonggi-do"), "Gyeonggi");
        assert_eq!(strip_jurisdiction_suffixes("-si-gun-do"), "");
        assert_eq!(strip_jurisdiction_suffixes("수원"), "수원");
    }
}
