//! WMO weather interpretation codes as used by Open-Meteo

/// Convert a WMO weather code to a Korean description
#[must_use]
pub fn weather_code_to_description(code: u8) -> &'static str {
    match code {
        0 => "맑음",
        1 => "대체로 맑음",
        2 => "구름 조금",
        3 => "흐림",
        45 => "안개",
        48 => "서리 안개",
        51 => "약한 이슬비",
        53 => "이슬비",
        55 => "강한 이슬비",
        56 => "약한 어는 이슬비",
        57 => "강한 어는 이슬비",
        61 => "약한 비",
        63 => "비",
        65 => "강한 비",
        66 => "약한 어는 비",
        67 => "강한 어는 비",
        71 => "약한 눈",
        73 => "눈",
        75 => "강한 눈",
        77 => "싸락눈",
        80 => "약한 소나기",
        81 => "소나기",
        82 => "강한 소나기",
        85 => "약한 눈 소나기",
        86 => "강한 눈 소나기",
        95 => "뇌우",
        96 => "약한 우박을 동반한 뇌우",
        99 => "강한 우박을 동반한 뇌우",
        _ => "알 수 없음",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "맑음")]
    #[case(3, "흐림")]
    #[case(45, "안개")]
    #[case(63, "비")]
    #[case(75, "강한 눈")]
    #[case(95, "뇌우")]
    #[case(99, "강한 우박을 동반한 뇌우")]
    fn test_known_codes(#[case] code: u8, #[case] expected: &str) {
        assert_eq!(weather_code_to_description(code), expected);
    }

    #[rstest]
    #[case(4)]
    #[case(50)]
    #[case(100)]
    #[case(255)]
    fn test_unknown_codes(#[case] code: u8) {
        assert_eq!(weather_code_to_description(code), "알 수 없음");
    }
}
