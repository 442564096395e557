//! 由設定單文字推斷零件類型與製造商

use tooling_core::ComponentType;

/// 依刀具描述推斷零件類型
pub fn classify_component_type(description: &str) -> ComponentType {
    let desc = description.to_lowercase();

    if desc.contains("drill") {
        ComponentType::Drill
    } else if desc.contains("endmill") || desc.contains("end mill") {
        ComponentType::Endmill
    } else if desc.contains("tap") {
        ComponentType::Tap
    } else if desc.contains("bore") || desc.contains("boring") {
        ComponentType::BoringBar
    } else if desc.contains("reamer") {
        ComponentType::Reamer
    } else if desc.contains("holder") || desc.contains("chuck") {
        ComponentType::Holder
    } else if desc.contains("collet") {
        ComponentType::Collet
    } else {
        ComponentType::Other
    }
}

/// 依廠商料號推斷製造商
///
/// 已知前綴優先，否則取料號第一段（以空白或連字號分隔）。
pub fn extract_manufacturer(part_number: &str) -> String {
    let trimmed = part_number.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let upper = trimmed.to_uppercase();
    if upper.starts_with("GARR") {
        return "GARR".to_string();
    }
    if upper.starts_with("OSG") {
        return "OSG".to_string();
    }
    if upper.contains("KEO") {
        return "KEO".to_string();
    }
    if upper.contains("SANDVIK") || upper.starts_with('C') {
        return "Sandvik".to_string();
    }

    trimmed
        .split(|c: char| c == ' ' || c == '-')
        .find(|token| !token.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#7 Drill", ComponentType::Drill)]
    #[case("1/2 4FL End Mill", ComponentType::Endmill)]
    #[case("3/8 ENDMILL", ComponentType::Endmill)]
    #[case("1/4-20 Tap", ComponentType::Tap)]
    #[case("Boring Bar 0.75", ComponentType::BoringBar)]
    #[case("Reamer .250", ComponentType::Reamer)]
    #[case("Shrink Fit Chuck", ComponentType::Holder)]
    #[case("ER32 Collet", ComponentType::Collet)]
    #[case("Face Mill 3in", ComponentType::Other)]
    fn test_classify_component_type(#[case] description: &str, #[case] expected: ComponentType) {
        assert_eq!(classify_component_type(description), expected);
    }

    #[rstest]
    #[case("GARR 31250", "GARR")]
    #[case("osg-8600", "OSG")]
    #[case("54321 KEO", "KEO")]
    #[case("Sandvik R390", "Sandvik")]
    #[case("CNMG 432", "Sandvik")]
    #[case("Harvey-12345", "Harvey")]
    #[case("  ", "")]
    #[case("", "")]
    fn test_extract_manufacturer(#[case] part_number: &str, #[case] expected: &str) {
        assert_eq!(extract_manufacturer(part_number), expected);
    }
}
