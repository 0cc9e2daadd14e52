//! Province-level administrative region codes.
//!
//! The table covers the two-digit prefixes assigned by GB/T 2260 at the
//! province/municipality level. District-level codes (digits 3-6) are not
//! checked; only the leading pair must be a known division.

/// Two-digit area code to region display name.
pub const AREA_CODES: &[(&str, &str)] = &[
    ("11", "北京市"),
    ("12", "天津市"),
    ("13", "河北省"),
    ("14", "山西省"),
    ("15", "内蒙古自治区"),
    ("21", "辽宁省"),
    ("22", "吉林省"),
    ("23", "黑龙江省"),
    ("31", "上海市"),
    ("32", "江苏省"),
    ("33", "浙江省"),
    ("34", "安徽省"),
    ("35", "福建省"),
    ("36", "江西省"),
    ("37", "山东省"),
    ("41", "河南省"),
    ("42", "湖北省"),
    ("43", "湖南省"),
    ("44", "广东省"),
    ("45", "广西壮族自治区"),
    ("46", "海南省"),
    ("50", "重庆市"),
    ("51", "四川省"),
    ("52", "贵州省"),
    ("53", "云南省"),
    ("54", "西藏自治区"),
    ("61", "陕西省"),
    ("62", "甘肃省"),
    ("63", "青海省"),
    ("64", "宁夏回族自治区"),
    ("65", "新疆维吾尔自治区"),
    ("71", "台湾省"),
    ("81", "香港特别行政区"),
    ("82", "澳门特别行政区"),
];

/// Look up the display name for a two-digit area code.
pub fn region_name(area_code: &str) -> Option<&'static str> {
    AREA_CODES
        .iter()
        .find(|(code, _)| *code == area_code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(region_name("11"), Some("北京市"));
        assert_eq!(region_name("82"), Some("澳门特别行政区"));
    }

    #[test]
    fn unknown_codes_are_absent() {
        assert_eq!(region_name("99"), None);
        assert_eq!(region_name("00"), None);
        assert_eq!(region_name("1"), None);
    }

    #[test]
    fn codes_are_unique() {
        for (i, (code, _)) in AREA_CODES.iter().enumerate() {
            assert!(
                AREA_CODES[i + 1..].iter().all(|(other, _)| other != code),
                "duplicate area code {code}"
            );
        }
    }
}
