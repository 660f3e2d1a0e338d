// sidcard/src/record/ethnicity.rs

/// Look up the ethnic-group name for a chip-encoded numeric code.
///
/// Codes follow GB/T 3304: 1-56 for the recognized groups plus 97
/// ("Other") and 98 (naturalized citizens of foreign descent). Unmapped
/// codes yield an empty name, not an error; the field simply stays blank.
pub fn ethnicity_name(code: u32) -> &'static str {
    match code {
        1 => "Han",
        2 => "Mongol",
        3 => "Hui",
        4 => "Tibetan",
        5 => "Uygur",
        6 => "Miao",
        7 => "Yi",
        8 => "Zhuang",
        9 => "Buyei",
        10 => "Korean",
        11 => "Manchu",
        12 => "Dong",
        13 => "Yao",
        14 => "Bai",
        15 => "Tujia",
        16 => "Hani",
        17 => "Kazak",
        18 => "Dai",
        19 => "Li",
        20 => "Lisu",
        21 => "Va",
        22 => "She",
        23 => "Gaoshan",
        24 => "Lahu",
        25 => "Sui",
        26 => "Dongxiang",
        27 => "Naxi",
        28 => "Jingpo",
        29 => "Kirgiz",
        30 => "Tu",
        31 => "Daur",
        32 => "Mulao",
        33 => "Qiang",
        34 => "Blang",
        35 => "Salar",
        36 => "Maonan",
        37 => "Gelao",
        38 => "Xibe",
        39 => "Achang",
        40 => "Pumi",
        41 => "Tajik",
        42 => "Nu",
        43 => "Uzbek",
        44 => "Russian",
        45 => "Ewenki",
        46 => "Deang",
        47 => "Bonan",
        48 => "Yugur",
        49 => "Gin",
        50 => "Tatar",
        51 => "Derung",
        52 => "Oroqen",
        53 => "Hezhen",
        54 => "Monba",
        55 => "Lhoba",
        56 => "Jino",
        97 => "Other",
        98 => "Chinese citizen of foreign descent",
        _ => "",
    }
}
