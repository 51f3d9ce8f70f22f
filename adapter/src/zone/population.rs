/// Population of each zone's principal metropolitan area, bundled so that
/// ambiguous location lookups can be weighted without any I/O. Estimates
/// are derived from public city population data; zones absent from the
/// table count as population 0 during resolution.
pub const ZONE_POPULATIONS: &[(&str, u32)] = &[
    ("Africa/Cairo", 20_901_000),
    ("Africa/Johannesburg", 5_635_000),
    ("Africa/Lagos", 14_368_000),
    ("Africa/Nairobi", 4_735_000),
    ("America/Argentina/Buenos_Aires", 15_594_000),
    ("America/Argentina/Cordoba", 1_548_000),
    ("America/Bogota", 10_978_000),
    ("America/Chicago", 9_533_000),
    ("America/Denver", 2_932_000),
    ("America/Detroit", 4_319_000),
    ("America/Halifax", 439_000),
    ("America/Indiana/Indianapolis", 2_066_000),
    ("America/Lima", 10_719_000),
    ("America/Los_Angeles", 15_067_000),
    ("America/Mexico_City", 20_996_000),
    ("America/New_York", 21_045_000),
    ("America/Phoenix", 4_845_000),
    ("America/Santiago", 6_767_000),
    ("America/Santo_Domingo", 3_318_000),
    ("America/Sao_Paulo", 22_043_000),
    ("America/Toronto", 6_197_000),
    ("America/Vancouver", 2_632_000),
    ("America/Winnipeg", 825_000),
    ("Asia/Bangkok", 10_539_000),
    ("Asia/Dhaka", 21_006_000),
    ("Asia/Dubai", 2_878_000),
    ("Asia/Hong_Kong", 7_482_000),
    ("Asia/Jakarta", 10_770_000),
    ("Asia/Karachi", 16_094_000),
    ("Asia/Kolkata", 14_850_000),
    ("Asia/Manila", 13_923_000),
    ("Asia/Riyadh", 7_231_000),
    ("Asia/Seoul", 9_963_000),
    ("Asia/Shanghai", 22_120_000),
    ("Asia/Singapore", 5_745_000),
    ("Asia/Taipei", 2_646_000),
    ("Asia/Tehran", 9_135_000),
    ("Asia/Tokyo", 37_977_000),
    ("Australia/Brisbane", 2_406_000),
    ("Australia/Melbourne", 4_969_000),
    ("Australia/Perth", 2_059_000),
    ("Australia/Sydney", 5_312_000),
    ("Europe/Amsterdam", 1_149_000),
    ("Europe/Athens", 3_153_000),
    ("Europe/Berlin", 3_645_000),
    ("Europe/Brussels", 1_209_000),
    ("Europe/Dublin", 1_215_000),
    ("Europe/Istanbul", 15_154_000),
    ("Europe/Lisbon", 2_957_000),
    ("Europe/London", 10_979_000),
    ("Europe/Madrid", 6_618_000),
    ("Europe/Moscow", 12_538_000),
    ("Europe/Paris", 11_027_000),
    ("Europe/Prague", 1_306_000),
    ("Europe/Rome", 4_257_000),
    ("Europe/Stockholm", 1_608_000),
    ("Europe/Vienna", 1_915_000),
    ("Europe/Warsaw", 1_791_000),
    ("Europe/Zurich", 435_000),
    ("Pacific/Auckland", 1_607_000),
    ("Pacific/Honolulu", 372_000),
];
