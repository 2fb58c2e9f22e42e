//! Built-in country gazetteer for the choropleth map.
//!
//! Maps country names (and common aliases or ISO 3166-1 alpha-3 codes) to a
//! map region with an approximate centroid. Lookup is case-insensitive and
//! ignores surrounding/repeated whitespace and apostrophe style.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A country that can be placed on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub iso3: &'static str,
    pub name: &'static str,
    /// Centroid latitude in degrees.
    pub lat: f64,
    /// Centroid longitude in degrees.
    pub lon: f64,
}

const fn region(iso3: &'static str, name: &'static str, lat: f64, lon: f64) -> Region {
    Region {
        iso3,
        name,
        lat,
        lon,
    }
}

const REGIONS: &[Region] = &[
    region("AFG", "Afghanistan", 33.9, 67.7),
    region("ALB", "Albania", 41.2, 20.2),
    region("DZA", "Algeria", 28.0, 1.7),
    region("AND", "Andorra", 42.5, 1.5),
    region("AGO", "Angola", -11.2, 17.9),
    region("ATG", "Antigua and Barbuda", 17.1, -61.8),
    region("ARG", "Argentina", -38.4, -63.6),
    region("ARM", "Armenia", 40.1, 45.0),
    region("AUS", "Australia", -25.3, 133.8),
    region("AUT", "Austria", 47.5, 14.6),
    region("AZE", "Azerbaijan", 40.1, 47.6),
    region("BHS", "Bahamas", 25.0, -77.4),
    region("BHR", "Bahrain", 26.0, 50.6),
    region("BGD", "Bangladesh", 23.7, 90.4),
    region("BRB", "Barbados", 13.2, -59.5),
    region("BLR", "Belarus", 53.7, 28.0),
    region("BEL", "Belgium", 50.5, 4.5),
    region("BLZ", "Belize", 17.2, -88.5),
    region("BEN", "Benin", 9.3, 2.3),
    region("BTN", "Bhutan", 27.5, 90.4),
    region("BOL", "Bolivia", -16.3, -63.6),
    region("BIH", "Bosnia and Herzegovina", 43.9, 17.7),
    region("BWA", "Botswana", -22.3, 24.7),
    region("BRA", "Brazil", -14.2, -51.9),
    region("BRN", "Brunei Darussalam", 4.5, 114.7),
    region("BGR", "Bulgaria", 42.7, 25.5),
    region("BFA", "Burkina Faso", 12.2, -1.6),
    region("BDI", "Burundi", -3.4, 29.9),
    region("CPV", "Cabo Verde", 16.0, -24.0),
    region("KHM", "Cambodia", 12.6, 104.9),
    region("CMR", "Cameroon", 7.4, 12.4),
    region("CAN", "Canada", 56.1, -106.3),
    region("CAF", "Central African Republic", 6.6, 20.9),
    region("TCD", "Chad", 15.5, 18.7),
    region("CHL", "Chile", -35.7, -71.5),
    region("CHN", "China", 35.9, 104.2),
    region("COL", "Colombia", 4.6, -74.3),
    region("COM", "Comoros", -11.9, 43.9),
    region("COG", "Congo", -0.2, 15.8),
    region("COD", "Democratic Republic of the Congo", -4.0, 21.8),
    region("CRI", "Costa Rica", 9.7, -83.8),
    region("CIV", "Cote d'Ivoire", 7.5, -5.5),
    region("HRV", "Croatia", 45.1, 15.2),
    region("CUB", "Cuba", 21.5, -77.8),
    region("CYP", "Cyprus", 35.1, 33.4),
    region("CZE", "Czechia", 49.8, 15.5),
    region("DNK", "Denmark", 56.3, 9.5),
    region("DJI", "Djibouti", 11.8, 42.6),
    region("DMA", "Dominica", 15.4, -61.4),
    region("DOM", "Dominican Republic", 18.7, -70.2),
    region("ECU", "Ecuador", -1.8, -78.2),
    region("EGY", "Egypt", 26.8, 30.8),
    region("SLV", "El Salvador", 13.8, -88.9),
    region("GNQ", "Equatorial Guinea", 1.7, 10.3),
    region("ERI", "Eritrea", 15.2, 39.8),
    region("EST", "Estonia", 58.6, 25.0),
    region("SWZ", "Eswatini", -26.5, 31.5),
    region("ETH", "Ethiopia", 9.1, 40.5),
    region("FJI", "Fiji", -17.7, 178.1),
    region("FIN", "Finland", 61.9, 25.7),
    region("FRA", "France", 46.2, 2.2),
    region("GAB", "Gabon", -0.8, 11.6),
    region("GMB", "Gambia", 13.4, -15.3),
    region("GEO", "Georgia", 42.3, 43.4),
    region("DEU", "Germany", 51.2, 10.5),
    region("GHA", "Ghana", 7.9, -1.0),
    region("GRC", "Greece", 39.1, 21.8),
    region("GRD", "Grenada", 12.1, -61.7),
    region("GTM", "Guatemala", 15.8, -90.2),
    region("GIN", "Guinea", 9.9, -9.7),
    region("GNB", "Guinea-Bissau", 11.8, -15.2),
    region("GUY", "Guyana", 4.9, -58.9),
    region("HTI", "Haiti", 19.0, -72.3),
    region("HND", "Honduras", 15.2, -86.2),
    region("HUN", "Hungary", 47.2, 19.5),
    region("ISL", "Iceland", 65.0, -19.0),
    region("IND", "India", 20.6, 79.0),
    region("IDN", "Indonesia", -0.8, 113.9),
    region("IRN", "Iran", 32.4, 53.7),
    region("IRQ", "Iraq", 33.2, 43.7),
    region("IRL", "Ireland", 53.4, -8.2),
    region("ISR", "Israel", 31.0, 34.9),
    region("ITA", "Italy", 41.9, 12.6),
    region("JAM", "Jamaica", 18.1, -77.3),
    region("JPN", "Japan", 36.2, 138.3),
    region("JOR", "Jordan", 30.6, 36.2),
    region("KAZ", "Kazakhstan", 48.0, 66.9),
    region("KEN", "Kenya", 0.02, 37.9),
    region("KIR", "Kiribati", 1.9, -157.4),
    region("PRK", "North Korea", 40.3, 127.5),
    region("KOR", "South Korea", 35.9, 127.8),
    region("XKX", "Kosovo", 42.6, 20.9),
    region("KWT", "Kuwait", 29.3, 47.5),
    region("KGZ", "Kyrgyzstan", 41.2, 74.8),
    region("LAO", "Lao People's Democratic Republic", 19.9, 102.5),
    region("LVA", "Latvia", 56.9, 24.6),
    region("LBN", "Lebanon", 33.9, 35.9),
    region("LSO", "Lesotho", -29.6, 28.2),
    region("LBR", "Liberia", 6.4, -9.4),
    region("LBY", "Libya", 26.3, 17.2),
    region("LIE", "Liechtenstein", 47.2, 9.6),
    region("LTU", "Lithuania", 55.2, 23.9),
    region("LUX", "Luxembourg", 49.8, 6.1),
    region("MDG", "Madagascar", -18.8, 46.9),
    region("MWI", "Malawi", -13.3, 34.3),
    region("MYS", "Malaysia", 4.2, 101.98),
    region("MDV", "Maldives", 3.2, 73.2),
    region("MLI", "Mali", 17.6, -4.0),
    region("MLT", "Malta", 35.9, 14.4),
    region("MHL", "Marshall Islands", 7.1, 171.2),
    region("MRT", "Mauritania", 21.0, -10.9),
    region("MUS", "Mauritius", -20.3, 57.6),
    region("MEX", "Mexico", 23.6, -102.6),
    region("FSM", "Micronesia", 7.4, 150.6),
    region("MDA", "Moldova", 47.4, 28.4),
    region("MCO", "Monaco", 43.7, 7.4),
    region("MNG", "Mongolia", 46.9, 103.8),
    region("MNE", "Montenegro", 42.7, 19.4),
    region("MAR", "Morocco", 31.8, -7.1),
    region("MOZ", "Mozambique", -18.7, 35.5),
    region("MMR", "Myanmar", 21.9, 95.96),
    region("NAM", "Namibia", -22.96, 18.5),
    region("NRU", "Nauru", -0.5, 166.9),
    region("NPL", "Nepal", 28.4, 84.1),
    region("NLD", "Netherlands", 52.1, 5.3),
    region("NZL", "New Zealand", -40.9, 174.9),
    region("NIC", "Nicaragua", 12.9, -85.2),
    region("NER", "Niger", 17.6, 8.1),
    region("NGA", "Nigeria", 9.1, 8.7),
    region("MKD", "North Macedonia", 41.6, 21.7),
    region("NOR", "Norway", 60.5, 8.5),
    region("OMN", "Oman", 21.5, 55.9),
    region("PAK", "Pakistan", 30.4, 69.3),
    region("PLW", "Palau", 7.5, 134.6),
    region("PSE", "State of Palestine", 31.9, 35.2),
    region("PAN", "Panama", 8.5, -80.8),
    region("PNG", "Papua New Guinea", -6.3, 143.96),
    region("PRY", "Paraguay", -23.4, -58.4),
    region("PER", "Peru", -9.2, -75.0),
    region("PHL", "Philippines", 12.9, 121.8),
    region("POL", "Poland", 51.9, 19.1),
    region("PRT", "Portugal", 39.4, -8.2),
    region("QAT", "Qatar", 25.4, 51.2),
    region("ROU", "Romania", 45.9, 24.97),
    region("RUS", "Russian Federation", 61.5, 105.3),
    region("RWA", "Rwanda", -1.9, 29.9),
    region("KNA", "Saint Kitts and Nevis", 17.4, -62.8),
    region("LCA", "Saint Lucia", 13.9, -60.98),
    region("VCT", "Saint Vincent and the Grenadines", 12.98, -61.3),
    region("WSM", "Samoa", -13.8, -172.1),
    region("SMR", "San Marino", 43.9, 12.5),
    region("STP", "Sao Tome and Principe", 0.2, 6.6),
    region("SAU", "Saudi Arabia", 23.9, 45.1),
    region("SEN", "Senegal", 14.5, -14.5),
    region("SRB", "Serbia", 44.0, 21.0),
    region("SYC", "Seychelles", -4.7, 55.5),
    region("SLE", "Sierra Leone", 8.5, -11.8),
    region("SGP", "Singapore", 1.4, 103.8),
    region("SVK", "Slovakia", 48.7, 19.7),
    region("SVN", "Slovenia", 46.2, 14.99),
    region("SLB", "Solomon Islands", -9.6, 160.2),
    region("SOM", "Somalia", 5.2, 46.2),
    region("ZAF", "South Africa", -30.6, 22.9),
    region("SSD", "South Sudan", 6.9, 31.3),
    region("ESP", "Spain", 40.5, -3.7),
    region("LKA", "Sri Lanka", 7.9, 80.8),
    region("SDN", "Sudan", 12.9, 30.2),
    region("SUR", "Suriname", 3.9, -56.0),
    region("SWE", "Sweden", 60.1, 18.6),
    region("CHE", "Switzerland", 46.8, 8.2),
    region("SYR", "Syrian Arab Republic", 34.8, 38.99),
    region("TJK", "Tajikistan", 38.9, 71.3),
    region("TZA", "United Republic of Tanzania", -6.4, 34.9),
    region("THA", "Thailand", 15.9, 100.99),
    region("TLS", "Timor-Leste", -8.9, 125.7),
    region("TGO", "Togo", 8.6, 0.8),
    region("TON", "Tonga", -21.2, -175.2),
    region("TTO", "Trinidad and Tobago", 10.7, -61.2),
    region("TUN", "Tunisia", 33.9, 9.5),
    region("TUR", "Turkiye", 38.96, 35.2),
    region("TKM", "Turkmenistan", 38.97, 59.6),
    region("TUV", "Tuvalu", -7.1, 177.6),
    region("UGA", "Uganda", 1.4, 32.3),
    region("UKR", "Ukraine", 48.4, 31.2),
    region("ARE", "United Arab Emirates", 23.4, 53.8),
    region("GBR", "United Kingdom", 55.4, -3.4),
    region("USA", "United States", 37.1, -95.7),
    region("URY", "Uruguay", -32.5, -55.8),
    region("UZB", "Uzbekistan", 41.4, 64.6),
    region("VUT", "Vanuatu", -15.4, 166.96),
    region("VEN", "Venezuela", 6.4, -66.6),
    region("VNM", "Viet Nam", 14.1, 108.3),
    region("YEM", "Yemen", 15.6, 48.5),
    region("ZMB", "Zambia", -13.1, 27.8),
    region("ZWE", "Zimbabwe", -19.0, 29.2),
];

/// Alternative spellings found in indicator datasets, keyed to ISO3 codes.
const ALIASES: &[(&str, &str)] = &[
    ("Bolivia (Plurinational State of)", "BOL"),
    ("Brunei", "BRN"),
    ("Cape Verde", "CPV"),
    ("Côte d'Ivoire", "CIV"),
    ("Ivory Coast", "CIV"),
    ("Congo, Republic of the", "COG"),
    ("Republic of the Congo", "COG"),
    ("Congo, Democratic Republic of the", "COD"),
    ("Congo, Dem. Rep.", "COD"),
    ("DR Congo", "COD"),
    ("Czech Republic", "CZE"),
    ("Swaziland", "SWZ"),
    ("Gambia, The", "GMB"),
    ("The Gambia", "GMB"),
    ("Iran (Islamic Republic of)", "IRN"),
    ("Iran, Islamic Rep.", "IRN"),
    ("Democratic People's Republic of Korea", "PRK"),
    ("Korea, Dem. People's Rep.", "PRK"),
    ("Republic of Korea", "KOR"),
    ("Korea, Rep.", "KOR"),
    ("Kyrgyz Republic", "KGZ"),
    ("Lao PDR", "LAO"),
    ("Laos", "LAO"),
    ("Micronesia (Federated States of)", "FSM"),
    ("Republic of Moldova", "MDA"),
    ("Burma", "MMR"),
    ("Macedonia", "MKD"),
    ("The former Yugoslav Republic of Macedonia", "MKD"),
    ("Palestine", "PSE"),
    ("West Bank and Gaza", "PSE"),
    ("Russia", "RUS"),
    ("Syria", "SYR"),
    ("Tanzania", "TZA"),
    ("East Timor", "TLS"),
    ("Turkey", "TUR"),
    ("Türkiye", "TUR"),
    ("United Kingdom of Great Britain and Northern Ireland", "GBR"),
    ("UK", "GBR"),
    ("United States of America", "USA"),
    ("USA", "USA"),
    ("Venezuela (Bolivarian Republic of)", "VEN"),
    ("Venezuela, RB", "VEN"),
    ("Vietnam", "VNM"),
    ("Yemen, Rep.", "YEM"),
    ("Egypt, Arab Rep.", "EGY"),
    ("Sao Tome & Principe", "STP"),
    ("São Tomé and Príncipe", "STP"),
];

static INDEX: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(REGIONS.len() * 2 + ALIASES.len());
    for (i, region) in REGIONS.iter().enumerate() {
        index.insert(normalize(region.name), i);
        index.insert(normalize(region.iso3), i);
    }
    for (alias, iso3) in ALIASES {
        if let Some(i) = REGIONS.iter().position(|r| r.iso3 == *iso3) {
            index.insert(normalize(alias), i);
        }
    }
    index
});

/// Canonical lookup key: lower-case, single-spaced, straight apostrophes.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(['\u{2019}', '\u{2018}', '`'], "'")
        .to_lowercase()
}

/// Find the map region for a country name, alias or ISO3 code.
#[must_use]
pub fn resolve(name: &str) -> Option<&'static Region> {
    INDEX.get(&normalize(name)).map(|&i| &REGIONS[i])
}

#[cfg(test)]
#[path = "gazetteer_tests.rs"]
mod tests;
