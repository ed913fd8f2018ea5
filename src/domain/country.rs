//! Static ISO 3166-1 alpha-2 ↔ 5sim country name table.

use crate::domain::validation::ValidationError;

/// `(ISO code, 5sim country name)` pairs. Both columns are unique.
const COUNTRIES: &[(&str, &str)] = &[
    ("AF", "afghanistan"),
    ("AL", "albania"),
    ("DZ", "algeria"),
    ("AO", "angola"),
    ("AI", "anguilla"),
    ("AG", "antiguaandbarbuda"),
    ("AR", "argentina"),
    ("AM", "armenia"),
    ("AW", "aruba"),
    ("AU", "australia"),
    ("AT", "austria"),
    ("AZ", "azerbaijan"),
    ("BS", "bahamas"),
    ("BH", "bahrain"),
    ("BD", "bangladesh"),
    ("BB", "barbados"),
    ("BY", "belarus"),
    ("BE", "belgium"),
    ("BZ", "belize"),
    ("BJ", "benin"),
    ("BT", "bhutane"),
    ("BA", "bih"),
    ("BO", "bolivia"),
    ("BW", "botswana"),
    ("BR", "brazil"),
    ("BG", "bulgaria"),
    ("BF", "burkinafaso"),
    ("BI", "burundi"),
    ("KH", "cambodia"),
    ("CM", "cameroon"),
    ("CA", "canada"),
    ("CV", "capeverde"),
    ("TD", "chad"),
    ("CL", "chile"),
    ("CO", "colombia"),
    ("KM", "comoros"),
    ("CG", "congo"),
    ("CR", "costarica"),
    ("HR", "croatia"),
    ("CY", "cyprus"),
    ("CZ", "czech"),
    ("DK", "denmark"),
    ("DJ", "djibouti"),
    ("DM", "dominica"),
    ("DO", "dominicana"),
    ("TL", "easttimor"),
    ("EC", "ecuador"),
    ("EG", "egypt"),
    ("GB", "england"),
    ("GQ", "equatorialguinea"),
    ("ER", "eritrea"),
    ("EE", "estonia"),
    ("ET", "ethiopia"),
    ("FI", "finland"),
    ("FR", "france"),
    ("GF", "frenchguiana"),
    ("GA", "gabon"),
    ("GM", "gambia"),
    ("GE", "georgia"),
    ("DE", "germany"),
    ("GH", "ghana"),
    ("GR", "greece"),
    ("GD", "grenada"),
    ("GP", "guadeloupe"),
    ("GT", "guatemala"),
    ("GN", "guinea"),
    ("GW", "guineabissau"),
    ("GY", "guyana"),
    ("HT", "haiti"),
    ("HN", "honduras"),
    ("HK", "hongkong"),
    ("HU", "hungary"),
    ("IN", "india"),
    ("ID", "indonesia"),
    ("IE", "ireland"),
    ("IL", "israel"),
    ("IT", "italy"),
    ("CI", "ivorycoast"),
    ("JM", "jamaica"),
    ("JP", "japan"),
    ("JO", "jordan"),
    ("KZ", "kazakhstan"),
    ("KE", "kenya"),
    ("KW", "kuwait"),
    ("KG", "kyrgyzstan"),
    ("LA", "laos"),
    ("LV", "latvia"),
    ("LS", "lesotho"),
    ("LR", "liberia"),
    ("LT", "lithuania"),
    ("LU", "luxembourg"),
    ("MO", "macau"),
    ("MG", "madagascar"),
    ("MW", "malawi"),
    ("MY", "malaysia"),
    ("MV", "maldives"),
    ("MR", "mauritania"),
    ("MU", "mauritius"),
    ("MX", "mexico"),
    ("MD", "moldova"),
    ("MN", "mongolia"),
    ("ME", "montenegro"),
    ("MS", "montserrat"),
    ("MA", "morocco"),
    ("MZ", "mozambique"),
    ("MM", "myanmar"),
    ("NA", "namibia"),
    ("NP", "nepal"),
    ("NL", "netherlands"),
    ("NC", "newcaledonia"),
    ("NZ", "newzealand"),
    ("NI", "nicaragua"),
    ("NE", "niger"),
    ("NG", "nigeria"),
    ("MK", "northmacedonia"),
    ("NO", "norway"),
    ("OM", "oman"),
    ("PK", "pakistan"),
    ("PA", "panama"),
    ("PG", "papuanewguinea"),
    ("PY", "paraguay"),
    ("PE", "peru"),
    ("PH", "philippines"),
    ("PL", "poland"),
    ("PT", "portugal"),
    ("PR", "puertorico"),
    ("RE", "reunion"),
    ("RO", "romania"),
    ("RU", "russia"),
    ("RW", "rwanda"),
    ("KN", "saintkittsandnevis"),
    ("LC", "saintlucia"),
    ("VC", "saintvincentandgrenadines"),
    ("SV", "salvador"),
    ("WS", "samoa"),
    ("SA", "saudiarabia"),
    ("SN", "senegal"),
    ("RS", "serbia"),
    ("SC", "seychelles"),
    ("SL", "sierraleone"),
    ("SG", "singapore"),
    ("SK", "slovakia"),
    ("SI", "slovenia"),
    ("SB", "solomonislands"),
    ("ZA", "southafrica"),
    ("ES", "spain"),
    ("LK", "srilanka"),
    ("SR", "suriname"),
    ("SZ", "swaziland"),
    ("SE", "sweden"),
    ("CH", "switzerland"),
    ("TW", "taiwan"),
    ("TJ", "tajikistan"),
    ("TZ", "tanzania"),
    ("TH", "thailand"),
    ("TT", "tit"),
    ("TG", "togo"),
    ("TO", "tonga"),
    ("TN", "tunisia"),
    ("TR", "turkey"),
    ("TM", "turkmenistan"),
    ("TC", "turksandcaicos"),
    ("UG", "uganda"),
    ("UA", "ukraine"),
    ("UY", "uruguay"),
    ("US", "usa"),
    ("UZ", "uzbekistan"),
    ("VE", "venezuela"),
    ("VN", "vietnam"),
    ("VG", "virginislands"),
    ("ZM", "zambia"),
    ("ZW", "zimbabwe"),
];

/// Map an ISO alpha-2 code (case-insensitive) to the 5sim country name.
pub fn country_name(iso: &str) -> Result<&'static str, ValidationError> {
    let iso = iso.trim();
    COUNTRIES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(iso))
        .map(|(_, name)| *name)
        .ok_or_else(|| ValidationError::UnknownIsoCountry {
            code: iso.to_owned(),
        })
}

/// Map a 5sim country name back to its ISO code, or `default` when unknown.
pub fn iso_country<'a>(name: &str, default: &'a str) -> &'a str {
    let name = name.trim();
    COUNTRIES
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(name))
        .map_or(default, |(code, _)| *code)
}
