//! GPP (Green Public Procurement) category names and their module ids.
//!
//! The tables list every spelling that occurs in the source spreadsheets,
//! including translations and typos. Entries are matched verbatim; a name
//! missing here is reported as unresolved rather than guessed.

/// Dutch category names (plus English variants) used by the
/// 2024-11-24 multi-module GPP sheet.
pub const DUTCH_GPP_MODULES: &[(&str, &str)] = &[
    (
        "Levensmiddelen, cateringdiensten en verkoopautomaten",
        "gpp-food-catering",
    ),
    ("Onderhoud van de openbare ruimte", "gpp-public-space"),
    // Misspelled in the source sheet.
    ("Ondehoud van de openbare ruimte", "gpp-public-space"),
    ("Textielproducten en -diensten", "gpp-textiles"),
    ("Textiles", "gpp-textiles"),
    ("Textile products and services", "gpp-textiles"),
    (
        "Computers, monitoren, tablets en smartphones",
        "gpp-computers",
    ),
    (
        "Datacentra, serverruimtes en cloudservices",
        "gpp-data-centres",
    ),
    ("Elektriciteit", "gpp-electricity"),
    (
        "Grafische apparatuur, verbruiksartikelen en printdiensten",
        "gpp-imaging-equipment",
    ),
    ("Meubels", "gpp-furniture"),
    ("Meubilair", "gpp-furniture"),
    (
        "Ontwerp, bouw en beheer van kantoorgebouwen",
        "gpp-office-buildings",
    ),
    ("Ontwerp, bouw en onderhoud van wegen", "gpp-road-design"),
    (
        "Straatverlichting en verkeerslichten",
        "gpp-road-lighting",
    ),
    ("Verven, vernissen en wegmarkeringen", "gpp-paints"),
    ("Wegtransport", "gpp-road-transport"),
    ("Wegvervoer", "gpp-road-transport"),
    ("Binnenschoonmaakdiensten", "gpp-cleaning"),
];

/// English `GPP: ...` labels used by the retired single-module GPP sheet.
pub const ENGLISH_GPP_MODULES: &[(&str, &str)] = &[
    (
        "GPP: Food Catering services and vending machines",
        "gpp-food-catering",
    ),
    (
        "GPP: Office Building Design, Construction and Management",
        "gpp-office-buildings",
    ),
    ("GPP: Furniture", "gpp-furniture"),
    ("GPP: Road transport", "gpp-road-transport"),
    (
        "GPP: Computers, monitors, tablets and smartphones",
        "gpp-computers",
    ),
    ("GPP: Public Space Maintenance", "gpp-public-space"),
    (
        "GPP: Road Design, Construction and Maintenance",
        "gpp-road-design",
    ),
    ("GPP: Textiles", "gpp-textiles"),
    (
        "GPP: Imaging Equipment, consumables, and print services",
        "gpp-imaging-equipment",
    ),
    (
        "GPP: Data centres, server rooms and cloud services",
        "gpp-data-centres",
    ),
    ("GPP: Road lighting and traffic signals", "gpp-road-lighting"),
    ("GPP: Cleaning products and services", "gpp-cleaning"),
    ("GPP: Paints, varnishes and road markings", "gpp-paints"),
    ("GPP: Electricity", "gpp-electricity"),
];

pub const ENGLISH_GPP_SKIP_VALUES: &[&str] = &["GPP: Not applicable"];
