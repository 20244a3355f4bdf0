//! Static lookup tables for affiliation classification.
//!
//! All entries are lowercase and matched as plain substrings of the
//! lowercased affiliation text.

/// Terms that mark an affiliation as academic, clinical or governmental.
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "school",
    "institute",
    "institution",
    "hospital",
    "medical center",
    "health system",
    "clinic",
    "department",
    "faculty",
    "division",
    "center for",
    "centre for",
    "national institutes",
    "nih",
    "nsf",
    "government",
    "public health",
    "ministry of health",
    "veterans affairs",
    "va medical",
];

/// Terms that signal an industry employer.
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "pharmaceuticals",
    "pharma",
    "therapeutics",
    "biosciences",
    "biotechnology",
    "biotech",
    "biopharma",
    "biopharmaceuticals",
    "medicines",
    "drugs",
    "inc.",
    "corp.",
    "corporation",
    "ltd.",
    "limited",
    "co.",
    "laboratories",
    "labs",
    "clinical trials",
    "cro",
    "contract research",
];

/// Curated pharma, biotech, generic-pharma and CRO names.
pub const KNOWN_COMPANIES: &[&str] = &[
    // Major pharmaceutical and life-science tools companies
    "pfizer",
    "johnson & johnson",
    "j&j",
    "roche",
    "novartis",
    "merck",
    "sanofi",
    "glaxosmithkline",
    "gsk",
    "astrazeneca",
    "bristol myers squibb",
    "bms",
    "abbott",
    "eli lilly",
    "lilly",
    "amgen",
    "gilead",
    "biogen",
    "celgene",
    "regeneron",
    "vertex",
    "moderna",
    "biontech",
    "illumina",
    "thermo fisher",
    "agilent",
    "waters",
    "perkinelmer",
    "danaher",
    "becton dickinson",
    "bd",
    "medtronic",
    "boston scientific",
    "edwards lifesciences",
    "intuitive surgical",
    "stryker",
    // Biotech
    "genentech",
    "immunogen",
    "seattle genetics",
    "seagen",
    "bluebird bio",
    "crispr therapeutics",
    "editas medicine",
    "intellia therapeutics",
    "sangamo therapeutics",
    "alnylam",
    "ionis pharmaceuticals",
    "antisense therapeutics",
    "wave life sciences",
    "sarepta therapeutics",
    "biomarin",
    "alexion",
    "ultragenyx",
    "horizon therapeutics",
    "jazz pharmaceuticals",
    "neurocrine biosciences",
    "sage therapeutics",
    "karuna therapeutics",
    "compass pathways",
    "mindmed",
    // Generic and specialty pharma
    "teva",
    "mylan",
    "viatris",
    "sandoz",
    "hikma",
    "sun pharma",
    "dr reddy",
    "lupin",
    "cipla",
    "aurobindo",
    "zydus cadila",
    "torrent pharmaceuticals",
    "glenmark",
    "alkem laboratories",
    // CROs, CDMOs and service providers
    "quintiles",
    "iqvia",
    "covance",
    "parexel",
    "pra health sciences",
    "syneos health",
    "icon",
    "ppd",
    "charles river laboratories",
    "wuxi apptec",
    "catalent",
    "lonza",
    "samsung biologics",
    "boehringer ingelheim",
    "fujifilm diosynth",
    "patheon",
];

/// Email domain fragments that belong to academic or government hosts.
pub const ACADEMIC_EMAIL_MARKERS: &[&str] = &[".edu", ".ac.", ".gov"];

/// Suffix words that turn a preceding phrase into a company name candidate.
pub const COMPANY_SUFFIXES: &[&str] =
    &["pharmaceuticals", "pharma", "therapeutics", "biotech", "biosciences"];

/// First entry of `terms` that occurs in `text`.
#[must_use]
pub fn find_term(text: &str, terms: &'static [&'static str]) -> Option<&'static str> {
    terms.iter().copied().find(|term| text.contains(term))
}
