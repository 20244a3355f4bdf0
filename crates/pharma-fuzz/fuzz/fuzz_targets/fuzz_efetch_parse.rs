#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_pharma_papers::build_records;
use pubmed_pharma_papers::client::xml::parse_articles;

fuzz_target!(|data: &[u8]| {
    // Parse then filter; neither step may panic
    if let Ok(xml) = std::str::from_utf8(data) {
        if let Ok(papers) = parse_articles(xml) {
            let _ = build_records(&papers);
        }
    }
});
