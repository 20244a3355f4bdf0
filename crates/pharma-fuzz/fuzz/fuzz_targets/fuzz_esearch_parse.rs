#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_pharma_papers::client::xml::parse_search_ids;

fuzz_target!(|data: &[u8]| {
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = parse_search_ids(xml);
    }
});
