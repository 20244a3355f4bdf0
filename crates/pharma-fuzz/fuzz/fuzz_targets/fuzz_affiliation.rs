#![no_main]

use libfuzzer_sys::fuzz_target;
use pubmed_pharma_papers::affiliation::{classify, identify_companies};

fuzz_target!(|data: &[u8]| {
    if let Ok(affiliation) = std::str::from_utf8(data) {
        let _ = classify(affiliation);
        for m in identify_companies(affiliation) {
            assert!((0.1..=1.0).contains(&m.confidence));
        }
    }
});
