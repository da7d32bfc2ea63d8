//! Conformance: golden field-set replay (feature `vectors`).
//!
//! Every golden vector is fed through the parse path; the factory outcome
//! and the validation predicate must both match the vector's expectation.

use assoc_core::vectors::{golden_request_vectors, to_json, RequestVector};
use assoc_core::{AssociationRequest, ParameterList};

fn to_parameter_list(vector: &RequestVector) -> ParameterList {
    let mut params = ParameterList::new();
    for (key, value) in &vector.fields {
        params.set(key.clone(), value.clone());
    }
    params
}

#[test]
fn conformance_golden_vectors_replay() {
    for vector in golden_request_vectors() {
        let params = to_parameter_list(&vector);
        let result = AssociationRequest::from_parameters(params);
        assert_eq!(
            result.is_ok(),
            vector.expect_valid,
            "vector '{}' expected valid={} but got {result:?}",
            vector.name,
            vector.expect_valid
        );
        if let Ok(req) = result {
            assert!(req.is_valid());
        }
    }
}

#[test]
fn conformance_golden_vectors_json_stable() {
    let json = to_json();
    let parsed: Vec<RequestVector> = serde_json::from_str(&json).unwrap();
    let originals = golden_request_vectors();
    assert_eq!(parsed.len(), originals.len());
    for (p, o) in parsed.iter().zip(&originals) {
        assert_eq!(p.name, o.name);
        assert_eq!(p.fields, o.fields);
        assert_eq!(p.expect_valid, o.expect_valid);
    }
}
