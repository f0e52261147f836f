// Extraction payload parsing: response shape, error truthiness, allow-list

use viewer_wasm::models::ExtractionResponse;
use viewer_wasm::ViewerError;

const SAMPLE: &str = r#"{
  "general_info": [
    ["Institute Code & Name", "123 Example Institute"],
    ["RollNo", "2203456"],
    ["EnrollmentNo", "EN-99812"],
    ["Name", "Asha Verma"],
    ["Hindi Name", "..."],
    ["Gender", "Female"]
  ],
  "marksheet_blocks": [
    {
      "header": ["Code", "Name", "Type", "Internal", "External", "Back Paper", "Grade"],
      "rows": [
        ["MCA101", "Programming", "Theory", "28", "52", "--", "A"],
        ["MCA102", "Maths", "Theory", "25", "48", "--", "B+"]
      ],
      "summary": {
        "Semester": "1",
        "Even/Odd": "Odd",
        "Total Marks Obt.": "612",
        "Result Status": "PASS",
        "SGPA": "8.4"
      }
    }
  ]
}"#;

#[test]
fn parses_a_full_backend_response() {
    let response = ExtractionResponse::from_json(SAMPLE).expect("sample parses");

    assert_eq!(response.general_info.len(), 6);
    assert_eq!(response.marksheet_blocks.len(), 1);
    assert!(!response.is_error());
    assert!(!response.is_empty());

    let block = &response.marksheet_blocks[0];
    assert_eq!(block.header.as_deref().map(<[_]>::len), Some(7));
    assert_eq!(block.rows[0][0], "MCA101");

    let summary = block.summary.as_ref().expect("summary present");
    assert_eq!(summary.semester, "1");
    assert_eq!(summary.total_marks, "612");
    assert_eq!(summary.sgpa, "8.4");
    assert_eq!(summary.result_status, "PASS");
}

#[test]
fn blocks_without_header_or_summary_parse() {
    let response =
        ExtractionResponse::from_json(r#"{"marksheet_blocks": [{"rows": [["a", "b"]]}]}"#)
            .expect("minimal block parses");
    let block = &response.marksheet_blocks[0];
    assert!(block.header.is_none());
    assert!(block.summary.is_none());
    assert_eq!(block.rows, vec![vec!["a".to_string(), "b".to_string()]]);
}

#[test]
fn empty_response_without_error_is_the_no_data_case() {
    let response =
        ExtractionResponse::from_json(r#"{"marksheet_blocks": [], "general_info": []}"#)
            .expect("empty response parses");
    assert!(!response.is_error());
    assert!(response.is_empty());
}

#[test]
fn truthy_error_values_mark_the_response_failed() {
    for error in [r#"true"#, r#""boom""#, r#"1"#, r#"{"detail": "x"}"#] {
        let response = ExtractionResponse::from_json(&format!(r#"{{"error": {}}}"#, error))
            .expect("error response parses");
        assert!(response.is_error(), "error={} should be treated as failure", error);
    }
}

#[test]
fn falsy_error_values_do_not_mark_the_response_failed() {
    for error in [r#"false"#, r#"null"#, r#""""#, r#"0"#] {
        let response = ExtractionResponse::from_json(&format!(r#"{{"error": {}}}"#, error))
            .expect("error response parses");
        assert!(!response.is_error(), "error={} should not be treated as failure", error);
    }
}

#[test]
fn fully_filtered_general_info_is_still_the_no_data_case() {
    // Every pair fails the allow-list, so nothing would render.
    let response = ExtractionResponse::from_json(
        r#"{
            "general_info": [["Institute Code & Name", "x"], ["Session", "2023-24"]],
            "marksheet_blocks": []
        }"#,
    )
    .expect("filtered response parses");
    assert!(!response.is_error());
    assert!(response.is_empty());
}

#[test]
fn display_pairs_apply_the_allow_list_in_payload_order() {
    let response = ExtractionResponse::from_json(SAMPLE).expect("sample parses");
    assert_eq!(
        response.display_pairs(),
        vec![
            ("RollNo", "2203456"),
            ("EnrollmentNo", "EN-99812"),
            ("Name", "Asha Verma"),
            ("Gender", "Female"),
        ]
    );
}

#[test]
fn malformed_json_surfaces_as_payload_error() {
    let err = ExtractionResponse::from_json("{not json").expect_err("must fail");
    assert!(matches!(err, ViewerError::Payload(_)));
}
