//! Tests for CSV text to JSON conversion through the public API
//!
//! Tests cover:
//! - Record count and key count against the header
//! - Trimming, quoting, short and long rows
//! - Empty input errors
//! - Pretty vs compact output

use csvjson::conversion::{convert_csv_from_source, convert_csv_string, ConversionConfig};
use csvjson::{
    convert, convert_csv, convert_csv_with_config, ConversionError, ConvertOptions, CsvSource,
    EmptyInputError,
};
use serde_json::{json, Value};

const COMPACT: ConvertOptions = ConvertOptions { prettify: false };
const PRETTY: ConvertOptions = ConvertOptions { prettify: true };

fn parsed(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[cfg(test)]
mod string_conversion_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_row_example() {
        let output = convert("a,b\n1,2\n3", &COMPACT).unwrap();
        assert_eq!(output, r#"[{"a":"1","b":"2"},{"a":"3","b":""}]"#);
    }

    #[test]
    fn test_quoted_comma_example() {
        let output = convert("name,city\n\"Doe, Jo\",NY", &COMPACT).unwrap();
        assert_eq!(output, r#"[{"name":"Doe, Jo","city":"NY"}]"#);
    }

    #[test]
    fn test_record_count_and_key_count() {
        let csv = "id,name,email\n1,Ann,a@x\n2,Bo\n3,Cy,c@x,extra\n4";
        let value = parsed(&convert(csv, &COMPACT).unwrap());
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), 4);
        for record in records {
            let object = record.as_object().unwrap();
            assert_eq!(object.len(), 3);
            assert!(object.values().all(Value::is_string));
        }
    }

    #[test]
    fn test_header_only_gives_empty_array() {
        assert_eq!(convert("a,b,c", &COMPACT).unwrap(), "[]");
        assert_eq!(convert("a,b,c\n", &PRETTY).unwrap(), "[]");
    }

    #[test]
    fn test_extra_columns_dropped() {
        let output = convert("a\n1,2,3", &COMPACT).unwrap();
        assert_eq!(output, r#"[{"a":"1"}]"#);
    }

    #[test]
    fn test_unquoted_and_quoted_fields_are_trimmed() {
        let output = convert("a , b\n  x  ,\"  y  \"", &COMPACT).unwrap();
        assert_eq!(output, r#"[{"a":"x","b":"y"}]"#);
    }

    #[test]
    fn test_numbers_and_booleans_stay_strings() {
        let value = parsed(&convert("n,flag,none\n42,true,null", &COMPACT).unwrap());
        assert_eq!(value, json!([{"n": "42", "flag": "true", "none": "null"}]));
    }

    #[test]
    fn test_duplicate_headers_collapse() {
        let output = convert("k,k\n1,2", &COMPACT).unwrap();
        assert_eq!(output, r#"[{"k":"2"}]"#);
    }

    #[test]
    fn test_blank_line_between_rows_becomes_empty_record() {
        let output = convert("a,b\n1,2\n\n3,4", &COMPACT).unwrap();
        assert_eq!(
            output,
            r#"[{"a":"1","b":"2"},{"a":"","b":""},{"a":"3","b":"4"}]"#
        );
    }

    #[test]
    fn test_crlf_input() {
        let output = convert("a,b\r\n1,2\r\n", &COMPACT).unwrap();
        assert_eq!(output, r#"[{"a":"1","b":"2"}]"#);
    }

    #[test]
    fn test_byte_order_mark_stripped_from_first_header() {
        let output = convert("\u{feff}name,city\nAnn,NY", &COMPACT).unwrap();
        assert_eq!(output, r#"[{"name":"Ann","city":"NY"}]"#);

        let err = convert("\u{feff}\n ", &COMPACT).unwrap_err();
        assert_eq!(err.user_message(), "Please enter CSV data");
    }

    #[test]
    fn test_next_line_character_survives_trimming() {
        let output = convert("a\nx\u{85}", &COMPACT).unwrap();
        assert_eq!(output, "[{\"a\":\"x\u{85}\"}]");
    }

    #[test]
    fn test_empty_input_errors() {
        for input in ["", "   ", "\n\t\r\n "] {
            let err = convert(input, &PRETTY).unwrap_err();
            assert!(
                matches!(err, ConversionError::EmptyInput(EmptyInputError::BlankInput)),
                "input {:?} gave {:?}",
                input,
                err
            );
            assert_eq!(err.user_message(), "Please enter CSV data");
        }
    }

    #[test]
    fn test_pretty_and_compact_differ_only_in_whitespace() {
        let csv = "name,email,age\nJohn,john@example.com,30\nJane,jane@example.com,25";
        let pretty = convert(csv, &PRETTY).unwrap();
        let compact = convert(csv, &COMPACT).unwrap();

        assert_ne!(pretty, compact);
        assert_eq!(parsed(&pretty), parsed(&compact));
        assert!(pretty.contains("\n  {\n    \"name\": \"John\""));
        assert!(!compact.contains(char::is_whitespace));
    }

    #[test]
    fn test_compact_output_is_stable_under_reserialization() {
        let csv = "z,a,m\n\"q \\\" x\",2,3\n4";
        let compact = convert(csv, &COMPACT).unwrap();
        let reserialized = serde_json::to_string(&parsed(&compact)).unwrap();
        assert_eq!(reserialized, compact);
    }

    #[test]
    fn test_default_helpers_pretty_print() {
        let via_default = convert_csv("a\n1").unwrap();
        let via_config = convert_csv_string("a\n1", &ConversionConfig::default()).unwrap();
        assert_eq!(via_default, "[\n  {\n    \"a\": \"1\"\n  }\n]");
        assert_eq!(via_config.content, via_default);
    }

    #[test]
    fn test_file_source_with_compact_config() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut tmp, b"id,tag\n7,\"x, y\"\n").unwrap();

        let config = ConversionConfig::default().with_pretty(false);
        let result =
            convert_csv_from_source(&CsvSource::File(tmp.path().to_path_buf()), &config).unwrap();
        assert_eq!(result.content, r#"[{"id":"7","tag":"x, y"}]"#);
        assert_eq!(result.metadata.shape.record_count, 1);

        let inline = convert_csv_with_config("id,tag\n7,\"x, y\"", &config).unwrap();
        assert_eq!(inline, result.content);
    }
}
